//! Fill Message Protocol
//!
//! The popup never ships code into the page. It sends this data-only
//! message over the runtime message channel, and the content script's
//! pre-registered handler interprets it.

use serde::{Deserialize, Serialize};

/// Tag distinguishing fill requests from unrelated runtime messages.
pub const FILL_REQUEST_KIND: &str = "autoSearchFill";

/// Message sent from the popup to the content script.
///
/// The content handler ignores anything that does not decode to this
/// shape or whose `kind` is not [`FILL_REQUEST_KIND`], so other
/// extensions' messages (or future message types) pass through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillRequest {
    kind: String,
    /// CSS selector for the target element. May be empty; the handler
    /// no-ops on it.
    pub selector: String,
    /// Replacement value for the target element.
    pub value: String,
}

impl FillRequest {
    pub fn new(selector: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: FILL_REQUEST_KIND.to_string(),
            selector: selector.into(),
            value: value.into(),
        }
    }

    /// True when the message is actually a fill request.
    pub fn is_fill(&self) -> bool {
        self.kind == FILL_REQUEST_KIND
    }
}
