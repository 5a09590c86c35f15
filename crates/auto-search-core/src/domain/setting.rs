//! Setting Entity
//!
//! The singleton configuration record: which element the fill targets.

use serde::{Deserialize, Serialize};

/// Extension configuration.
///
/// `textbox_id` is a CSS selector; the persisted field name stays
/// `textboxId` because the stored record predates this crate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Setting {
    /// Selector for the input element the fill action targets.
    #[serde(rename = "textboxId", default)]
    pub textbox_id: String,
}

impl Setting {
    pub fn new(textbox_id: impl Into<String>) -> Self {
        Self {
            textbox_id: textbox_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_serialization_shape() {
        let json = serde_json::to_string(&Setting::new("#q")).unwrap();
        assert_eq!(json, r##"{"textboxId":"#q"}"##);
    }

    #[test]
    fn test_empty_object_parses_to_default() {
        let setting: Setting = serde_json::from_str("{}").unwrap();
        assert_eq!(setting, Setting::default());
        assert_eq!(setting.textbox_id, "");
    }
}
