//! Export Bundle
//!
//! Snapshot of both persisted records for backup and restore.

use serde::{Deserialize, Serialize};

use super::item::Item;
use super::setting::Setting;

/// Default filename the popup offers when downloading an export.
pub const EXPORT_FILENAME: &str = "auto_search_settings.json";

/// The user-facing backup format: both records, nothing else.
///
/// There is no version field. Importing a bundle fully replaces both
/// records; there is no merge and no partial import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    pub items: Vec<Item>,
    pub setting: Setting,
}

impl ExportBundle {
    /// Pretty-print the bundle the way the download file is written.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Parse a bundle from an imported file.
    ///
    /// Both top-level fields must be present; a failure here happens
    /// before any storage write, so a bad file leaves state untouched.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExportBundle {
        ExportBundle {
            items: vec![Item {
                name: "Gmail".to_string(),
                value: "test@example.com".to_string(),
                instruction: vec!["Open gmail.com".to_string()],
            }],
            setting: Setting::new("#q"),
        }
    }

    #[test]
    fn test_export_shape() {
        let compact = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            compact,
            r##"{"items":[{"name":"Gmail","value":"test@example.com","instruction":["Open gmail.com"]}],"setting":{"textboxId":"#q"}}"##
        );
    }

    #[test]
    fn test_pretty_round_trip() {
        let bundle = sample();
        let parsed = ExportBundle::from_json(&bundle.to_json_pretty()).unwrap();
        assert_eq!(parsed, bundle);
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        assert!(ExportBundle::from_json("not json").is_err());
        // A bundle must carry both records.
        assert!(ExportBundle::from_json(r#"{"items":[]}"#).is_err());
        assert!(ExportBundle::from_json(r#"{"setting":{"textboxId":""}}"#).is_err());
    }
}
