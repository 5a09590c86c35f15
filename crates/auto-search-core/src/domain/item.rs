//! Item Entity
//!
//! One fillable entry: a display name, the value pushed into the page,
//! and free-text usage instructions.

use serde::{Deserialize, Serialize};

/// A named fill-value with its usage instructions.
///
/// Items live in one ordered list whose insertion order is the display
/// order. The `name` is the uniqueness key across the list; mutations
/// address items by their position in the list instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, unique across the list.
    pub name: String,
    /// The text injected into the target field.
    pub value: String,
    /// Ordered free-text instructions shown with the item.
    #[serde(default)]
    pub instruction: Vec<String>,
}

impl Item {
    /// Create an item without instructions.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            instruction: Vec::new(),
        }
    }
}

/// Check whether `name` is already used by another item.
///
/// `skip` excludes one position from the check so that editing an item
/// does not collide with itself. The storage layer performs no
/// uniqueness checks of its own; call sites run this before mutating.
pub fn name_taken(items: &[Item], name: &str, skip: Option<usize>) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, item)| Some(i) != skip && item.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serialization_shape() {
        let item = Item {
            name: "Gmail".to_string(),
            value: "test@example.com".to_string(),
            instruction: vec!["Open gmail.com".to_string()],
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Gmail","value":"test@example.com","instruction":["Open gmail.com"]}"#
        );
    }

    #[test]
    fn test_missing_instruction_defaults_to_empty() {
        let item: Item = serde_json::from_str(r#"{"name":"a","value":"b"}"#).unwrap();
        assert!(item.instruction.is_empty());
    }

    #[test]
    fn test_name_taken_for_new_item() {
        let items = vec![Item::new("Gmail", "a"), Item::new("Jira", "b")];
        assert!(name_taken(&items, "Gmail", None));
        assert!(!name_taken(&items, "Slack", None));
    }

    #[test]
    fn test_name_taken_ignores_the_edited_index() {
        let items = vec![Item::new("Gmail", "a"), Item::new("Jira", "b")];
        // Renaming item 0 to its own name is fine, to a sibling's is not.
        assert!(!name_taken(&items, "Gmail", Some(0)));
        assert!(name_taken(&items, "Jira", Some(0)));
    }
}
