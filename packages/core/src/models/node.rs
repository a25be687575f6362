//! Node Data Structures
//!
//! This module defines the `Node` record shared by tasks and projects, plus
//! the payload types the store consumes: `NodeDraft` for creation and
//! `NodeUpdate` for sparse updates.
//!
//! # Wire Format
//!
//! Serialized field names are frozen in snake_case (`id`, `title`,
//! `description`, `due_date`, `priority`, `tags`, `notes`, `parent_id`,
//! `is_project`, `is_completed`, `created_at`, `updated_at`). Clients depend
//! on these names verbatim; nullable fields serialize as explicit JSON `null`
//! rather than being skipped.
//!
//! # Examples
//!
//! ```rust
//! use taskforge_core::models::{NodeDraft, NodeUpdate};
//! use serde_json::json;
//!
//! // Creation payload: only the title is supplied, the store fills the rest.
//! let draft: NodeDraft = serde_json::from_value(json!({
//!     "title": "Buy groceries"
//! }))
//! .unwrap();
//! assert_eq!(draft.title.as_deref(), Some("Buy groceries"));
//! assert!(draft.priority.is_none());
//!
//! // Sparse update: an explicit null clears, omission keeps.
//! let update: NodeUpdate = serde_json::from_value(json!({
//!     "description": null
//! }))
//! .unwrap();
//! assert_eq!(update.description, Some(None));
//! assert!(update.title.is_none());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Priority assigned to nodes created without one.
pub const DEFAULT_PRIORITY: &str = "medium";

/// A task or project record.
///
/// # Fields
///
/// - `id`: Unique identifier (stringified sequential counter unless supplied)
/// - `title`: Display title (required non-empty at the API boundary)
/// - `description`: Optional free-form description
/// - `due_date`: Free-form timestamp string, stored verbatim
/// - `priority`: Free-form priority label (defaults to `"medium"`)
/// - `tags`: Ordered list of tag strings
/// - `notes`: Optional free-form notes
/// - `parent_id`: Optional parent reference forming the task tree
/// - `is_project`: Marks a node as a project container
/// - `is_completed`: Completion flag
/// - `created_at`: Set once when the store creates the node
/// - `updated_at`: Refreshed by the store on every update
///
/// # Hierarchy
///
/// `parent_id` is a plain string reference; the store does not enforce that
/// it names an existing node. Deleting a node cascades to everything that
/// (transitively) points at it through `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier (counter value like "1", or caller-supplied)
    pub id: String,

    /// Display title
    pub title: String,

    /// Optional description (JSON null when absent)
    pub description: Option<String>,

    /// Due date as a free-form string, stored exactly as the client sent it
    pub due_date: String,

    /// Priority label (e.g. "low", "medium", "high")
    pub priority: String,

    /// Tags, in the order the client supplied them
    pub tags: Vec<String>,

    /// Optional notes (JSON null when absent)
    pub notes: Option<String>,

    /// Parent node ID (JSON null for top-level nodes)
    pub parent_id: Option<String>,

    /// Whether this node is a project container
    pub is_project: bool,

    /// Whether this node is completed
    pub is_completed: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Creation payload for a node.
///
/// Every field is optional: the store substitutes defaults for whatever the
/// client leaves out (see `NodeStore::create`), and JSON `null` is accepted
/// anywhere and treated the same as omission. Validation of the title happens
/// at the API boundary, not here.
///
/// `id` is normally absent and assigned from the store's counter; supplying
/// one bypasses the counter (reconstruction path).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeDraft {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub due_date: Option<String>,

    #[serde(default)]
    pub priority: Option<String>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub parent_id: Option<String>,

    #[serde(default)]
    pub is_project: Option<bool>,

    #[serde(default)]
    pub is_completed: Option<bool>,
}

/// Custom deserializer for nullable fields in sparse updates.
///
/// Lets clients send `{"description": "text"}` or `{"description": null}`
/// directly, mapping three input shapes to the double-Option pattern:
/// - Missing field → None (don't update)
/// - null → Some(None) (clear the field)
/// - "value" → Some(Some("value")) (set the field)
fn deserialize_optional_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    // Missing field is handled by #[serde(default)] on the struct field
    Ok(Some(Option::<T>::deserialize(deserializer)?))
}

/// Sparse update payload: only present fields are applied.
///
/// # Double-Option Pattern for Nullable Fields
///
/// `description`, `notes`, and `parent_id` can legitimately hold JSON `null`
/// on the wire, so their update fields use a double-`Option` to distinguish
/// three states:
///
/// - `None`: Don't change this field (omitted from the payload)
/// - `Some(None)`: Clear the field (explicit JSON null)
/// - `Some(Some(value))`: Set the field to the value
///
/// The remaining fields are non-nullable on `Node`, so a plain `Option<T>`
/// suffices; for those an explicit JSON null deserializes to `None` and the
/// prior value is kept.
///
/// # Examples
///
/// ```rust
/// # use taskforge_core::models::NodeUpdate;
/// // Update only the title (don't touch anything else)
/// let update = NodeUpdate {
///     title: Some("Renamed".to_string()),
///     ..Default::default()
/// };
///
/// // Re-parent a node and clear its notes
/// let update = NodeUpdate {
///     parent_id: Some(Some("7".to_string())),
///     notes: Some(None),
///     ..Default::default()
/// };
/// assert!(!update.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeUpdate {
    /// Update the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Update the description
    ///
    /// Uses double-Option pattern:
    /// - `None`: Don't change description
    /// - `Some(None)`: Clear the description
    /// - `Some(Some(text))`: Set the description
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub description: Option<Option<String>>,

    /// Update the due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Update the priority label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// Replace the tag list wholesale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Update the notes
    ///
    /// Uses double-Option pattern:
    /// - `None`: Don't change notes
    /// - `Some(None)`: Clear the notes
    /// - `Some(Some(text))`: Set the notes
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub notes: Option<Option<String>>,

    /// Update the parent reference
    ///
    /// Uses double-Option pattern:
    /// - `None`: Don't change parent_id
    /// - `Some(None)`: Detach from the parent (become top-level)
    /// - `Some(Some(id))`: Re-parent under the given node
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_field"
    )]
    pub parent_id: Option<Option<String>>,

    /// Update the project flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_project: Option<bool>,

    /// Update the completion flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

impl NodeUpdate {
    /// Create a new empty NodeUpdate
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the update carries any changes
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.tags.is_none()
            && self.notes.is_none()
            && self.parent_id.is_none()
            && self.is_project.is_none()
            && self.is_completed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_node() -> Node {
        let now = Utc::now();
        Node {
            id: "1".to_string(),
            title: "Write report".to_string(),
            description: Some("Quarterly summary".to_string()),
            due_date: "2025-01-10".to_string(),
            priority: "high".to_string(),
            tags: vec!["work".to_string(), "urgent".to_string()],
            notes: None,
            parent_id: None,
            is_project: false,
            is_completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_node_wire_field_names() {
        let value = serde_json::to_value(sample_node()).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "created_at",
                "description",
                "due_date",
                "id",
                "is_completed",
                "is_project",
                "notes",
                "parent_id",
                "priority",
                "tags",
                "title",
                "updated_at",
            ]
        );
    }

    #[test]
    fn test_node_serializes_absent_fields_as_null() {
        let value = serde_json::to_value(sample_node()).unwrap();

        // None must show up as an explicit null, never be skipped
        assert!(value["notes"].is_null());
        assert!(value["parent_id"].is_null());
        assert_eq!(value["description"], json!("Quarterly summary"));
    }

    #[test]
    fn test_node_serialization_round_trip() {
        let node = sample_node();

        let json = serde_json::to_string(&node).unwrap();
        let deserialized: Node = serde_json::from_str(&json).unwrap();

        assert_eq!(node, deserialized);
    }

    #[test]
    fn test_draft_from_empty_object() {
        let draft: NodeDraft = serde_json::from_value(json!({})).unwrap();

        assert!(draft.id.is_none());
        assert!(draft.title.is_none());
        assert!(draft.due_date.is_none());
        assert!(draft.priority.is_none());
        assert!(draft.tags.is_none());
        assert!(draft.is_project.is_none());
    }

    #[test]
    fn test_draft_from_full_payload() {
        let draft: NodeDraft = serde_json::from_value(json!({
            "title": "Plan sprint",
            "description": "Backlog grooming",
            "due_date": "2025-02-01",
            "priority": "low",
            "tags": ["planning"],
            "notes": "invite the whole team",
            "parent_id": "4",
            "is_project": true,
            "is_completed": false
        }))
        .unwrap();

        assert_eq!(draft.title.as_deref(), Some("Plan sprint"));
        assert_eq!(draft.priority.as_deref(), Some("low"));
        assert_eq!(draft.tags, Some(vec!["planning".to_string()]));
        assert_eq!(draft.parent_id.as_deref(), Some("4"));
        assert_eq!(draft.is_project, Some(true));
    }

    #[test]
    fn test_draft_treats_null_as_omitted() {
        let draft: NodeDraft = serde_json::from_value(json!({
            "title": "Standalone",
            "priority": null,
            "tags": null
        }))
        .unwrap();

        assert_eq!(draft.title.as_deref(), Some("Standalone"));
        assert!(draft.priority.is_none());
        assert!(draft.tags.is_none());
    }

    #[test]
    fn test_update_distinguishes_omitted_null_and_value() {
        // Omitted: don't touch the field
        let update: NodeUpdate = serde_json::from_value(json!({})).unwrap();
        assert_eq!(update.description, None);

        // Explicit null: clear the field
        let update: NodeUpdate = serde_json::from_value(json!({ "description": null })).unwrap();
        assert_eq!(update.description, Some(None));

        // Value: set the field
        let update: NodeUpdate =
            serde_json::from_value(json!({ "description": "new text" })).unwrap();
        assert_eq!(update.description, Some(Some("new text".to_string())));
    }

    #[test]
    fn test_update_double_option_covers_all_nullable_fields() {
        let update: NodeUpdate = serde_json::from_value(json!({
            "notes": null,
            "parent_id": "9"
        }))
        .unwrap();

        assert_eq!(update.notes, Some(None));
        assert_eq!(update.parent_id, Some(Some("9".to_string())));
        assert_eq!(update.description, None);
    }

    #[test]
    fn test_update_null_on_non_nullable_field_means_keep() {
        let update: NodeUpdate = serde_json::from_value(json!({
            "title": null,
            "is_completed": null
        }))
        .unwrap();

        assert!(update.title.is_none());
        assert!(update.is_completed.is_none());
    }

    #[test]
    fn test_update_is_empty() {
        let update = NodeUpdate::new();
        assert!(update.is_empty());

        let update = NodeUpdate {
            is_completed: Some(true),
            ..Default::default()
        };
        assert!(!update.is_empty());

        // Clearing a field counts as a change
        let update = NodeUpdate {
            notes: Some(None),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
