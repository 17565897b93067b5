//! Frontend Models
//!
//! Data structures shared by the list state, the UI and the assistant bridge.

use serde::{Deserialize, Deserializer, Serialize};

/// Suggested parties a todo can be assigned to.
///
/// Only a suggestion: records coming from the assistant may carry any name.
pub const PARTIES: &[&str] = &["Father", "Mother", "Children", "Elderlies"];

/// A single todo entry.
///
/// Field names on the wire follow the assistant contract (`isCompleted`,
/// `assignedTo`). Everything but `id` is optional on input since upserts
/// accept partially specified records; an explicit `null` reads the same as
/// a missing field, and a numeric id is kept as its decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl TodoRecord {
    /// Create an open (not completed) record
    pub fn new(id: impl Into<String>, text: impl Into<String>, assigned_to: Option<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_completed: false,
            assigned_to,
        }
    }

    /// Assignee for display; an empty name counts as unassigned
    pub fn assignee(&self) -> Option<&str> {
        self.assigned_to.as_deref().filter(|name| !name.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

/// Accept an id given as a JSON string or number
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_names() {
        let record = TodoRecord::new("a", "Buy milk", Some("Father".to_string()));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "a");
        assert_eq!(json["isCompleted"], false);
        assert_eq!(json["assignedTo"], "Father");
    }

    #[test]
    fn test_unassigned_record_omits_field() {
        let record = TodoRecord::new("a", "Buy milk", None);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("assignedTo").is_none());
    }

    #[test]
    fn test_partial_record_deserializes() {
        let record: TodoRecord = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert_eq!(record.id, "x");
        assert_eq!(record.text, "");
        assert!(!record.is_completed);
        assert_eq!(record.assigned_to, None);
    }

    #[test]
    fn test_null_fields_read_as_missing() {
        let record: TodoRecord = serde_json::from_str(
            r#"{"id":"b","text":null,"isCompleted":null,"assignedTo":null}"#,
        )
        .unwrap();
        assert_eq!(record, TodoRecord::new("b", "", None));
    }

    #[test]
    fn test_numeric_id_is_stringified() {
        let record: TodoRecord = serde_json::from_str(r#"{"id":3,"text":"Z"}"#).unwrap();
        assert_eq!(record.id, "3");
    }

    #[test]
    fn test_empty_assignee_is_unassigned() {
        let record = TodoRecord::new("a", "t", Some(String::new()));
        assert_eq!(record.assignee(), None);
    }
}
