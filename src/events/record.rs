// src/events/record.rs — A single logged event

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One line of a daily log: an arbitrary JSON object. Only the action
/// field is interpreted; everything else is carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventRecord {
    fields: Map<String, Value>,
}

impl EventRecord {
    /// Parse one log line. Returns `None` for anything that is not a JSON
    /// object, including blank lines and truncated writes.
    pub fn parse(line: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(line).ok()? {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// The action name stored under `field`. Non-string and empty values
    /// mark the event as non-actionable.
    pub fn action<'a>(&'a self, field: &str) -> Option<&'a str> {
        self.fields
            .get(field)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object_line() {
        let record = EventRecord::parse(r#"{"tool_name":"Read","session":"s1"}"#).unwrap();
        assert_eq!(record.action("tool_name"), Some("Read"));
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "tool_name": "Read", "session": "s1" })
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(EventRecord::parse("not valid json").is_none());
        assert!(EventRecord::parse(r#"{"tool_name":"Re"#).is_none());
        assert!(EventRecord::parse("").is_none());
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(EventRecord::parse("42").is_none());
        assert!(EventRecord::parse("null").is_none());
        assert!(EventRecord::parse(r#"["Read"]"#).is_none());
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        let record = EventRecord::parse("  {\"tool_name\":\"Edit\"}\r").unwrap();
        assert_eq!(record.action("tool_name"), Some("Edit"));
    }

    #[test]
    fn test_record_without_action_is_not_actionable() {
        let record = EventRecord::parse(r#"{"type":"status","msg":"ok"}"#).unwrap();
        assert_eq!(record.action("tool_name"), None);
    }

    #[test]
    fn test_non_string_or_empty_action_ignored() {
        let numeric = EventRecord::parse(r#"{"tool_name":7}"#).unwrap();
        assert_eq!(numeric.action("tool_name"), None);

        let empty = EventRecord::parse(r#"{"tool_name":""}"#).unwrap();
        assert_eq!(empty.action("tool_name"), None);
    }

    #[test]
    fn test_custom_action_field() {
        let record = EventRecord::parse(r#"{"action":"deploy","tool_name":"Bash"}"#).unwrap();
        assert_eq!(record.action("action"), Some("deploy"));
        assert_eq!(record.action("tool_name"), Some("Bash"));
    }
}
