//! Record model: an arbitrary structured document identified by `id` plus an
//! optional `resource_version`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Backend-internal identity field, stripped before display.
pub const INTERNAL_ID_FIELD: &str = "_id";

/// Sentinel version meaning "latest"/unversioned.
pub const LATEST_VERSION: &str = "Latest";

/// A structured document under edit. The payload shape is owned by the
/// backend; the client only interprets the identity fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Value);

impl Record {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// An empty-object record, the initial content of both editor buffers.
    pub fn empty() -> Self {
        Self(Value::Object(serde_json::Map::new()))
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    pub fn resource_version(&self) -> Option<&str> {
        self.str_field("resource_version")
    }

    pub fn category(&self) -> Option<&str> {
        self.str_field("category")
    }

    /// Set a top-level string field, used when seeding a key template with
    /// the looked-up id and selected category.
    pub fn set_field(&mut self, key: &str, value: &str) {
        if let Value::Object(map) = &mut self.0 {
            map.insert(key.to_string(), Value::String(value.to_string()));
        }
    }

    /// Remove the backend-internal identity field before display.
    pub fn strip_internal_id(&mut self) {
        if let Value::Object(map) = &mut self.0 {
            map.remove(INTERNAL_ID_FIELD);
        }
    }

    /// Pretty-print with 4-space indentation, matching the backend's own
    /// serialization of stored records.
    pub fn to_pretty(&self) -> String {
        let mut buf = Vec::new();
        {
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            if self.0.serialize(&mut ser).is_err() {
                return self.0.to_string();
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Parse a buffer's text back into a record.
    pub fn from_text(text: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self(value))
    }
}

/// True when a version selector value means "no specific version": the
/// backend then resolves to the highest stored `resource_version`.
pub fn is_latest(version: &str) -> bool {
    version.is_empty() || version == LATEST_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_accessors() {
        let record = Record::new(json!({
            "id": "riscv-disk",
            "resource_version": "2.0.0",
            "category": "diskimage",
        }));
        assert_eq!(record.id(), Some("riscv-disk"));
        assert_eq!(record.resource_version(), Some("2.0.0"));
        assert_eq!(record.category(), Some("diskimage"));
    }

    #[test]
    fn test_strip_internal_id() {
        let mut record = Record::new(json!({"_id": "633e", "id": "x"}));
        record.strip_internal_id();
        assert!(record.0.get(INTERNAL_ID_FIELD).is_none());
        assert_eq!(record.id(), Some("x"));
    }

    #[test]
    fn test_pretty_uses_four_space_indent() {
        let record = Record::new(json!({"id": "x"}));
        assert_eq!(record.to_pretty(), "{\n    \"id\": \"x\"\n}");
    }

    #[test]
    fn test_from_text_rejects_invalid_json() {
        assert!(Record::from_text("{ not json").is_err());
        assert!(Record::from_text("{\"id\": \"x\"}").is_ok());
    }

    #[test]
    fn test_is_latest() {
        assert!(is_latest(""));
        assert!(is_latest("Latest"));
        assert!(!is_latest("1.0.0"));
    }
}
