//! Request and response bodies for the backend endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Record;

/// POST /find
#[derive(Debug, Clone, Serialize)]
pub struct FindRequest {
    pub id: String,
    pub resource_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// Decoded body of a /find response: either the record document itself or
/// `{"exists": false}`.
#[derive(Debug, Clone, PartialEq)]
pub enum FindOutcome {
    Found(Record),
    Missing,
}

impl FindOutcome {
    pub fn from_value(value: Value) -> Self {
        if value.get("exists").and_then(Value::as_bool) == Some(false) {
            FindOutcome::Missing
        } else {
            FindOutcome::Found(Record::new(value))
        }
    }
}

/// POST /keys
#[derive(Debug, Clone, Serialize)]
pub struct KeysRequest {
    pub category: String,
    pub id: String,
}

/// POST /insert
#[derive(Debug, Clone, Serialize)]
pub struct InsertRequest {
    pub resource: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// POST /update. Carries both buffers so the backend can detect concurrent
/// edits by comparing `original_resource` against its stored copy.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRequest {
    pub resource: Value,
    pub original_resource: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// POST /delete. The resource is always the *original* buffer.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteRequest {
    pub resource: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// POST /checkExists
#[derive(Debug, Clone, Serialize)]
pub struct CheckExistsRequest {
    pub id: String,
    pub resource_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

/// POST /versions
#[derive(Debug, Clone, Serialize)]
pub struct VersionsRequest {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// One entry of a /versions response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub resource_version: String,
}

/// Body for the endpoints keyed only by session alias
/// (/undo, /redo, /getRevisionStatus, /saveSession).
#[derive(Debug, Clone, Serialize)]
pub struct AliasRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// POST /getRevisionStatus response. Both fields are *disabled* flags: true
/// means the corresponding stack is empty and the control must be disabled.
/// They are applied verbatim to the undo/redo availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionStatus {
    pub undo: bool,
    pub redo: bool,
}

/// Generic `{"status": "..."}` acknowledgement returned by the mutating
/// endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_find_outcome_missing() {
        assert_eq!(
            FindOutcome::from_value(json!({"exists": false})),
            FindOutcome::Missing
        );
    }

    #[test]
    fn test_find_outcome_found() {
        let outcome = FindOutcome::from_value(json!({"id": "x", "resource_version": "1.0.0"}));
        match outcome {
            FindOutcome::Found(record) => assert_eq!(record.id(), Some("x")),
            FindOutcome::Missing => panic!("expected Found"),
        }
    }

    #[test]
    fn test_alias_omitted_when_absent() {
        let body = serde_json::to_string(&VersionsRequest {
            id: "x".to_string(),
            alias: None,
        })
        .unwrap();
        assert_eq!(body, "{\"id\":\"x\"}");
    }

    #[test]
    fn test_update_request_field_names() {
        let body = serde_json::to_value(&UpdateRequest {
            resource: json!({"id": "x"}),
            original_resource: json!({"id": "x"}),
            alias: Some("conn".to_string()),
        })
        .unwrap();
        assert!(body.get("original_resource").is_some());
        assert_eq!(body["alias"], "conn");
    }
}
