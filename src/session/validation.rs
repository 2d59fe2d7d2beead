//! Schema-marker validation gate.
//!
//! The editing widget owns schema validation; the session layer only asks it
//! for the current diagnostics and refuses to send a known-invalid document,
//! saving a round trip and giving local feedback.

use crate::errors::AppError;

/// Diagnostic markers reported by the editing widget against the modified
/// buffer. Implemented by the presentation layer.
pub trait MarkerSource {
    fn markers(&self, modified_text: &str) -> Vec<String>;
}

/// Marker source for presentation layers without schema diagnostics.
pub struct NoMarkers;

impl MarkerSource for NoMarkers {
    fn markers(&self, _modified_text: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Gates every mutating action (except delete) before any network call.
pub struct ValidationGate {
    source: Box<dyn MarkerSource + Send + Sync>,
}

impl ValidationGate {
    pub fn new(source: Box<dyn MarkerSource + Send + Sync>) -> Self {
        Self { source }
    }

    /// Fails with the concatenated diagnostic messages if any markers exist.
    pub fn check(&self, modified_text: &str) -> Result<(), AppError> {
        let markers = self.source.markers(modified_text);
        if markers.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(markers))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticMarkers(Vec<String>);

    impl MarkerSource for StaticMarkers {
        fn markers(&self, _modified_text: &str) -> Vec<String> {
            self.0.clone()
        }
    }

    #[test]
    fn test_clean_buffer_passes() {
        let gate = ValidationGate::new(Box::new(NoMarkers));
        assert!(gate.check("{}").is_ok());
    }

    #[test]
    fn test_markers_block_with_concatenated_messages() {
        let gate = ValidationGate::new(Box::new(StaticMarkers(vec![
            "Missing property \"id\"".to_string(),
            "Value is not accepted".to_string(),
        ])));
        match gate.check("{}") {
            Err(AppError::Validation(msgs)) => assert_eq!(msgs.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
