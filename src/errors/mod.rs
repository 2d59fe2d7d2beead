//! Error handling module for the record editor client.
//!
//! Provides a centralized error type covering local validation failures and
//! remote/transport failures. No error is retried automatically; every
//! failure is terminal for the user action that produced it.

/// Error codes as constants to avoid stringly-typed errors.
#[allow(dead_code)]
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const HTTP_ERROR: &str = "HTTP_ERROR";
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const DUPLICATE_VERSION: &str = "DUPLICATE_VERSION";
    pub const INVALID_OPERATION: &str = "INVALID_OPERATION";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Schema diagnostics reported against the modified buffer; the action
    /// was blocked before any network call was made.
    Validation(Vec<String>),
    /// A buffer did not hold syntactically valid JSON.
    Parse(String),
    /// The backend answered with a non-2xx status.
    Http { status: u16, body: String },
    /// The request never produced a response (connect/transport failure).
    Network(String),
    /// Add-version was attempted for an `(id, resource_version)` pair that
    /// already exists; blocked before sending.
    DuplicateVersion(String),
    /// Undo/redo was requested with an unrecognized operation token.
    InvalidOperation(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Parse(_) => codes::PARSE_ERROR,
            AppError::Http { .. } => codes::HTTP_ERROR,
            AppError::Network(_) => codes::NETWORK_ERROR,
            AppError::DuplicateVersion(_) => codes::DUPLICATE_VERSION,
            AppError::InvalidOperation(_) => codes::INVALID_OPERATION,
        }
    }

    /// Get the user-facing message.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(msgs) => msgs.join("\n"),
            AppError::Parse(msg) => msg.clone(),
            AppError::Http { status, body } => format!("HTTP {}: {}", status, body),
            AppError::Network(msg) => msg.clone(),
            AppError::DuplicateVersion(msg) => msg.clone(),
            AppError::InvalidOperation(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Transport error: {:?}", err);
        AppError::Network(format!("Transport error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Parse(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation(vec![]).error_code(),
            codes::VALIDATION_ERROR
        );
        assert_eq!(
            AppError::InvalidOperation("squash".into()).error_code(),
            codes::INVALID_OPERATION
        );
    }

    #[test]
    fn test_validation_message_concatenates_markers() {
        let err = AppError::Validation(vec![
            "Missing property \"category\"".to_string(),
            "Incorrect type. Expected \"string\"".to_string(),
        ]);
        assert_eq!(
            err.message(),
            "Missing property \"category\"\nIncorrect type. Expected \"string\""
        );
    }

    #[test]
    fn test_display_includes_code() {
        let err = AppError::Http {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP_ERROR: HTTP 500: boom");
    }
}
