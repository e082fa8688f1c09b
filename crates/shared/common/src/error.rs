//! Unified error handling for the guestbook client.
//!
//! Errors fall in two families:
//! - transport errors: the request failed or the body was not usable JSON
//! - application errors: the backend answered with a GraphQL `errors` list

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Transport
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    // Backend
    #[error("{0}")]
    Graphql(String),

    // Local
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Transport(_) => "TRANSPORT_ERROR",
            AppError::Decode(_) => "DECODE_ERROR",
            AppError::Graphql(_) => "GRAPHQL_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the failure happened before a GraphQL envelope was obtained
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_) | AppError::Decode(_))
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn graphql(msg: impl Into<String>) -> Self {
        AppError::Graphql(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_error_displays_backend_message() {
        let err = AppError::graphql("Unauthorized");
        assert_eq!(err.to_string(), "Unauthorized");
        assert_eq!(err.code(), "GRAPHQL_ERROR");
        assert!(!err.is_transport());
    }

    #[test]
    fn decode_error_counts_as_transport() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = AppError::from(json_err);
        assert_eq!(err.code(), "DECODE_ERROR");
        assert!(err.is_transport());
    }

    #[test]
    fn domain_validation_maps_to_validation() {
        let err = AppError::from(DomainError::validation("story must not be empty"));
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "story must not be empty");
    }
}
