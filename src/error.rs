//! Error types for the gpuplan crate

use thiserror::Error;

/// Result type alias for gpuplan operations
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Main error type for the planner and endpoint client.
///
/// The capacity search itself never errors: an infeasible configuration is
/// reported as infinity or an absent result, not an `Err`.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Endpoint error: {0}")]
    EndpointError(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid parameter: {name} = {value}, {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        PlannerError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlannerError::EndpointError("connection refused".to_string());
        assert_eq!(err.to_string(), "Endpoint error: connection refused");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PlannerError = io_err.into();
        assert!(matches!(err, PlannerError::IoError(_)));
    }
}
