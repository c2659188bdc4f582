//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types;
//! `reqwest` and `serde_json` failures are mapped at the call sites.

use thiserror::Error;

/// Main error type for the export scheduler
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Authentication errors (token endpoint rejected us, or strict
    /// mode refused to proceed without a token)
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Network/connection errors
    #[error("Connection error: {0}")]
    Connection(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SchedulerError {
    fn from(err: serde_json::Error) -> Self {
        SchedulerError::Serialization(err.to_string())
    }
}
