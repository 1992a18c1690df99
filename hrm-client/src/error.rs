//! Client error types

use thiserror::Error;

use crate::saga::SagaError;

/// Client error type
///
/// Covers the three failure classes a screen has to surface: transport
/// failures, non-2xx responses, and local validation failures that
/// never reach the network.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or protocol failure before a usable response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; carries the backend's message when it sent one
    #[error("{status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A submit-time validation rule failed; no request was issued
    #[error("Validation error: {0}")]
    Validation(String),

    /// A multi-step submission halted at the named step
    #[error(transparent)]
    Workflow(Box<SagaError>),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// True for the responses the login screen treats as bad
    /// credentials.
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(
            self,
            ClientError::Status { status, .. }
                if *status == reqwest::StatusCode::BAD_REQUEST
                    || *status == reqwest::StatusCode::UNAUTHORIZED
        )
    }

    /// The failed step of a halted multi-step submission, if that is
    /// what this error is.
    pub fn failed_step(&self) -> Option<&'static str> {
        match self {
            ClientError::Workflow(saga) => Some(saga.step),
            _ => None,
        }
    }
}

impl From<SagaError> for ClientError {
    fn from(error: SagaError) -> Self {
        ClientError::Workflow(Box::new(error))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
