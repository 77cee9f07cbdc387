use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure body produced by the product service: `{"message": string}`.
/// Anything else in an error response is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ErrorEnvelope {
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
