//! Response envelopes matching the HTTP contract.

use serde::{Deserialize, Serialize};

/// Success body carrying the affected blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse<T> {
    pub message: String,
    pub blog: T,
}

impl<T> BlogResponse<T> {
    pub fn new(message: impl Into<String>, blog: T) -> Self {
        Self {
            message: message.into(),
            blog,
        }
    }
}

/// Success body with no payload beyond the message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body: `message` always present, `error` carries the underlying
/// failure text on store faults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}
