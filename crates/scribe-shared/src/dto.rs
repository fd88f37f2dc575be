//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /add` and `PUT /update/{id}`.
///
/// Every field is optional at the serde level so the handler can answer
/// missing required fields with its own message instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub img_url: Option<String>,
}
