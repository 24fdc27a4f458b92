//! Response bodies that are not documents.

use serde::{Deserialize, Serialize};

/// Confirmation returned by delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Identifier of the deleted document.
    pub id: String,
}

impl MessageResponse {
    /// Build a confirmation for `id`.
    pub fn new(message: impl Into<String>, id: impl ToString) -> Self {
        Self {
            message: message.into(),
            id: id.to_string(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: String,
    /// Server version.
    pub version: String,
    /// `connected` or `unavailable`.
    pub store: String,
}
