//! Wire types for the proxy's HTTP surface

pub mod gemini;

use serde::{Deserialize, Serialize};

/// Body of POST /api/generate
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PromptRequest {
    /// Absent field deserializes to empty so the handler rejects it with 400
    /// rather than body deserialization rejecting it with 422.
    #[serde(default)]
    pub prompt: String,
}

/// Successful generation reply
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateReply {
    pub response: String,
}

/// Liveness probe payload
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Client-visible error payload
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
