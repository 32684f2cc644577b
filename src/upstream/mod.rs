//! Gemini API client

mod client;

pub use client::GeminiClient;

/// Failures from a single upstream call
///
/// Every variant is terminal for the request; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-success status
    #[error("Gemini API error: {status} {reason}")]
    Status { status: u16, reason: String },

    /// Upstream answered 2xx but the body did not carry a usable candidate
    #[error("Invalid response from Gemini API")]
    InvalidShape,

    /// Connection, timeout, or other transport-level failure
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_embeds_code_and_reason() {
        let err = UpstreamError::Status {
            status: 429,
            reason: "Too Many Requests".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("Too Many Requests"));
    }

    #[test]
    fn test_invalid_shape_message_is_generic() {
        let err = UpstreamError::InvalidShape;
        assert_eq!(err.to_string(), "Invalid response from Gemini API");
    }
}
