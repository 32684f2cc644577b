//! Request handlers for the proxy API

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::server::ProxyState;
use crate::api::{ErrorResponse, GenerateReply, HealthResponse, PromptRequest};
use crate::upstream::UpstreamError;

/// Client-visible request failure
///
/// Carries the status and message that reach the caller; anything more
/// detailed stays in the server-side logs.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { status, reason } => {
                // Relay the upstream status as-is; the body was already logged
                let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                ApiError::new(code, format!("Gemini API error: {} {}", status, reason))
            }
            UpstreamError::InvalidShape => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Invalid response from Gemini API",
            ),
            UpstreamError::Transport(e) => {
                tracing::error!(error = %e, "Request to Gemini API failed");
                ApiError::internal()
            }
        }
    }
}

/// POST /api/generate
///
/// Validates the prompt, makes the single outbound call, and relays either
/// the generated text or a structured error. No state survives the request.
pub async fn generate_handler(
    State(state): State<ProxyState>,
    Json(request): Json<PromptRequest>,
) -> Result<Json<GenerateReply>, ApiError> {
    if request.prompt.is_empty() {
        return Err(ApiError::new(StatusCode::BAD_REQUEST, "Prompt is required"));
    }

    let text = state.client.generate(&request.prompt).await?;

    Ok(Json(GenerateReply { response: text }))
}

/// GET /api/health
///
/// Liveness probe; never touches the upstream and never fails.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "gemini-proxy is running".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_maps_to_same_code() {
        let err = ApiError::from(UpstreamError::Status {
            status: 429,
            reason: "Too Many Requests".to_string(),
        });
        assert_eq!(err.status, StatusCode::TOO_MANY_REQUESTS);
        assert!(err.message.contains("429"));
    }

    #[test]
    fn test_unmappable_status_falls_back_to_bad_gateway() {
        let err = ApiError::from(UpstreamError::Status {
            status: 42,
            reason: "Unknown".to_string(),
        });
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_invalid_shape_maps_to_generic_500() {
        let err = ApiError::from(UpstreamError::InvalidShape);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Invalid response from Gemini API");
    }

    #[test]
    fn test_api_error_into_response_status() {
        let response =
            ApiError::new(StatusCode::BAD_REQUEST, "Prompt is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
