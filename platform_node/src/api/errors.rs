//! API error handling for the platform node.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::launch::LaunchError;
use crate::market::feeds::FeedError;

/// Serializable API error returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
    pub details: Option<serde_json::Value>,
    pub timestamp: u64,
}

impl ApiError {
    pub fn new(code: u16, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            timestamp: chrono::Utc::now().timestamp() as u64,
        }
    }

    pub fn with_details(code: u16, message: String, details: serde_json::Value) -> Self {
        Self {
            code,
            message,
            details: Some(details),
            timestamp: chrono::Utc::now().timestamp() as u64,
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new(400, message.to_string())
    }

    pub fn not_found(message: &str) -> Self {
        Self::new(404, message.to_string())
    }

    pub fn unprocessable_entity(message: &str) -> Self {
        Self::new(422, message.to_string())
    }

    pub fn too_many_requests(message: &str) -> Self {
        Self::new(429, message.to_string())
    }

    pub fn internal_server_error(message: &str) -> Self {
        Self::new(500, message.to_string())
    }

    pub fn service_unavailable(message: &str) -> Self {
        Self::new(503, message.to_string())
    }

    pub fn collection_not_found(collection_id: &str) -> Self {
        Self::with_details(
            404,
            "Collection not found".to_string(),
            serde_json::json!({
                "collection": collection_id,
                "known": crate::nft::collections::COLLECTIONS
                    .iter()
                    .map(|collection| collection.id)
                    .collect::<Vec<_>>()
            }),
        )
    }

    pub fn token_out_of_range(token_id: u32, total_supply: u32) -> Self {
        Self::with_details(
            404,
            "Token id outside collection supply".to_string(),
            serde_json::json!({
                "token_id": token_id,
                "total_supply": total_supply
            }),
        )
    }

    pub fn validation_error(reason: &str) -> Self {
        Self::with_details(
            422,
            "Validation error".to_string(),
            serde_json::json!({ "reason": reason }),
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API Error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl From<LaunchError> for ApiError {
    fn from(err: LaunchError) -> Self {
        Self::validation_error(&err.to_string())
    }
}

impl From<FeedError> for ApiError {
    fn from(err: FeedError) -> Self {
        Self::service_unavailable(&err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal_server_error(&err.to_string())
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_codes() {
        assert_eq!(ApiError::bad_request("x").code, 400);
        assert_eq!(ApiError::not_found("x").code, 404);
        assert_eq!(ApiError::validation_error("x").code, 422);
        assert_eq!(ApiError::too_many_requests("x").code, 429);
    }

    #[test]
    fn launch_errors_map_to_validation() {
        let api: ApiError = LaunchError::ZeroSupply.into();
        assert_eq!(api.code, 422);
        assert!(api.details.is_some());
    }
}
