use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::ErrorDetail;

/// Uniform body for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error: String,
    pub status_code: u16,
    /// ISO 8601 UTC timestamp with millisecond precision
    pub timestamp: String,
    /// Path of the request that failed
    pub path: String,
}

impl ErrorResponse {
    pub fn new(detail: &ErrorDetail, path: impl Into<String>) -> Self {
        Self {
            success: false,
            message: detail.message.clone(),
            error: detail.error.clone(),
            status_code: detail.status.as_u16(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            path: path.into(),
        }
    }
}

/// Plain confirmation body, e.g. after a delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
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
