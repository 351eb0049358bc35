use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use market_core::DomainError;

/// Errors surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Product not found")]
    NotFound,

    /// Malformed request input, rejected before reaching the catalog.
    #[error("{0}")]
    Validation(ValidationIssue),

    #[error("internal error: {0}")]
    Internal(String),
}

/// One rejected input, reported as `{"loc": [...], "msg": ..., "type": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl core::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.loc.join("."), self.msg)
    }
}

impl ApiError {
    pub fn validation(
        source: &str,
        field: &str,
        kind: &'static str,
        msg: impl Into<String>,
    ) -> Self {
        Self::Validation(ValidationIssue {
            loc: vec![source.to_string(), field.to_string()],
            msg: msg.into(),
            kind,
        })
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound => ApiError::NotFound,
            DomainError::InvalidId(msg) => {
                ApiError::validation("path", "product_id", "int_parsing", msg)
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::NotFound => json_detail(status, "Product not found"),
            ApiError::Validation(issue) => {
                tracing::debug!(%issue, "request rejected");
                (status, Json(json!({ "detail": [issue] }))).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "unexpected domain failure");
                json_detail(status, "Internal server error")
            }
        }
    }
}

pub fn json_detail(status: StatusCode, detail: impl Into<String>) -> Response {
    (status, Json(json!({ "detail": detail.into() }))).into_response()
}
