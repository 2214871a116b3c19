//! Application error type and HTTP response mapping.
//!
//! Every fallible operation in the service returns [`AppError`]. The variants
//! mirror the four outcomes a caller has to tell apart:
//!
//! | Variant              | HTTP | Meaning                                        |
//! |----------------------|------|------------------------------------------------|
//! | `InvalidInput`       | 400  | Bad form/API input, empty code on lookup       |
//! | `AliasTaken`         | 409  | Custom alias collides with a live mapping      |
//! | `NotFound`           | 404  | No live mapping for the short code             |
//! | `StoreUnavailable`   | 500  | Key-value store unreachable, failed, timed out |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload used in JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    InvalidInput { message: String, details: Value },

    #[error("Alias already taken.")]
    AliasTaken { alias: String },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    StoreUnavailable { message: String, details: Value },
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidInput {
            message: message.into(),
            details,
        }
    }

    pub fn alias_taken(alias: impl Into<String>) -> Self {
        Self::AliasTaken {
            alias: alias.into(),
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn store_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::AliasTaken { .. } => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput { .. } => "invalid_input",
            AppError::AliasTaken { .. } => "alias_taken",
            AppError::NotFound { .. } => "not_found",
            AppError::StoreUnavailable { .. } => "store_unavailable",
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let details = match self {
            AppError::InvalidInput { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::StoreUnavailable { details, .. } => details.clone(),
            AppError::AliasTaken { alias } => json!({ "alias": alias }),
        };

        ErrorInfo {
            code: self.error_code(),
            message: self.to_string(),
            details,
        }
    }

    /// Plain-text response for browser-facing routes (redirect, metrics page).
    ///
    /// Store failures are reported with a generic body so backend details
    /// never reach the visitor.
    pub fn into_plain_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::StoreUnavailable { .. } => "Internal Server Error".to_string(),
            other => other.to_string(),
        };

        (status, body).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::invalid_input("Request validation failed", details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::invalid_input(
            "Invalid request body.",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
