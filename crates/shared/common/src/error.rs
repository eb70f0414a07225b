//! Unified error handling for HTTP and gRPC.
//!
//! Provides a single error type that can be converted to:
//! - Axum HTTP responses (for the gateway)
//! - Tonic gRPC status codes (for the user service)
//!
//! A lookup has three outcomes: a record, [`AppError::NotFound`], or a store
//! failure ([`AppError::Database`] inside the data tier, [`AppError::Store`]
//! once it has crossed gRPC). The two failure kinds never collapse into each
//! other in any conversion below.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;
use tonic::{metadata::MetadataValue, Status};

/// Fallback cause for store failures reported without a message.
const UNKNOWN_STORE_CAUSE: &str = "unknown store failure";

/// Status metadata key set by the data tier on store failures.
///
/// Only an `INTERNAL` status carrying this key is read back as a store
/// failure; transport-level `INTERNAL` errors stay [`AppError::Grpc`].
pub const STORE_ERROR_METADATA_KEY: &str = "x-store-error";

/// Application error types with support for both HTTP and gRPC.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Validation
    #[error("{0}")]
    Validation(String),

    // Store errors
    #[cfg(feature = "database")]
    #[error("Store error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Store failure reported by a remote tier, carrying its cause
    #[error("Store error: {0}")]
    Store(String),

    // gRPC specific
    #[error("Service unavailable")]
    ServiceUnavailable(String),

    #[error("gRPC error: {0}")]
    Grpc(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "STORE_ERROR",
            AppError::Store(_) => "STORE_ERROR",
            AppError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            AppError::Grpc(_) => "GRPC_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error is a store failure (as opposed to a miss).
    pub fn is_store_error(&self) -> bool {
        self.store_cause().is_some()
    }

    /// Underlying cause of a store failure, if this is one.
    pub fn store_cause(&self) -> Option<String> {
        match self {
            #[cfg(feature = "database")]
            AppError::Database(e) => Some(e.to_string()),
            AppError::Store(cause) => Some(cause.clone()),
            _ => None,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound => "User not found".to_string(),

            // Hide details for internal errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Store error: {:?}", e);
                "User lookup failed: the store could not be queried".to_string()
            }
            AppError::Store(cause) => {
                tracing::error!("Store error: {}", cause);
                "User lookup failed: the store could not be queried".to_string()
            }
            AppError::ServiceUnavailable(detail) => {
                tracing::error!("Service unavailable: {}", detail);
                "The user service is unavailable".to_string()
            }
            AppError::Grpc(msg) => {
                tracing::error!("gRPC error: {}", msg);
                "A service communication error occurred".to_string()
            }
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// gRPC Status (Tonic)
// =============================================================================

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        // Store causes travel to the gateway verbatim so it can log them
        if let Some(cause) = err.store_cause() {
            let mut status = Status::internal(cause);
            status
                .metadata_mut()
                .insert(STORE_ERROR_METADATA_KEY, MetadataValue::from_static("1"));
            return status;
        }

        let code = match &err {
            AppError::NotFound => tonic::Code::NotFound,
            AppError::Validation(_) => tonic::Code::InvalidArgument,
            AppError::ServiceUnavailable(_) => tonic::Code::Unavailable,
            _ => tonic::Code::Unknown,
        };

        Status::new(code, err.user_message())
    }
}

impl From<Status> for AppError {
    fn from(status: Status) -> Self {
        match status.code() {
            tonic::Code::NotFound => AppError::NotFound,
            tonic::Code::InvalidArgument => AppError::Validation(status.message().to_string()),
            tonic::Code::Unavailable => AppError::ServiceUnavailable(status.message().to_string()),
            // Client-side deadline: the lookup was not answered in time
            tonic::Code::DeadlineExceeded | tonic::Code::Cancelled => {
                AppError::ServiceUnavailable(status.message().to_string())
            }
            tonic::Code::Internal
                if status.metadata().contains_key(STORE_ERROR_METADATA_KEY) =>
            {
                let cause = if status.message().is_empty() {
                    UNKNOWN_STORE_CAUSE.to_string()
                } else {
                    status.message().to_string()
                };
                AppError::Store(cause)
            }
            _ => AppError::Grpc(status.message().to_string()),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn store(cause: impl Into<String>) -> Self {
        let cause = cause.into();
        if cause.is_empty() {
            AppError::Store(UNKNOWN_STORE_CAUSE.to_string())
        } else {
            AppError::Store(cause)
        }
    }

    pub fn service_unavailable(detail: impl Into<String>) -> Self {
        AppError::ServiceUnavailable(detail.into())
    }
}
