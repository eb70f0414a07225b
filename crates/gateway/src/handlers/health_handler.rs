//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use common::AppError;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub services: ServiceStatus,
}

/// Individual service status.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    pub user_service: ServiceHealth,
    pub store: ServiceHealth,
}

/// Service health with optional error message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceHealth {
    fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            error: None,
        }
    }

    fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            status: "unhealthy".to_string(),
            error: Some(error.into()),
        }
    }

    fn unknown() -> Self {
        Self {
            status: "unknown".to_string(),
            error: None,
        }
    }

    fn is_healthy(&self) -> bool {
        self.error.is_none() && self.status == "healthy"
    }
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies the user service and its store.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "All dependencies healthy", body = HealthResponse),
        (status = 503, description = "User service or store unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    let (user_service, store) = match state.users.check_health().await {
        Ok(()) => (ServiceHealth::healthy(), ServiceHealth::healthy()),
        // Reached the user service, but not its store
        Err(e) if e.is_store_error() => (
            ServiceHealth::healthy(),
            ServiceHealth::unhealthy(e.store_cause().unwrap_or_default()),
        ),
        Err(AppError::ServiceUnavailable(detail)) => {
            (ServiceHealth::unhealthy(detail), ServiceHealth::unknown())
        }
        Err(e) => (ServiceHealth::unhealthy(e.to_string()), ServiceHealth::unknown()),
    };

    let all_healthy = user_service.is_healthy() && store.is_healthy();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        services: ServiceStatus {
            user_service,
            store,
        },
    };

    if all_healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
