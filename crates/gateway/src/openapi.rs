//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use domain::UserResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::get_user_by_email,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            UserResponse,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    tags(
        (name = "Users", description = "User lookup by email"),
        (name = "Health", description = "Dependency health"),
    )
)]
pub struct ApiDoc;
