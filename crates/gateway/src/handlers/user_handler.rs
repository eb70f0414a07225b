//! User lookup handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Deserialize;
use validator::Validate;

use common::{AppError, AppResult};
use domain::UserResponse;

use crate::extractors::ValidatedPath;
use crate::state::AppState;

/// Path parameters of the lookup route
#[derive(Debug, Deserialize, Validate)]
pub struct GetUserPath {
    /// Email key, matched exactly against the store
    #[validate(length(min = 1, max = 254, message = "Email must be 1 to 254 characters"))]
    pub useremail: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/get-user/", get(missing_email))
        .route("/get-user/:useremail", get(get_user_by_email))
}

/// An empty path segment never reaches the lookup
async fn missing_email() -> AppResult<Json<UserResponse>> {
    Err(AppError::validation("Email must not be empty"))
}

/// Get user by email
#[utoipa::path(
    get,
    path = "/get-user/{useremail}",
    tag = "Users",
    params(
        ("useremail" = String, Path, description = "Email address of the user")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 400, description = "Invalid email key"),
        (status = 404, description = "No user stored under this email"),
        (status = 500, description = "The store could not be queried"),
        (status = 503, description = "User service unavailable")
    )
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<GetUserPath>,
) -> AppResult<Json<UserResponse>> {
    let user = state.users.find_user_by_email(&path.useremail).await?;
    Ok(Json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use mockall::predicate::eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use common::AppError;
    use domain::User;

    use crate::clients::MockUserDirectory;
    use crate::config::GatewayConfig;
    use crate::routes::create_router;
    use crate::state::AppState;

    async fn get(users: MockUserDirectory, uri: &str) -> (StatusCode, Value) {
        let state = AppState::new(Arc::new(users), GatewayConfig::default());
        let response = create_router(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_found_user_returns_profile() {
        let mut users = MockUserDirectory::new();
        users
            .expect_find_user_by_email()
            .with(eq("a@x.com"))
            .times(1)
            .returning(|_| Ok(User::new("a@x.com", "Ann", "http://img/ann.png")));

        let (status, body) = get(users, "/get-user/a@x.com").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "name": "Ann",
                "email": "a@x.com",
                "profileUrl": "http://img/ann.png",
            })
        );
    }

    #[tokio::test]
    async fn test_percent_encoded_email_is_decoded() {
        let mut users = MockUserDirectory::new();
        users
            .expect_find_user_by_email()
            .with(eq("a@x.com"))
            .times(1)
            .returning(|_| Ok(User::new("a@x.com", "Ann", "http://img/ann.png")));

        let (status, _) = get(users, "/get-user/a%40x.com").await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_user_returns_not_found() {
        let mut users = MockUserDirectory::new();
        users
            .expect_find_user_by_email()
            .returning(|_| Err(AppError::NotFound));

        let (status, body) = get(users, "/get-user/missing@x.com").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_store_failure_returns_error_with_message() {
        let mut users = MockUserDirectory::new();
        users
            .expect_find_user_by_email()
            .returning(|_| Err(AppError::store("connection refused")));

        let (status, body) = get(users, "/get-user/a@x.com").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "STORE_ERROR");
        assert!(!body["error"]["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_user_service_returns_unavailable() {
        let mut users = MockUserDirectory::new();
        users
            .expect_find_user_by_email()
            .returning(|_| Err(AppError::service_unavailable("tcp connect error")));

        let (status, body) = get(users, "/get-user/a@x.com").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_empty_email_rejected_before_lookup() {
        let mut users = MockUserDirectory::new();
        users.expect_find_user_by_email().never();

        let (status, body) = get(users, "/get-user/").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Email must not be empty");
    }

    #[tokio::test]
    async fn test_oversized_email_rejected_before_lookup() {
        let mut users = MockUserDirectory::new();
        users.expect_find_user_by_email().never();

        let uri = format!("/get-user/{}@x.com", "a".repeat(300));
        let (status, body) = get(users, &uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
