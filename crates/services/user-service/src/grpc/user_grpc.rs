//! gRPC implementation for UserLookup.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::service::UserLookupService;
use proto::user::{
    user_lookup_server::UserLookup as UserLookupProto, GetUserByEmailRequest, HealthRequest,
    HealthResponse, UserResponse,
};

/// gRPC service wrapper for UserLookupService.
pub struct UserGrpcService {
    service: Arc<dyn UserLookupService>,
}

impl UserGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn UserLookupService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl UserLookupProto for UserGrpcService {
    async fn get_user_by_email(
        &self,
        request: Request<GetUserByEmailRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let req = request.into_inner();

        let user = self
            .service
            .find_user_by_email(&req.email)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(user_to_proto(&user)))
    }

    async fn health(
        &self,
        _request: Request<HealthRequest>,
    ) -> Result<Response<HealthResponse>, Status> {
        let response = match self.service.check_store().await {
            Ok(()) => HealthResponse {
                status: "healthy".to_string(),
                store_error: None,
            },
            Err(e) => HealthResponse {
                status: "unhealthy".to_string(),
                store_error: Some(e.store_cause().unwrap_or_else(|| e.to_string())),
            },
        };

        Ok(Response::new(response))
    }
}

/// Convert domain User to proto UserResponse.
fn user_to_proto(user: &domain::User) -> UserResponse {
    UserResponse {
        email: user.email.clone(),
        name: user.name.clone(),
        profile_url: user.profile_url.clone(),
    }
}
