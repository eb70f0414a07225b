//! gRPC client for user-service.

use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use common::{AppError, AppResult, GrpcClientConfig};
use domain::User;
use proto::user::{
    user_lookup_client::UserLookupClient as ProtoUserLookupClient, GetUserByEmailRequest,
    HealthRequest,
};

#[cfg(test)]
use mockall::automock;

/// Status string the user service reports for a reachable store
const HEALTHY: &str = "healthy";

/// Source of user records for the HTTP handlers.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find the user stored under `email`
    async fn find_user_by_email(&self, email: &str) -> AppResult<User>;

    /// Check that the data tier and its store are reachable.
    ///
    /// `AppError::ServiceUnavailable` means the data tier did not answer;
    /// a store error means it answered but its store did not.
    async fn check_health(&self) -> AppResult<()>;
}

/// gRPC client wrapper for user-service.
#[derive(Clone)]
pub struct UserClient {
    client: ProtoUserLookupClient<Channel>,
}

impl UserClient {
    /// Create a client for user-service.
    ///
    /// The channel connects on first use, so the gateway can start before
    /// the user service. Every call is bounded by the configured request
    /// timeout.
    pub fn connect_lazy(config: &GrpcClientConfig) -> Result<Self, tonic::transport::Error> {
        debug!("Connecting to user-service at {}", config.endpoint);
        let channel = Endpoint::from_shared(config.endpoint.clone())?
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .connect_lazy();
        Ok(Self {
            client: ProtoUserLookupClient::new(channel),
        })
    }
}

#[async_trait]
impl UserDirectory for UserClient {
    async fn find_user_by_email(&self, email: &str) -> AppResult<User> {
        let request = tonic::Request::new(GetUserByEmailRequest {
            email: email.to_string(),
        });

        let mut client = self.client.clone();
        let response = client
            .get_user_by_email(request)
            .await
            .map_err(AppError::from)?;
        Ok(proto_to_user(response.into_inner()))
    }

    async fn check_health(&self) -> AppResult<()> {
        let mut client = self.client.clone();
        let response = client
            .health(tonic::Request::new(HealthRequest {}))
            .await
            .map_err(AppError::from)?
            .into_inner();

        if response.status == HEALTHY {
            Ok(())
        } else {
            Err(AppError::store(response.store_error.unwrap_or_default()))
        }
    }
}

/// Convert proto UserResponse to domain User.
fn proto_to_user(proto: proto::user::UserResponse) -> User {
    User {
        email: proto.email,
        name: proto.name,
        profile_url: proto.profile_url,
    }
}
