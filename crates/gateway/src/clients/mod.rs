//! gRPC clients for calling the data tier.

mod user_client;

#[cfg(test)]
pub use user_client::MockUserDirectory;
pub use user_client::{UserClient, UserDirectory};
