//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated gRPC service definitions for:
//! - UserLookup: read-only user lookup by email, plus a store health probe

/// User lookup service definitions.
pub mod user {
    tonic::include_proto!("user");
}

// Re-export commonly used items
pub use user::user_lookup_client::UserLookupClient;
pub use user::user_lookup_server::{UserLookup, UserLookupServer};
