//! Service layer - lookup use cases.

mod user_service;

pub use user_service::{LookupManager, UserLookupService};
