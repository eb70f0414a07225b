//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The data tier and the gateway both speak in these types.

pub mod constants;
pub mod email;
pub mod error;
pub mod user;

pub use constants::*;
pub use email::validate_lookup_email;
pub use error::{DomainError, DomainResult};
pub use user::{User, UserResponse};
