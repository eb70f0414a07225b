//! Middleware for cross-origin access.

mod cors;

pub use cors::cors_layer;
