//! Request extractors.

mod validated_path;

pub use validated_path::ValidatedPath;
