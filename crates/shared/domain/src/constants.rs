//! Domain-level constants.
//!
//! These constants define the lookup key rules.

// =============================================================================
// Lookup Key
// =============================================================================

/// Maximum accepted length of an email lookup key (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

