//! Domain constants
//!
//! Centralized location for timing constants shared by the session manager
//! and the HTTP transport.

/// Client-enforced token validity window in minutes.
///
/// The server invalidates session tokens after roughly 60 minutes; the lease
/// is kept strictly shorter so a request is never built with a token that
/// expires mid-flight.
pub const TOKEN_LEASE_MINUTES: i64 = 55;

/// Overall per-request timeout applied by the HTTP transport.
pub const DEFAULT_TIMEOUT_SECS: u64 = 90;
