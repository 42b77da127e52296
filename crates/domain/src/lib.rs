//! # Tax1099 Domain
//!
//! Wire schema and error types for the Tax1099 e-filing API.
//!
//! This crate contains:
//! - Request/response types matching the remote API's JSON schema
//! - The client error taxonomy and `Result` alias
//! - Domain constants (token lease, default timeout)
//!
//! ## Architecture
//! - No dependency on the client crate
//! - Only external dependencies allowed
//! - Pure data structures, no behavior beyond serialization

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
