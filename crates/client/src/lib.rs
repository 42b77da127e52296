//! # Tax1099 Client
//!
//! Typed async client for the Tax1099 e-filing API (submission, validation,
//! and PDF retrieval of 1098/1099-series forms).
//!
//! The client authenticates once at construction, caches the session token,
//! and transparently re-authorizes when the token lease elapses. Requests
//! are routed to the environment-appropriate backend host per operation
//! category (auth/main, 1098 forms, payments).
//!
//! ```no_run
//! use tax1099_client::{Credentials, Environment, Tax1099Api, Tax1099Client};
//! use tax1099_domain::DownloadFormRequest;
//!
//! # async fn example() -> tax1099_domain::Result<()> {
//! let credentials = Credentials::new("user@example.com", "secret", "app-key");
//! let client = Tax1099Client::connect(Environment::Staging, credentials).await?;
//!
//! let pdf = client
//!     .download_filled_form(&DownloadFormRequest {
//!         form_id: Some(123),
//!         form_type: "1099-MISC".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! # let _ = pdf;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoints;
pub mod http;
pub mod session;

pub use client::{Tax1099Api, Tax1099Client};
pub use endpoints::Environment;
pub use session::Credentials;

// Re-export the wire schema so callers need only this crate.
pub use tax1099_domain as domain;
