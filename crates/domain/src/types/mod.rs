//! Wire schema for the Tax1099 API
//!
//! Field names and optionality mirror the remote API exactly. Fields the
//! API treats as optional-when-empty are `Option` (or skipped-when-false
//! booleans) so they are absent from the serialized JSON when unset.

pub mod auth;
pub mod form1098;
pub mod party;
pub mod pdf;
pub mod submission;

pub use auth::{LoginRequest, LoginResponse};
pub use form1098::{Form1098, Form1098Item, Submit1098Request, Submit1098Response, SubmissionResult};
pub use party::{PayerInfo, RecipientInfo, TinType, ValidationError};
pub use pdf::{DownloadFormRequest, FormStatus};
pub use submission::{Submit1098BatchRequest, Submit1098BatchResponse};

/// Serde helper: skip boolean flags the API treats as optional-when-empty.
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
