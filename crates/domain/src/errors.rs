//! Error types used throughout the client
//!
//! One taxonomy covers the whole call path: local shape validation,
//! authentication, transparent re-authorization, transport failures, and
//! response decoding. Remote business-rule violations are *not* errors —
//! they arrive inside an HTTP 200 response (`validation_errors` /
//! `is_error`) and are left for the caller to inspect.

use thiserror::Error;

/// Main error type for Tax1099 client operations
#[derive(Error, Debug)]
pub enum Tax1099Error {
    /// Login returned HTTP 200 but no session identifier (bad credentials).
    #[error("bad login")]
    BadLogin,

    /// A transparent token refresh before a business call failed.
    #[error("failed to re-authorize: {0}")]
    Reauthorize(#[source] Box<Tax1099Error>),

    /// Malformed request shape detected before any network call.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Non-200 HTTP response; carries the raw body for diagnosis.
    #[error("status code {status} returned from {url} with body: {body}")]
    UnexpectedStatus { status: u16, url: String, body: String },

    /// The request could not be sent or the response body not read.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("failed to serialize payload: {0}")]
    Serialize(String),
}

/// Result type alias for Tax1099 operations
pub type Result<T> = std::result::Result<T, Tax1099Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_carries_status_url_and_body() {
        let err = Tax1099Error::UnexpectedStatus {
            status: 502,
            url: "https://app.tax1099.com/api/v1/login".to_string(),
            body: "upstream unavailable".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("https://app.tax1099.com/api/v1/login"));
        assert!(msg.contains("upstream unavailable"));
    }

    #[test]
    fn reauthorize_wraps_the_underlying_failure() {
        let err = Tax1099Error::Reauthorize(Box::new(Tax1099Error::BadLogin));
        assert_eq!(err.to_string(), "failed to re-authorize: bad login");
        assert!(std::error::Error::source(&err).is_some());
    }
}
