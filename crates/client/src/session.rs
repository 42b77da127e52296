//! Session token lifecycle.
//!
//! A session is issued on successful login and considered expired once the
//! client-side lease elapses. The lease is shorter than the server's real
//! token lifetime so a request is never built with a token that expires
//! mid-flight.

use chrono::{DateTime, Duration, Utc};
use tax1099_domain::constants::TOKEN_LEASE_MINUTES;

/// Login credentials supplied at construction and reused for every
/// transparent re-authorization.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub app_key: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        app_key: impl Into<String>,
    ) -> Self {
        Self { username: username.into(), password: password.into(), app_key: app_key.into() }
    }
}

/// Current session token and its client-enforced expiry.
///
/// Mutated only by the session manager on successful login; read by the
/// dispatcher before every call.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    token: String,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// A session that has never been issued; always expired.
    pub(crate) fn empty() -> Self {
        Self { token: String::new(), expires_at: DateTime::<Utc>::MIN_UTC }
    }

    /// A session issued at `now`, expiring after the token lease.
    pub(crate) fn issued(token: String, now: DateTime<Utc>) -> Self {
        Self { token, expires_at: now + Duration::minutes(TOKEN_LEASE_MINUTES) }
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    pub(crate) fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    #[cfg(test)]
    pub(crate) fn expire_now(&mut self) {
        self.expires_at = DateTime::<Utc>::MIN_UTC;
    }
}
