//! Login exchange payloads.

use serde::{Deserialize, Serialize};

/// Credentials sent to the auth endpoint. The API names the username
/// field `login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
    pub app_key: String,
}

/// Login response. An HTTP 200 body without a `sessionId` means the
/// credentials were rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginResponse {
    pub session_id: Option<String>,
    pub validation_messages: Option<Vec<serde_json::Value>>,
}
