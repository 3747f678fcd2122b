use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive bounds for a user-chosen short-URL alias.
pub const ALIAS_MIN_LEN: usize = 3;
pub const ALIAS_MAX_LEN: usize = 10;

/// `expires_in` value meaning the link never expires.
pub const EXPIRES_NEVER: i64 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenRequest {
    pub original_url: String,
    pub expires_in: i64,
    /// Omitted from the wire entirely when the user left the field
    /// blank; the server generates an alias in that case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}
