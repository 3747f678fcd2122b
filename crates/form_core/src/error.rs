use reqwest::StatusCode;
use shared::error::ErrorBody;
use shared::protocol::{ALIAS_MAX_LEN, ALIAS_MIN_LEN};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShortenError {
    /// Rejected before any network I/O; recoverable by editing input.
    #[error("{0}")]
    Validation(String),
    /// Network fault, timeout, or an unreadable response.
    #[error("{0}")]
    Transport(String),
    /// Non-2xx response from the API. `message` is never empty.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl ShortenError {
    pub fn invalid_alias_length() -> Self {
        Self::Validation(format!(
            "Custom alias must be between {ALIAS_MIN_LEN} and {ALIAS_MAX_LEN} characters"
        ))
    }

    /// Derives the most specific message a failure response offers:
    /// a structured JSON `message` field, then the raw body text,
    /// then a string built from the HTTP status itself.
    pub fn from_response(status: StatusCode, raw_body: &str) -> Self {
        let structured = serde_json::from_str::<ErrorBody>(raw_body)
            .ok()
            .map(|body| body.message)
            .filter(|message| !message.is_empty());

        let message = structured.unwrap_or_else(|| {
            let raw = raw_body.trim();
            if raw.is_empty() {
                format!(
                    "Error: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown Status")
                )
            } else {
                raw.to_string()
            }
        });

        Self::Api {
            status: status.as_u16(),
            message,
        }
    }
}

impl From<reqwest::Error> for ShortenError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Transport(format!("request timed out: {err}"))
        } else {
            Self::Transport(err.to_string())
        }
    }
}
