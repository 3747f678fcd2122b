use serde::{Deserialize, Serialize};

/// Structured error body the API may return on a non-2xx response.
/// The reference server also emits bare text errors, so callers must
/// not assume this shape parses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
