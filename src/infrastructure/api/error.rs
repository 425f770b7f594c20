use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Cannot connect to {0}")]
    Connection(String),
    #[error("Request to {0} timed out")]
    Timeout(String),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{method} {path} failed with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status {
        method: String,
        path: String,
        status: u16,
        detail: Option<String>,
    },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Invalid base URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ApiError {
    /// HTTP status for errors where the backend did answer
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend-provided `detail`, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Pulls `detail` out of an error body such as `{"detail": "Scenario not found"}`.
/// Non-string details (validation error lists) are kept as compact JSON.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}
