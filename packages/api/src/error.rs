//! Errors surfaced by the API client.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        data: Option<Value>,
    },
    /// The request never produced a response (DNS, connection, timeout, ...).
    #[error("request failed: {0}")]
    Transport(String),
    /// A 2xx body that is not the JSON we expected.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Build a status error from a raw response body.
    ///
    /// The message is the body's `detail`, then its `message`, then a generic
    /// line naming the status code.
    pub fn from_status(status: u16, body: &str) -> Self {
        let data: Option<Value> = serde_json::from_str(body).ok();
        let message = data
            .as_ref()
            .and_then(|d| message_field(d, "detail").or_else(|| message_field(d, "message")))
            .unwrap_or_else(|| format!("Request failed with status code {status}"));
        ApiError::Status {
            status,
            message,
            data,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected our credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

fn message_field(data: &Value, key: &str) -> Option<String> {
    match data.get(key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        // FastAPI validation errors arrive as a list under `detail`.
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_wins_over_message() {
        let err = ApiError::from_status(404, r#"{"detail":"Tagset not found","message":"nope"}"#);
        assert_eq!(err.to_string(), "Tagset not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_message_used_without_detail() {
        let err = ApiError::from_status(500, r#"{"message":"Database error"}"#);
        assert_eq!(err.to_string(), "Database error");
    }

    #[test]
    fn test_non_json_body_falls_back_to_status_line() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status code 502");
        match err {
            ApiError::Status { data, .. } => assert!(data.is_none()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::from_status(401, "").is_unauthorized());
        assert!(!ApiError::Transport("refused".into()).is_unauthorized());
    }
}
