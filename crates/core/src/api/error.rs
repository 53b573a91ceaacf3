use reqwest::StatusCode;
use std::fmt;

/// Why a backend call failed. Flows collapse every variant into one generic
/// user-facing message; the variant and detail are for diagnostics only.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (connect, DNS, timeout).
    Transport(reqwest::Error),
    /// The server answered with a non-success status.
    Status { status: StatusCode, body: String },
    /// The body arrived but did not match the expected shape.
    Decode {
        endpoint: &'static str,
        source: serde_json::Error,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "transport error: {err}"),
            ApiError::Status { status, body } => {
                write!(f, "server returned HTTP {status}: {body}")
            }
            ApiError::Decode { endpoint, source } => {
                write!(f, "failed to decode {endpoint} response: {source}")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(err) => Some(err),
            ApiError::Status { .. } => None,
            ApiError::Decode { source, .. } => Some(source),
        }
    }
}
