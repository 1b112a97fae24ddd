//! Classified gateway failures

use std::time::Duration;
use thiserror::Error;

/// The outcome of a failed call, classified into exactly one shape.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// No response within the configured timeout. Never retried.
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The server could not be reached (DNS, refused connection, reset).
    #[error("Network error: {0}")]
    NetworkUnreachable(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Http { status: u16, message: Option<String> },

    /// The server answered successfully but the body did not match the contract.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// The `message` field the server put in its error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }

    /// The message carried by the error itself, without the `Display` prefix.
    ///
    /// A transport failure yields its bare reason (e.g. "Connection refused").
    /// An HTTP error without a server message carries nothing beyond its status.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::NetworkUnreachable(reason) => Some(reason.clone()),
            Self::Http { message: None, .. } => None,
            Self::Http {
                message: Some(message),
                ..
            } => Some(message.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Classifies a transport-level `reqwest` failure.
    pub fn from_transport(err: &reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::NetworkUnreachable(transport_reason(err))
        }
    }
}

/// Innermost cause of a transport error (e.g. "Connection refused").
fn transport_reason(err: &reqwest::Error) -> String {
    let mut source: &dyn std::error::Error = err;
    while let Some(next) = source.source() {
        source = next;
    }
    source.to_string()
}

/// Pulls `message` out of a JSON error body.
pub fn extract_server_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}
