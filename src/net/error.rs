//! Error type shared by the HTTP helpers.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-OK status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// HTTP is only available in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Server-provided message carried by a non-OK response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(message), .. } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}
