//! Error types for the fitness API client.
//!
//! # Design
//! A single flat enum covers every way a call can fail. Non-success statuses
//! are not split by code: a 404 and a 500 both land in `Api` with the raw
//! status and body, so callers can surface the server's text verbatim.

/// Errors returned by `Session` operations and `ApiClient` parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Connection, timeout, or body-read failure. Never retried.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a status other than 200 or 201.
    #[error("status: {status}, body: {body}")]
    Api { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("decoding response failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("encoding payload failed: {0}")]
    Encode(String),
}

impl ClientError {
    /// HTTP status carried by an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A string could not be read as an entity identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid entity id {input:?}: {reason}")]
pub struct ParseIdError {
    pub input: String,
    pub reason: &'static str,
}
