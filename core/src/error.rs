//! Error types for the FlightXML client core.
//!
//! # Design
//! `Remote` is the one error callers are expected to match on: the service
//! answered with an `error` envelope or a non-200 status carrying a JSON
//! body. Everything else describes a response the core could not make sense
//! of and is surfaced as-is.

/// Errors returned by `FlightXmlClient` build and parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The service rejected the request. `message` is the remote `error`
    /// text; `status` is the HTTP status the response came back with.
    #[error("FlightXML error (HTTP {status}): {message}")]
    Remote { status: u16, message: String },

    /// A 5xx response. The body is kept verbatim and never parsed.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The body was not JSON, or the payload did not fit the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(#[from] serde_json::Error),

    /// The JSON body was well-formed but not a single-key envelope.
    #[error("unexpected response envelope: {0}")]
    UnexpectedEnvelope(String),

    /// The request URL could not be assembled.
    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// True when the remote service itself reported the failure.
    pub fn is_remote(&self) -> bool {
        matches!(self, ApiError::Remote { .. })
    }

    /// HTTP status attached to the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } | ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while assembling a `Config`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
