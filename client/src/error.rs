use flightxml_core::{ApiError, ConfigError};

/// Everything a `FlightXml` call can fail with.
///
/// `Api(ApiError::Remote { .. })` means the service rejected the request;
/// the other variants are lower-level failures passed through untouched.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// `(status, message)` when the service itself reported the failure.
    pub fn remote(&self) -> Option<(u16, &str)> {
        match self {
            Error::Api(ApiError::Remote { status, message }) => Some((*status, message.as_str())),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
