use reqwest::StatusCode;
use thiserror::Error;

/// Failure classes for one dispatched request.
///
/// The first four cover the transport; [`Error::Shape`] covers the tabular
/// projection when a payload is not row-like. Each variant is logged exactly
/// once at the dispatch boundary before it is returned.
#[derive(Debug, Error)]
pub enum Error {
    /// Server answered with a non-2xx status.
    #[error("HTTP error: status {status} for {url}")]
    HttpStatus { status: StatusCode, url: String },

    /// Transport could not establish or keep the connection.
    #[error("connection error: {0}")]
    Connect(#[source] reqwest::Error),

    /// No response within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Any other request-layer failure, body decoding included.
    #[error("error during request: {0}")]
    Transport(#[source] reqwest::Error),

    /// Payload could not be projected into rows and columns.
    #[error("response is not tabular: {0}")]
    Shape(String),
}

impl Error {
    /// Status code of the failed response, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
