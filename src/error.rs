//! Infrastructure and domain error types.

use std::fmt;

use thiserror::Error as ThisError;

/// The error type returned by the server's fallible operations.
///
/// Request-level failures (404, 400) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// infrastructure failures: binding to a port or accepting a connection.
#[derive(Debug)]
pub struct Error(std::io::Error);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "io: {}", self.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self(e)
    }
}

/// A failed registry operation.
///
/// Exactly two kinds exist, and both are terminal for the request: the
/// router surfaces them as `404` / `400` with the `Display` text as a
/// plain-text body. The messages match what clients of the service have
/// always seen.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RegistryError {
    /// The requested id is absent from the collection.
    #[error("The given genre ID was not found in the database")]
    NotFound,
    /// The payload failed validation; carries the first violated
    /// constraint's human-readable message.
    #[error("{0}")]
    InvalidInput(String),
}

impl RegistryError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
