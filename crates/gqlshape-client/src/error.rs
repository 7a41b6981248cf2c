use std::fmt;

use gqlshape_compiler::CompileError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Failures raised while moving a request to the server and back.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[cfg(feature = "http")]
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid header {name:?}")]
    InvalidHeader { name: String },

    /// The server answered with a non-success status.
    #[error("unexpected status: {status}")]
    Status { status: u16, body: String },

    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Escape hatch for custom transports.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Errors returned by [`crate::Client`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// `data` did not match the target shape.
    #[error("failed to populate response data: {0}")]
    Populate(#[source] serde_json::Error),

    /// The response carried an `errors` array.
    #[error(transparent)]
    Server(#[from] ServerErrors),

    #[error("response contained neither data nor errors")]
    MissingData,
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Position in the operation text an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

/// One entry of a response's `errors` array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Map<String, Value>>,
}

/// The `errors` array of a response.
///
/// Displays as the first error's message.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ServerErrors(pub Vec<ServerError>);

impl ServerErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Option<&ServerError> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ServerError> {
        self.0.iter()
    }
}

impl fmt::Display for ServerErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first() {
            Some(error) => f.write_str(&error.message),
            None => f.write_str("no errors"),
        }
    }
}

impl std::error::Error for ServerErrors {}

// Some servers send `"errors": null`.
impl<'de> Deserialize<'de> for ServerErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let errors = Option::<Vec<ServerError>>::deserialize(deserializer)?;
        Ok(Self(errors.unwrap_or_default()))
    }
}

impl<'a> IntoIterator for &'a ServerErrors {
    type Item = &'a ServerError;
    type IntoIter = std::slice::Iter<'a, ServerError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
