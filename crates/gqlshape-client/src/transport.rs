//! Transport boundary.
//!
//! HTTP and JSON are the common case, but anything that can carry a
//! [`Request`] and hand back a [`Response`] works: an in-process executor,
//! a recorder that replays fixtures, a websocket.

use std::future::Future;
use std::sync::Arc;

use gqlshape_core::Variables;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::{Map, Value};

use crate::error::{ServerErrors, TransportError};

/// Carries one operation to a GraphQL server.
///
/// Cancellation is by dropping the returned future; timeouts belong to the
/// implementation.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: &Request,
    ) -> impl Future<Output = Result<Response, TransportError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn execute(
        &self,
        request: &Request,
    ) -> impl Future<Output = Result<Response, TransportError>> + Send {
        (**self).execute(request)
    }
}

/// Request body: operation text and variable values.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Request {
    pub query: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub variables: Map<String, Value>,
}

impl Request {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Map::new(),
        }
    }

    /// Set the variable values.
    pub fn variables(mut self, variables: &Variables) -> Self {
        self.variables = variables.to_json();
        self
    }

    /// Set the variable values from a JSON object.
    pub fn json_variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = variables;
        self
    }
}

/// Response body, with `data` left undecoded.
///
/// Decoding `data` into the caller's shape is a second step, see
/// [`crate::populate`].
#[derive(Debug, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub data: Option<Box<RawValue>>,
    #[serde(default)]
    pub errors: ServerErrors,
    #[serde(default)]
    pub extensions: Option<Map<String, Value>>,
}
