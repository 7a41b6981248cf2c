use gqlshape_compiler::{Config, OperationKind, QueryCompiler};
use gqlshape_core::{Shape, Variables};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result, ServerErrors};
#[cfg(feature = "http")]
use crate::error::TransportError;
#[cfg(feature = "http")]
use crate::http::HttpTransport;
use crate::populate::populate;
use crate::transport::{Request, Transport};

/// Decoded response: whatever `data` held plus the server's errors.
///
/// GraphQL allows partial data next to errors. [`Outcome::into_result`]
/// collapses this into a single `Result` for callers that don't care.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome<D> {
    pub data: Option<D>,
    pub errors: ServerErrors,
}

impl<D> Outcome<D> {
    /// Errors win over data; absent data with no errors is
    /// [`Error::MissingData`].
    pub fn into_result(self) -> Result<D> {
        if !self.errors.is_empty() {
            return Err(Error::Server(self.errors));
        }
        self.data.ok_or(Error::MissingData)
    }
}

/// GraphQL client over a [`Transport`].
///
/// ```no_run
/// # async fn run() -> gqlshape_client::Result<()> {
/// use gqlshape_client::Client;
/// use serde_json::Value;
///
/// let client = Client::new("https://example.com/graphql")?;
/// let data: Value = client
///     .query_custom("{viewer{login}}", &Default::default())
///     .await?;
/// # let _ = data;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client<T> {
    transport: T,
    compiler: QueryCompiler,
}

#[cfg(feature = "http")]
impl Client<HttpTransport> {
    /// Client posting JSON to `url` with default HTTP settings.
    pub fn new(url: &str) -> std::result::Result<Self, TransportError> {
        Ok(Self::with_transport(HttpTransport::new(url)?))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            compiler: QueryCompiler::default(),
        }
    }

    /// Replace the operation compiler configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.compiler = QueryCompiler::new(config);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn compiler(&self) -> &QueryCompiler {
        &self.compiler
    }

    /// Run the query derived from `S` and decode the response into `S`.
    pub async fn query<S>(&self, variables: &Variables) -> Result<S>
    where
        S: Shape + DeserializeOwned,
    {
        self.run::<S>(OperationKind::Query, variables).await
    }

    /// Run the mutation derived from `S` and decode the response into `S`.
    pub async fn mutate<S>(&self, variables: &Variables) -> Result<S>
    where
        S: Shape + DeserializeOwned,
    {
        self.run::<S>(OperationKind::Mutation, variables).await
    }

    /// Send hand-written query text and decode the response into `D`.
    ///
    /// Keys are matched through `D`'s shape, so the text should select
    /// fields the way the derived operation would. `serde_json::Value`
    /// takes the data as is.
    pub async fn query_custom<D: Shape + DeserializeOwned>(
        &self,
        query: impl Into<String>,
        variables: &Variables,
    ) -> Result<D> {
        let request = Request::new(query).variables(variables);
        self.execute::<D>(request).await?.into_result()
    }

    /// Send hand-written mutation text.
    pub async fn mutate_custom<D: Shape + DeserializeOwned>(
        &self,
        mutation: impl Into<String>,
        variables: &Variables,
    ) -> Result<D> {
        self.query_custom(mutation, variables).await
    }

    /// Dispatch a prepared request and decode `data`.
    ///
    /// Returns partial data alongside server errors. A `data` payload that
    /// fails to decode is reported as [`Error::Populate`] even if the server
    /// also sent errors.
    pub async fn execute<D>(&self, request: Request) -> Result<Outcome<D>>
    where
        D: Shape + DeserializeOwned,
    {
        tracing::debug!(
            length = request.query.len(),
            variables = request.variables.len(),
            "dispatching operation"
        );
        let response = self.transport.execute(&request).await?;

        let data = match response.data.as_deref() {
            Some(raw) => Some(populate::<D>(raw).map_err(Error::Populate)?),
            None => None,
        };

        if !response.errors.is_empty() {
            tracing::debug!(
                count = response.errors.len(),
                first = %response.errors,
                "server returned errors"
            );
        }

        Ok(Outcome {
            data,
            errors: response.errors,
        })
    }

    async fn run<S>(&self, kind: OperationKind, variables: &Variables) -> Result<S>
    where
        S: Shape + DeserializeOwned,
    {
        let query = self.compiler.operation::<S>(kind, variables)?;
        let request = Request::new(query).variables(variables);
        self.execute::<S>(request).await?.into_result()
    }
}
