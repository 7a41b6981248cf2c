//! JSON over HTTP POST.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use url::Url;

use crate::error::TransportError;
use crate::transport::{Request, Response, Transport};

/// Posts each request as a JSON body and decodes the JSON reply.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: Url,
    headers: HeaderMap,
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new(url: &str) -> Result<Self, TransportError> {
        Self::builder(url).build()
    }

    pub fn builder(url: impl Into<String>) -> HttpTransportBuilder {
        HttpTransportBuilder {
            url: url.into(),
            headers: Vec::new(),
            timeout: None,
            user_agent: None,
            client: None,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: &Request) -> Result<Response, TransportError> {
        let body = serde_json::to_vec(request).map_err(TransportError::Encode)?;

        let mut builder = self
            .client
            .post(self.url.clone())
            .headers(self.headers.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, url = %self.url, "graphql endpoint returned non-success status");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        tracing::trace!(bytes = bytes.len(), "received response");
        serde_json::from_slice(&bytes).map_err(TransportError::Decode)
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder {
    url: String,
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    client: Option<reqwest::Client>,
}

impl HttpTransportBuilder {
    /// Send `name: value` with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.header(AUTHORIZATION.as_str(), value)
    }

    /// Per-request timeout, covering connect through body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured reqwest client (proxies, TLS roots, pooling).
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<HttpTransport, TransportError> {
        let url = Url::parse(&self.url)?;

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let invalid = || TransportError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.append(header_name, header_value);
        }
        if let Some(user_agent) = &self.user_agent {
            let value = HeaderValue::from_str(user_agent).map_err(|_| TransportError::InvalidHeader {
                name: USER_AGENT.as_str().to_owned(),
            })?;
            headers.insert(USER_AGENT, value);
        }

        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder().build()?,
        };

        Ok(HttpTransport {
            client,
            url,
            headers,
            timeout: self.timeout,
        })
    }
}
