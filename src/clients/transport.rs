//! HTTP transport abstraction.
//!
//! The connector never talks to the network directly; it hands a
//! [`RequestDescriptor`] to an [`HttpTransport`] and gets a
//! [`ResponseEnvelope`] back. [`ReqwestTransport`] is the default.
//!
//! Timeouts, proxies and pooling are properties of the transport. To tune
//! them, build a `reqwest::Client` and pass it to
//! [`ReqwestTransport::with_client`].

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::RequestDescriptor;
use crate::clients::http_response::ResponseEnvelope;

/// Sends one request and reports the raw response.
///
/// Implementations must return `Ok` for every well-formed HTTP response,
/// whatever its status; status handling belongs to the normalizer.
///
/// # Implementing the trait
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use bigcommerce_legacy::{HttpTransport, RequestDescriptor, ResponseEnvelope, TransportError};
///
/// struct Canned;
///
/// #[async_trait]
/// impl HttpTransport for Canned {
///     async fn send(&self, _request: RequestDescriptor) -> Result<ResponseEnvelope, TransportError> {
///         Ok(ResponseEnvelope::new(200, "[]"))
///     }
/// }
/// ```
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Dispatches `request` and waits for the complete response.
    async fn send(&self, request: RequestDescriptor) -> Result<ResponseEnvelope, TransportError>;
}

/// [`HttpTransport`] backed by a `reqwest::Client` using rustls.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default rustls client.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the client cannot be created (for
    /// example, TLS backend initialization failure).
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self { client })
    }

    /// Creates a transport around a caller-configured client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Parses response headers into a map keyed by lowercased name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: RequestDescriptor) -> Result<ResponseEnvelope, TransportError> {
        let mut req_builder = self.client.request(request.method.into(), &request.url);

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(ResponseEnvelope {
            code,
            headers,
            body,
        })
    }
}
