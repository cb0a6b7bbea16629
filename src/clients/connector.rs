//! The legacy API connector.
//!
//! [`Connector`] exposes the four verbs of the legacy API. Each call builds a
//! [`RequestDescriptor`], sends it through the configured transport and
//! normalizes the response. There are no retries and no shared mutable state.

use serde_json::Value;

use crate::clients::errors::ConnectorError;
use crate::clients::http_request::{HttpMethod, RequestDescriptor};
use crate::clients::http_response::{normalize, ApiResponse};
use crate::clients::transport::{HttpTransport, ReqwestTransport};
use crate::config::ConnectorConfig;

/// Client for one store's legacy (v2) API.
///
/// Endpoints are appended to `{base_path}/api/v2` verbatim and must start
/// with `/`, e.g. `"/products"` or `"/categories/14"`.
///
/// # Thread Safety
///
/// `Connector` is `Send + Sync` when its transport is. Share it by reference
/// or behind an `Arc` to issue concurrent calls.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_legacy::{Connector, ConnectorConfig};
/// use serde_json::json;
///
/// let config = ConnectorConfig::new(
///     "https://store-abc123.mybigcommerce.com",
///     "admin",
///     "abc123",
///     None,
/// )?;
/// let connector = Connector::new(config)?;
///
/// // Print the names of the first 50 products
/// let response = connector.get("/products").await?;
/// if let Some(products) = response.json().and_then(|body| body.as_array()) {
///     for product in products {
///         println!("{}", product["name"]);
///     }
/// }
///
/// // Update inventory
/// let update = json!({"inventory_level": 100});
/// connector.put("/products/1999", Some(&update)).await?;
/// ```
#[derive(Debug)]
pub struct Connector<T = ReqwestTransport> {
    config: ConnectorConfig,
    transport: T,
}

// Verify Connector is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Connector>();
};

impl Connector<ReqwestTransport> {
    /// Creates a connector using the default `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Transport`] if the HTTP client cannot be created.
    pub fn new(config: ConnectorConfig) -> Result<Self, ConnectorError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, transport))
    }

    /// Validates raw settings and creates a connector in one step.
    ///
    /// `body_format` is case-insensitive `json` or `xml` and defaults to
    /// `json` when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Configuration`] for invalid settings, before
    /// any network activity.
    pub fn from_settings(
        base_path: impl Into<String>,
        username: impl Into<String>,
        token: impl Into<String>,
        body_format: Option<&str>,
    ) -> Result<Self, ConnectorError> {
        let config = ConnectorConfig::new(base_path, username, token, body_format)?;
        Self::new(config)
    }
}

impl<T: HttpTransport> Connector<T> {
    /// Creates a connector that sends requests through `transport`.
    #[must_use]
    pub const fn with_transport(config: ConnectorConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Returns the connector's configuration.
    #[must_use]
    pub const fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the request a verb would send, without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Serialization`] if the payload cannot be encoded.
    pub fn build_request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> Result<RequestDescriptor, ConnectorError> {
        Ok(RequestDescriptor::build(
            &self.config,
            method,
            endpoint,
            payload,
        )?)
    }

    /// Sends a GET request to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError`] for transport failures, non-200 statuses
    /// and malformed JSON bodies.
    pub async fn get(&self, endpoint: &str) -> Result<ApiResponse, ConnectorError> {
        self.execute(HttpMethod::Get, endpoint, None).await
    }

    /// Sends a POST request to `endpoint` with an optional payload.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError`] if the payload cannot be encoded, or for
    /// transport failures, non-200 statuses and malformed JSON bodies.
    pub async fn post(
        &self,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> Result<ApiResponse, ConnectorError> {
        self.execute(HttpMethod::Post, endpoint, payload).await
    }

    /// Sends a PUT request to `endpoint` with an optional payload.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError`] if the payload cannot be encoded, or for
    /// transport failures, non-200 statuses and malformed JSON bodies.
    pub async fn put(
        &self,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> Result<ApiResponse, ConnectorError> {
        self.execute(HttpMethod::Put, endpoint, payload).await
    }

    /// Sends a DELETE request to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError`] for transport failures, non-200 statuses
    /// and malformed JSON bodies.
    pub async fn delete(&self, endpoint: &str) -> Result<ApiResponse, ConnectorError> {
        self.execute(HttpMethod::Delete, endpoint, None).await
    }

    async fn execute(
        &self,
        method: HttpMethod,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> Result<ApiResponse, ConnectorError> {
        let request = self.build_request(method, endpoint, payload)?;

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            has_body = request.body.is_some(),
            "Sending BigCommerce API request"
        );

        let envelope = self.transport.send(request).await?;

        tracing::debug!(status = envelope.code, endpoint, "Received BigCommerce API response");

        normalize(self.config.body_format(), envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::TransportError;
    use crate::clients::http_response::ResponseEnvelope;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    const STORE: &str = "https://store-abc123.mybigcommerce.com";

    /// Records every request and answers with a fixed envelope.
    struct RecordingTransport {
        response: ResponseEnvelope,
        sent: Mutex<Vec<RequestDescriptor>>,
    }

    impl RecordingTransport {
        fn answering(code: u16, body: &str) -> Self {
            Self {
                response: ResponseEnvelope::new(code, body),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<RequestDescriptor> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for RecordingTransport {
        async fn send(
            &self,
            request: RequestDescriptor,
        ) -> Result<ResponseEnvelope, TransportError> {
            self.sent.lock().unwrap().push(request);
            Ok(self.response.clone())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl HttpTransport for FailingTransport {
        async fn send(
            &self,
            _request: RequestDescriptor,
        ) -> Result<ResponseEnvelope, TransportError> {
            Err(TransportError::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }

    fn connector<T: HttpTransport>(format: Option<&str>, transport: T) -> Connector<T> {
        let config = ConnectorConfig::new(STORE, "admin", "abc123", format).unwrap();
        Connector::with_transport(config, transport)
    }

    #[test]
    fn test_from_settings_rejects_invalid_format() {
        let result = Connector::from_settings(STORE, "admin", "abc123", Some("csv"));
        assert!(matches!(
            result,
            Err(ConnectorError::Configuration(
                crate::ConfigError::InvalidBodyFormat { .. }
            ))
        ));
    }

    #[test]
    fn test_build_request_matches_verbs() {
        let connector = connector(None, RecordingTransport::answering(200, "{}"));
        let request = connector
            .build_request(HttpMethod::Get, "/products", None)
            .unwrap();
        assert_eq!(request.url, format!("{STORE}/api/v2/products"));
        assert_eq!(request.method, HttpMethod::Get);
    }

    #[tokio::test]
    async fn test_get_sends_descriptor_and_parses_body() {
        let connector = connector(None, RecordingTransport::answering(200, r#"{"name":"Widget"}"#));

        let response = connector.get("/products/1").await.unwrap();
        assert_eq!(response.json(), Some(&json!({"name": "Widget"})));

        let sent = connector.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert_eq!(sent[0].url, format!("{STORE}/api/v2/products/1"));
        assert!(sent[0].body.is_none());
    }

    #[tokio::test]
    async fn test_each_verb_uses_its_method() {
        let connector = connector(None, RecordingTransport::answering(200, "{}"));
        let payload = json!({"name": "Widget"});

        connector.get("/a").await.unwrap();
        connector.post("/b", Some(&payload)).await.unwrap();
        connector.put("/c", Some(&payload)).await.unwrap();
        connector.delete("/d").await.unwrap();

        let methods: Vec<HttpMethod> = connector
            .transport()
            .sent()
            .iter()
            .map(|r| r.method)
            .collect();
        assert_eq!(
            methods,
            vec![
                HttpMethod::Get,
                HttpMethod::Post,
                HttpMethod::Put,
                HttpMethod::Delete
            ]
        );
    }

    #[tokio::test]
    async fn test_post_without_payload_sends_no_body() {
        let connector = connector(None, RecordingTransport::answering(200, "{}"));
        connector.post("/products", None).await.unwrap();
        assert!(connector.transport().sent()[0].body.is_none());
    }

    #[tokio::test]
    async fn test_serialization_error_happens_before_dispatch() {
        let connector = connector(Some("xml"), RecordingTransport::answering(200, ""));
        let payload = json!({"product": {"bad key": 1}});

        let result = connector.put("/products/1", Some(&payload)).await;
        assert!(matches!(result, Err(ConnectorError::Serialization(_))));
        assert!(connector.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_xml_post_with_unwritable_key_is_not_sent() {
        let connector = connector(Some("xml"), RecordingTransport::answering(200, ""));

        for payload in [
            json!({"product": {"@id": 1, "name": "Widget"}}),
            json!({"product": {"": 1}}),
        ] {
            let result = connector.post("/products", Some(&payload)).await;
            assert!(
                matches!(result, Err(ConnectorError::Serialization(_))),
                "{payload} should fail to serialize"
            );
        }
        assert!(connector.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_transport_error() {
        let connector = connector(None, FailingTransport);
        let result = connector.get("/products").await;
        match result {
            Err(ConnectorError::Transport(e)) => {
                assert!(e.to_string().contains("connection refused"));
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_api_error_is_returned_unchanged() {
        let body = r#"[{"status":404,"message":"The requested resource was not found."}]"#;
        let connector = connector(None, RecordingTransport::answering(404, body));

        let error = connector.delete("/products/1").await.unwrap_err();
        assert_eq!(error.status(), Some(404));
        match error {
            ConnectorError::Api(e) => assert_eq!(e.body, body),
            other => panic!("expected API error, got {other:?}"),
        }
    }
}
