//! Request building for the legacy API.
//!
//! [`RequestDescriptor::build`] turns a configuration, a method, an endpoint
//! and an optional payload into a fully specified request. It performs no I/O.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::clients::errors::SerializationError;
use crate::clients::xml;
use crate::config::{BodyFormat, ConnectorConfig};

/// HTTP methods supported by the legacy API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the uppercase method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A fully specified request, ready to hand to a transport.
///
/// # Example
///
/// ```rust
/// use bigcommerce_legacy::{ConnectorConfig, HttpMethod, RequestDescriptor};
/// use serde_json::json;
///
/// let config = ConnectorConfig::new(
///     "https://store-abc123.mybigcommerce.com",
///     "admin",
///     "abc123",
///     None,
/// )
/// .unwrap();
///
/// let payload = json!({"inventory_level": 100});
/// let request =
///     RequestDescriptor::build(&config, HttpMethod::Put, "/products/1999", Some(&payload)).unwrap();
///
/// assert_eq!(request.url, "https://store-abc123.mybigcommerce.com/api/v2/products/1999");
/// assert_eq!(request.body.as_deref(), Some(r#"{"inventory_level":100}"#));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute request URL.
    pub url: String,
    /// `Authorization`, `Accept` and `Content-Type`.
    pub headers: HashMap<String, String>,
    /// The encoded body, if a payload was given.
    pub body: Option<String>,
}

impl RequestDescriptor {
    /// Builds the request for `endpoint`.
    ///
    /// The URL is the base path, then `/api/v2`, then `endpoint` exactly as
    /// given; the endpoint should start with `/`.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError`] if the payload cannot be encoded in the
    /// configured body format.
    pub fn build(
        config: &ConnectorConfig,
        method: HttpMethod,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> Result<Self, SerializationError> {
        let url = format!("{}{endpoint}", config.api_root());

        let media_type = config.body_format().media_type();
        let mut headers = HashMap::with_capacity(3);
        headers.insert(
            "Authorization".to_string(),
            config.credential().header_value().to_string(),
        );
        headers.insert("Accept".to_string(), media_type.to_string());
        headers.insert("Content-Type".to_string(), media_type.to_string());

        let body = payload
            .map(|payload| encode_body(config.body_format(), payload))
            .transpose()?;

        Ok(Self {
            method,
            url,
            headers,
            body,
        })
    }

    /// Returns a header value by exact name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// Encodes a payload in the given body format.
///
/// # Errors
///
/// Returns [`SerializationError`] if encoding fails.
pub fn encode_body(format: BodyFormat, payload: &Value) -> Result<String, SerializationError> {
    match format {
        BodyFormat::Json => Ok(serde_json::to_string(payload)?),
        BodyFormat::Xml => xml::encode(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::prelude::*;
    use serde_json::json;

    const STORE: &str = "https://store-abc123.mybigcommerce.com";

    fn config(format: Option<&str>) -> ConnectorConfig {
        ConnectorConfig::new(STORE, "admin", "abc123", format).unwrap()
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_http_method_into_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
        assert_eq!(
            reqwest::Method::from(HttpMethod::Delete),
            reqwest::Method::DELETE
        );
    }

    #[test]
    fn test_url_is_base_plus_version_plus_endpoint() {
        let config = config(None);
        for endpoint in ["/products", "/products?limit=1", "//double", "/categories/14/"] {
            let request = RequestDescriptor::build(&config, HttpMethod::Get, endpoint, None).unwrap();
            assert_eq!(request.url, format!("{STORE}/api/v2{endpoint}"));
        }
    }

    #[test]
    fn test_endpoint_is_not_normalized() {
        let request =
            RequestDescriptor::build(&config(None), HttpMethod::Get, "products", None).unwrap();
        assert_eq!(request.url, format!("{STORE}/api/v2products"));
    }

    #[test]
    fn test_json_headers() {
        let request =
            RequestDescriptor::build(&config(None), HttpMethod::Get, "/products", None).unwrap();
        let expected_auth = format!("Basic {}", BASE64_STANDARD.encode("admin:abc123"));

        assert_eq!(request.headers.len(), 3);
        assert_eq!(request.header("Authorization"), Some(expected_auth.as_str()));
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert_eq!(request.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_xml_headers() {
        let request =
            RequestDescriptor::build(&config(Some("xml")), HttpMethod::Delete, "/products/1", None)
                .unwrap();
        assert_eq!(request.header("Accept"), Some("application/xml"));
        assert_eq!(request.header("Content-Type"), Some("application/xml"));
    }

    #[test]
    fn test_absent_payload_has_no_body() {
        let request =
            RequestDescriptor::build(&config(None), HttpMethod::Post, "/products", None).unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_json_payload_is_serialized() {
        let payload = json!({"name": "Widget", "price": "9.99", "categories": [14]});
        let request =
            RequestDescriptor::build(&config(None), HttpMethod::Post, "/products", Some(&payload))
                .unwrap();

        let body = request.body.unwrap();
        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn test_xml_payload_is_serialized() {
        let payload = json!({"product": {"inventory_level": 900}});
        let request = RequestDescriptor::build(
            &config(Some("xml")),
            HttpMethod::Put,
            "/products/1999",
            Some(&payload),
        )
        .unwrap();

        let body = request.body.unwrap();
        assert!(body.contains("<product><inventory_level>900</inventory_level></product>"));
    }

    #[test]
    fn test_unserializable_xml_payload_fails() {
        let payload = json!({"product": {"not a name": 1}});
        let result = RequestDescriptor::build(
            &config(Some("xml")),
            HttpMethod::Post,
            "/products",
            Some(&payload),
        );
        assert!(matches!(result, Err(SerializationError::Xml(_))));
    }
}
