//! Error types for connector calls.
//!
//! Every verb on [`Connector`](crate::Connector) returns
//! `Result<_, ConnectorError>`. The variants map one-to-one onto the ways a
//! call can fail:
//!
//! - [`ConnectorError::Configuration`]: invalid construction parameters
//! - [`ConnectorError::Serialization`]: the payload could not be encoded
//! - [`ConnectorError::Transport`]: no HTTP response was obtained
//! - [`ConnectorError::Parse`]: a 200 response body was malformed
//! - [`ConnectorError::Api`]: the API answered with a status other than 200
//!
//! Nothing is retried; each error reaches the caller as-is.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_legacy::ConnectorError;
//!
//! match connector.get("/products/1999").await {
//!     Ok(response) => println!("{:?}", response.body),
//!     Err(ConnectorError::Api(e)) => println!("API error {}: {}", e.code, e.body),
//!     Err(ConnectorError::Transport(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use std::error::Error as StdError;

use thiserror::Error;

use crate::error::ConfigError;

/// A well-formed HTTP response whose status was not 200.
///
/// The body is kept exactly as received so upstream error text is never lost.
///
/// # Example
///
/// ```rust
/// use bigcommerce_legacy::ApiError;
///
/// let error = ApiError {
///     code: 404,
///     body: r#"{"error":"not found"}"#.to_string(),
/// };
///
/// assert_eq!(error.to_string(), r#"API responded with status 404: {"error":"not found"}"#);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("API responded with status {code}: {body}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

/// The payload could not be encoded in the configured body format.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// JSON encoding failed.
    #[error("Failed to serialize payload as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// XML encoding failed.
    #[error("Failed to serialize payload as XML: {0}")]
    Xml(String),
}

/// A response body with status 200 could not be parsed.
#[derive(Debug, Error)]
#[error("Failed to parse response body: {source}")]
pub struct ParseError {
    /// The raw body that failed to parse.
    pub body: String,
    /// The underlying parser error.
    #[source]
    pub source: serde_json::Error,
}

/// A network-level failure: no HTTP response was obtained.
#[derive(Debug, Error)]
#[error("Transport error: {source}")]
pub struct TransportError {
    #[source]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl TransportError {
    /// Wraps an underlying transport failure.
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Returns the underlying `reqwest` error, if the failure came from one.
    #[must_use]
    pub fn as_reqwest(&self) -> Option<&reqwest::Error> {
        self.source.downcast_ref()
    }

    /// Returns `true` if the underlying failure was a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.as_reqwest().is_some_and(reqwest::Error::is_timeout)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self::new(error)
    }
}

/// Unified error type for all connector operations.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Invalid or missing construction parameters.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The payload could not be encoded.
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// Network or connection failure.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body was malformed for the configured format.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The API returned a status other than 200.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ConnectorError {
    /// Returns the HTTP status code for [`ConnectorError::Api`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.into())
    }
}
