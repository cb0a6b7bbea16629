//! HTTP client types for the BigCommerce legacy API.
//!
//! # Overview
//!
//! - [`Connector`]: The async client exposing `get`, `post`, `put` and `delete`
//! - [`RequestDescriptor`]: A fully built request (method, URL, headers, body)
//! - [`ResponseEnvelope`]: The raw status, headers and body from a transport
//! - [`ApiResponse`]: A successful, decoded response
//! - [`HttpTransport`]: The seam between the connector and the network
//! - [`ConnectorError`]: Unified error type for every call
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_legacy::Connector;
//!
//! let connector = Connector::from_settings(
//!     "https://store-abc123.mybigcommerce.com",
//!     "admin",
//!     "abc123",
//!     Some("json"),
//! )?;
//!
//! let response = connector.get("/products?limit=1").await?;
//! ```
//!
//! # Status Handling
//!
//! Only `200 OK` is treated as success. Every other status, including `201`
//! and `204`, becomes [`ConnectorError::Api`] carrying the raw body. Nothing
//! is retried.

mod connector;
mod errors;
mod http_request;
mod http_response;
mod transport;
mod xml;

pub use connector::Connector;
pub use errors::{ApiError, ConnectorError, ParseError, SerializationError, TransportError};
pub use http_request::{encode_body, HttpMethod, RequestDescriptor};
pub use http_response::{normalize, ApiResponse, ResponseBody, ResponseEnvelope};
pub use transport::{HttpTransport, ReqwestTransport};
pub use xml::{DEFAULT_ROOT as XML_DEFAULT_ROOT, XML_DECLARATION};
