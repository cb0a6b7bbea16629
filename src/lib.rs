//! # BigCommerce Legacy API Connector
//!
//! An async Rust client for the BigCommerce legacy (v2) REST API, which is
//! accessed with HTTP Basic authentication over TLS.
//!
//! ## Overview
//!
//! This crate provides:
//! - Validated configuration via [`ConnectorConfig`] and [`ConnectorConfigBuilder`]
//! - A Basic auth credential encoded once per store ([`EncodedCredential`])
//! - JSON or XML request bodies ([`BodyFormat`])
//! - A [`Connector`] with `get`, `post`, `put` and `delete`
//! - Typed errors separating configuration, serialization, transport,
//!   parse and API failures ([`ConnectorError`])
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bigcommerce_legacy::Connector;
//! use serde_json::json;
//!
//! let connector = Connector::from_settings(
//!     "https://store-abc123.mybigcommerce.com",
//!     "admin",
//!     "abc123",
//!     None, // defaults to JSON
//! )?;
//!
//! // GET the first product, then each of its categories
//! let response = connector.get("/products?limit=1").await?;
//! let categories = response.json().and_then(|b| b[0]["categories"].as_array().cloned());
//! for id in categories.unwrap_or_default() {
//!     let category = connector.get(&format!("/categories/{id}")).await?;
//!     println!("{:?}", category.body);
//! }
//!
//! // PUT an update
//! let update = json!({"inventory_level": 100});
//! connector.put("/products/1999", Some(&update)).await?;
//! ```
//!
//! ## XML Bodies
//!
//! With the `xml` body format, payloads are still written as JSON trees and
//! encoded to XML before sending. Successful XML responses are returned as
//! raw text.
//!
//! ```rust
//! use bigcommerce_legacy::{ConnectorConfig, HttpMethod, RequestDescriptor};
//! use serde_json::json;
//!
//! let config = ConnectorConfig::new(
//!     "https://store-abc123.mybigcommerce.com",
//!     "admin",
//!     "abc123",
//!     Some("xml"),
//! )
//! .unwrap();
//!
//! let payload = json!({"product": {"inventory_level": 900}});
//! let request =
//!     RequestDescriptor::build(&config, HttpMethod::Put, "/products/1999", Some(&payload)).unwrap();
//!
//! assert!(request
//!     .body
//!     .unwrap()
//!     .ends_with("<product><inventory_level>900</inventory_level></product>"));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Settings are validated at construction
//! - **Thread-safe**: [`Connector`] is `Send + Sync` and holds no per-request state
//! - **No hidden retries**: Every call is exactly one HTTP round trip

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::EncodedCredential;
pub use config::{
    ApiToken, ApiUsername, BasePath, BodyFormat, ConnectorConfig, ConnectorConfigBuilder,
    API_VERSION_SEGMENT,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    normalize, ApiError, ApiResponse, Connector, ConnectorError, HttpMethod, HttpTransport,
    ParseError, RequestDescriptor, ReqwestTransport, ResponseBody, ResponseEnvelope,
    SerializationError, TransportError,
};
