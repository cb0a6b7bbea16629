//! Configuration error types for the BigCommerce legacy connector.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that an
//! invalid store configuration is rejected before any request is attempted.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_legacy::{ApiUsername, ConfigError};
//!
//! let result = ApiUsername::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUsername)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a connector configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API base path was empty.
    #[error("BC API path cannot be empty. Provide the store URL, e.g. 'https://store-abc123.mybigcommerce.com'.")]
    EmptyBasePath,

    /// The API username was empty.
    #[error("BC API username cannot be empty.")]
    EmptyUsername,

    /// The API token was empty.
    #[error("BC API token cannot be empty.")]
    EmptyToken,

    /// The body format was not one of the supported formats.
    #[error("Invalid body format '{format}'. Valid options are either 'json' or 'xml'.")]
    InvalidBodyFormat {
        /// The rejected format string.
        format: String,
    },

    /// A required field was never set on the builder.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
