//! Configuration types for the BigCommerce legacy connector.
//!
//! # Overview
//!
//! - [`ConnectorConfig`]: Immutable per-store settings and the precomputed credential
//! - [`ConnectorConfigBuilder`]: A builder for constructing [`ConnectorConfig`] instances
//! - [`BasePath`], [`ApiUsername`], [`ApiToken`]: Validated newtypes
//! - [`BodyFormat`]: JSON or XML request/response bodies
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_legacy::{ApiToken, ApiUsername, BasePath, BodyFormat, ConnectorConfig};
//!
//! let config = ConnectorConfig::builder()
//!     .base_path(BasePath::new("https://store-abc123.mybigcommerce.com").unwrap())
//!     .username(ApiUsername::new("admin").unwrap())
//!     .token(ApiToken::new("abc123").unwrap())
//!     .body_format(BodyFormat::Xml)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.body_format(), BodyFormat::Xml);
//! ```

mod format;
mod newtypes;

pub use format::BodyFormat;
pub use newtypes::{ApiToken, ApiUsername, BasePath};

use crate::auth::EncodedCredential;
use crate::error::ConfigError;

/// Fixed path segment of the legacy API, inserted between the base path and
/// every endpoint.
pub const API_VERSION_SEGMENT: &str = "/api/v2";

/// Per-store configuration for the legacy API connector.
///
/// The Basic auth credential is encoded once at construction and reused by
/// every request. The struct has no interior mutability, so it can be shared
/// freely between concurrent calls.
///
/// # Example
///
/// ```rust
/// use bigcommerce_legacy::{BodyFormat, ConnectorConfig};
///
/// let config = ConnectorConfig::new(
///     "https://store-abc123.mybigcommerce.com",
///     "admin",
///     "abc123",
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(config.body_format(), BodyFormat::Json);
/// assert_eq!(config.api_root(), "https://store-abc123.mybigcommerce.com/api/v2");
/// ```
#[derive(Clone, Debug)]
pub struct ConnectorConfig {
    base_path: BasePath,
    username: ApiUsername,
    token: ApiToken,
    body_format: BodyFormat,
    credential: EncodedCredential,
}

impl ConnectorConfig {
    /// Creates a configuration from raw settings.
    ///
    /// Fields are validated in order: path, username, token, then the
    /// optional body format (case-insensitive `json` or `xml`, default `json`).
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for the first invalid field.
    pub fn new(
        base_path: impl Into<String>,
        username: impl Into<String>,
        token: impl Into<String>,
        body_format: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Self::builder()
            .base_path(BasePath::new(base_path)?)
            .username(ApiUsername::new(username)?)
            .token(ApiToken::new(token)?);
        if let Some(format) = body_format {
            builder = builder.body_format(format.parse()?);
        }
        builder.build()
    }

    /// Creates a new builder for constructing a `ConnectorConfig`.
    #[must_use]
    pub fn builder() -> ConnectorConfigBuilder {
        ConnectorConfigBuilder::new()
    }

    /// Returns the store's base path.
    #[must_use]
    pub const fn base_path(&self) -> &BasePath {
        &self.base_path
    }

    /// Returns the API username.
    #[must_use]
    pub const fn username(&self) -> &ApiUsername {
        &self.username
    }

    /// Returns the API token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns the configured body format.
    #[must_use]
    pub const fn body_format(&self) -> BodyFormat {
        self.body_format
    }

    /// Returns the precomputed Basic auth credential.
    #[must_use]
    pub const fn credential(&self) -> &EncodedCredential {
        &self.credential
    }

    /// Returns the base path joined with the fixed API version segment.
    #[must_use]
    pub fn api_root(&self) -> String {
        format!("{}{API_VERSION_SEGMENT}", self.base_path)
    }
}

// Verify ConnectorConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConnectorConfig>();
};

/// Builder for constructing [`ConnectorConfig`] instances.
///
/// `base_path`, `username` and `token` are required. `body_format` defaults
/// to [`BodyFormat::Json`].
#[derive(Debug, Default)]
pub struct ConnectorConfigBuilder {
    base_path: Option<BasePath>,
    username: Option<ApiUsername>,
    token: Option<ApiToken>,
    body_format: Option<BodyFormat>,
}

impl ConnectorConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store's base path (required).
    #[must_use]
    pub fn base_path(mut self, base_path: BasePath) -> Self {
        self.base_path = Some(base_path);
        self
    }

    /// Sets the API username (required).
    #[must_use]
    pub fn username(mut self, username: ApiUsername) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the body format.
    #[must_use]
    pub const fn body_format(mut self, body_format: BodyFormat) -> Self {
        self.body_format = Some(body_format);
        self
    }

    /// Builds the [`ConnectorConfig`] and encodes its credential.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_path`,
    /// `username` or `token` is not set.
    pub fn build(self) -> Result<ConnectorConfig, ConfigError> {
        let base_path = self
            .base_path
            .ok_or(ConfigError::MissingRequiredField { field: "base_path" })?;
        let username = self
            .username
            .ok_or(ConfigError::MissingRequiredField { field: "username" })?;
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        let credential = EncodedCredential::new(&username, &token);

        Ok(ConnectorConfig {
            base_path,
            username,
            token,
            body_format: self.body_format.unwrap_or_default(),
            credential,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORE: &str = "https://store-abc123.mybigcommerce.com";

    #[test]
    fn test_new_defaults_to_json() {
        let config = ConnectorConfig::new(STORE, "admin", "abc123", None).unwrap();
        assert_eq!(config.body_format(), BodyFormat::Json);
    }

    #[test]
    fn test_new_accepts_mixed_case_format() {
        let config = ConnectorConfig::new(STORE, "admin", "abc123", Some("XML")).unwrap();
        assert_eq!(config.body_format(), BodyFormat::Xml);
    }

    #[test]
    fn test_new_rejects_unknown_format() {
        let result = ConnectorConfig::new(STORE, "admin", "abc123", Some("csv"));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidBodyFormat { format }) if format == "csv"
        ));
    }

    #[test]
    fn test_new_rejects_empty_fields_in_order() {
        assert_eq!(
            ConnectorConfig::new("", "", "", Some("csv")).unwrap_err(),
            ConfigError::EmptyBasePath
        );
        assert_eq!(
            ConnectorConfig::new(STORE, "", "", None).unwrap_err(),
            ConfigError::EmptyUsername
        );
        assert_eq!(
            ConnectorConfig::new(STORE, "admin", "", None).unwrap_err(),
            ConfigError::EmptyToken
        );
    }

    #[test]
    fn test_builder_requires_base_path() {
        let result = ConnectorConfigBuilder::new()
            .username(ApiUsername::new("admin").unwrap())
            .token(ApiToken::new("abc123").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_path" })
        ));
    }

    #[test]
    fn test_builder_requires_username() {
        let result = ConnectorConfigBuilder::new()
            .base_path(BasePath::new(STORE).unwrap())
            .token(ApiToken::new("abc123").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "username" })
        ));
    }

    #[test]
    fn test_builder_requires_token() {
        let result = ConnectorConfigBuilder::new()
            .base_path(BasePath::new(STORE).unwrap())
            .username(ApiUsername::new("admin").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "token" })
        ));
    }

    #[test]
    fn test_credential_is_computed_at_construction() {
        let config = ConnectorConfig::new(STORE, "admin", "abc123", None).unwrap();
        let expected = EncodedCredential::new(config.username(), config.token());
        assert_eq!(config.credential(), &expected);
        assert_eq!(config.credential().as_str(), "YWRtaW46YWJjMTIz");
    }

    #[test]
    fn test_api_root_appends_version_segment() {
        let config = ConnectorConfig::new(STORE, "admin", "abc123", None).unwrap();
        assert_eq!(config.api_root(), format!("{STORE}/api/v2"));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let config = ConnectorConfig::new(STORE, "admin", "very-secret", None).unwrap();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("ConnectorConfig"));
        assert!(!debug_str.contains("very-secret"));
        assert!(!debug_str.contains(config.credential().as_str()));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConnectorConfig>();
    }
}
