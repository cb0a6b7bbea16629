//! Validated newtype wrappers for connector configuration values.
//!
//! Each wrapper rejects empty input on construction so a [`ConnectorConfig`]
//! can never hold a blank path or credential.
//!
//! [`ConnectorConfig`]: crate::ConnectorConfig

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The store's API base path: scheme and host, without a trailing slash.
///
/// Surrounding whitespace and any trailing `/` characters are removed so the
/// fixed `/api/v2` segment can be appended directly.
///
/// # Example
///
/// ```rust
/// use bigcommerce_legacy::BasePath;
///
/// let path = BasePath::new("https://store-abc123.mybigcommerce.com/").unwrap();
/// assert_eq!(path.as_ref(), "https://store-abc123.mybigcommerce.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// Creates a new validated base path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBasePath`] if nothing is left after trimming.
    pub fn new(path: impl Into<String>) -> Result<Self, ConfigError> {
        let path = path.into();
        let path = path.trim().trim_end_matches('/');
        if path.is_empty() {
            return Err(ConfigError::EmptyBasePath);
        }
        Ok(Self(path.to_string()))
    }
}

impl AsRef<str> for BasePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for BasePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BasePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated legacy API username.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUsername(String);

impl ApiUsername {
    /// Creates a new validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for ApiUsername {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated legacy API token.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `ApiToken(*****)`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_legacy::ApiToken;
///
/// let token = ApiToken::new("abc123").unwrap();
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}
