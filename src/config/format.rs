//! Request/response body format definitions.
//!
//! This module provides the [`BodyFormat`] enum that selects how request
//! payloads are encoded and how successful responses are decoded.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Body format used for both request payloads and responses.
///
/// The format also drives the `Accept` and `Content-Type` headers, which are
/// always `application/<format>`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_legacy::BodyFormat;
///
/// // Parsing is case-insensitive
/// let format: BodyFormat = "XML".parse().unwrap();
/// assert_eq!(format, BodyFormat::Xml);
/// assert_eq!(format.media_type(), "application/xml");
///
/// // JSON is the default
/// assert_eq!(BodyFormat::default(), BodyFormat::Json);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BodyFormat {
    /// JSON bodies (`application/json`).
    #[default]
    Json,
    /// XML bodies (`application/xml`).
    Xml,
}

impl BodyFormat {
    /// Returns the lowercase name of this format (`json` or `xml`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    /// Returns the MIME type sent in the `Accept` and `Content-Type` headers.
    #[must_use]
    pub const fn media_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }
}

impl fmt::Display for BodyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            _ => Err(ConfigError::InvalidBodyFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl Serialize for BodyFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BodyFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
