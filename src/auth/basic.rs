//! HTTP Basic authentication credential for the legacy API.

use base64::prelude::*;
use std::fmt;

use crate::config::{ApiToken, ApiUsername};

/// The base64-encoded `username:token` pair sent in the `Authorization` header.
///
/// The encoding happens once, when the credential is created. Requests only
/// read the stored value.
///
/// # Security
///
/// The `Debug` implementation masks the encoded value, since it is trivially
/// reversible to the raw token.
///
/// # Example
///
/// ```rust
/// use bigcommerce_legacy::{ApiToken, ApiUsername, EncodedCredential};
///
/// let credential = EncodedCredential::new(
///     &ApiUsername::new("user").unwrap(),
///     &ApiToken::new("pass").unwrap(),
/// );
/// assert_eq!(credential.as_str(), "dXNlcjpwYXNz");
/// assert_eq!(credential.header_value(), "Basic dXNlcjpwYXNz");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedCredential {
    header_value: String,
}

impl EncodedCredential {
    const SCHEME: &'static str = "Basic ";

    /// Encodes `username:token` as standard base64.
    #[must_use]
    pub fn new(username: &ApiUsername, token: &ApiToken) -> Self {
        let raw = format!("{}:{}", username.as_ref(), token.as_ref());
        let encoded = BASE64_STANDARD.encode(raw.as_bytes());
        Self {
            header_value: format!("{}{encoded}", Self::SCHEME),
        }
    }

    /// Returns the bare base64 string, without the `Basic ` scheme prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.header_value[Self::SCHEME.len()..]
    }

    /// Returns the full `Authorization` header value (`Basic <credential>`).
    #[must_use]
    pub fn header_value(&self) -> &str {
        &self.header_value
    }
}

impl fmt::Debug for EncodedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncodedCredential(*****)")
    }
}
