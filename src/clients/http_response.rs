//! Response normalization for the legacy API.
//!
//! A transport produces a [`ResponseEnvelope`]; [`normalize`] turns it into
//! an [`ApiResponse`] or a [`ConnectorError`]. Only status 200 counts as
//! success. Every other status, including other 2xx codes, is an
//! [`ApiError`] with the body untouched.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::errors::{ApiError, ConnectorError, ParseError};
use crate::config::BodyFormat;

/// The raw result of one HTTP exchange, as reported by a transport.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseEnvelope {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers with lowercased names. Repeated headers keep every value.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body as text.
    pub body: String,
}

impl ResponseEnvelope {
    /// Creates an envelope with no headers.
    #[must_use]
    pub fn new(code: u16, body: impl Into<String>) -> Self {
        Self {
            code,
            headers: HashMap::new(),
            body: body.into(),
        }
    }
}

/// A decoded response body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseBody {
    /// A parsed JSON document (JSON body format).
    Json(Value),
    /// The raw response text (XML body format).
    Text(String),
}

/// A successful (status 200) response.
///
/// # Example
///
/// ```rust
/// use bigcommerce_legacy::{normalize, BodyFormat, ResponseEnvelope};
/// use serde_json::json;
///
/// let envelope = ResponseEnvelope::new(200, r#"{"name":"Widget"}"#);
/// let response = normalize(BodyFormat::Json, envelope).unwrap();
///
/// assert_eq!(response.json(), Some(&json!({"name": "Widget"})));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    /// The HTTP status code (always 200).
    pub code: u16,
    /// Response headers with lowercased names.
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded body.
    pub body: ResponseBody,
}

impl ApiResponse {
    /// Returns the parsed JSON body, if the body format was JSON.
    #[must_use]
    pub const fn json(&self) -> Option<&Value> {
        match &self.body {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    /// Returns the raw body text, if the body format was XML.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Json(_) => None,
            ResponseBody::Text(text) => Some(text),
        }
    }

    /// Consumes the response and returns the JSON body, if any.
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self.body {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    /// Deserializes a JSON body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the body does not match `T`, or if the body
    /// is XML text. Use [`ApiResponse::text`] for XML responses.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ParseError> {
        match &self.body {
            ResponseBody::Json(value) => {
                T::deserialize(value).map_err(|source| ParseError {
                    body: value.to_string(),
                    source,
                })
            }
            ResponseBody::Text(text) => Err(ParseError {
                body: text.clone(),
                source: serde::de::Error::custom(
                    "response body is XML text; typed deserialization needs the json body format",
                ),
            }),
        }
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Validates the status of `envelope` and decodes its body.
///
/// # Errors
///
/// - [`ConnectorError::Api`] if the status is not 200
/// - [`ConnectorError::Parse`] if the format is JSON and the body is not
///   valid JSON (an empty body included)
pub fn normalize(
    format: BodyFormat,
    envelope: ResponseEnvelope,
) -> Result<ApiResponse, ConnectorError> {
    let ResponseEnvelope {
        code,
        headers,
        body,
    } = envelope;

    if code != 200 {
        tracing::warn!(status = code, "BigCommerce API returned a non-200 status");
        return Err(ApiError { code, body }.into());
    }

    let body = match format {
        BodyFormat::Json => match serde_json::from_str(&body) {
            Ok(value) => ResponseBody::Json(value),
            Err(source) => return Err(ParseError { body, source }.into()),
        },
        BodyFormat::Xml => ResponseBody::Text(body),
    };

    Ok(ApiResponse {
        code,
        headers,
        body,
    })
}
