//! XML encoding of request payloads.
//!
//! Payloads are `serde_json::Value` trees. Object keys become element names,
//! nested objects become child elements, arrays become repeated sibling
//! elements and scalars become text content. The output always has exactly
//! one root element:
//!
//! - an object with a single key uses that key as the root
//!   (`{"product": {...}}` becomes `<product>...</product>`)
//! - anything else is wrapped in a `<root>` element
//!
//! Keys that cannot be written as an element are rejected before anything
//! is serialized: empty keys, keys starting with `@` or `$` (quick-xml would
//! turn them into attributes or bare text) and keys that are not valid XML
//! names. Arrays nested directly inside arrays are rejected too, since
//! repeated siblings cannot keep the inner grouping.

use serde_json::Value;

use crate::clients::errors::SerializationError;

/// Declaration written before every encoded document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Root element name used when the payload has no single top-level key.
pub const DEFAULT_ROOT: &str = "root";

/// Element name for the members of a top-level array payload.
const ARRAY_ITEM: &str = "item";

/// Encodes `payload` as a single-root XML document.
///
/// # Errors
///
/// Returns [`SerializationError::Xml`] if a key cannot be written as an
/// element or an array directly contains another array.
pub fn encode(payload: &Value) -> Result<String, SerializationError> {
    check_writable(payload)?;

    let wrapped;
    let (root, content) = match payload {
        Value::Object(map) if map.len() == 1 => match map.iter().next() {
            Some((key, value)) if !value.is_array() => (key.as_str(), value),
            _ => (DEFAULT_ROOT, payload),
        },
        Value::Array(_) => {
            wrapped = serde_json::json!({ ARRAY_ITEM: payload });
            (DEFAULT_ROOT, &wrapped)
        }
        _ => (DEFAULT_ROOT, payload),
    };

    let body = quick_xml::se::to_string_with_root(root, content)
        .map_err(|e| SerializationError::Xml(e.to_string()))?;

    Ok(format!("{XML_DECLARATION}{body}"))
}

/// Walks `value` and fails on anything the serializer would not write as
/// plain elements.
fn check_writable(value: &Value) -> Result<(), SerializationError> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if key.is_empty() || key.starts_with('@') || key.starts_with('$') {
                    return Err(SerializationError::Xml(format!(
                        "element name '{key}' cannot be written as an XML element"
                    )));
                }
                check_writable(child)?;
            }
            Ok(())
        }
        Value::Array(items) => {
            for item in items {
                if item.is_array() {
                    return Err(SerializationError::Xml(
                        "nested arrays cannot be written as repeated elements".to_string(),
                    ));
                }
                check_writable(item)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
