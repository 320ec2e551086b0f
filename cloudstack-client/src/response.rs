//! Response body extraction.
//!
//! Responses are wrapped as `{"<command>response": {...}}`. Depending on the
//! command's [`ResponseShape`] the payload is the first value under a known
//! key, the single wrapped value, or nothing at all.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::command::ResponseShape;
use crate::ClientError;

/// Finds the first value stored under `key`, depth-first.
///
/// At each object the key itself is checked before any child is searched,
/// so a top-level match wins over a nested one regardless of map order.
#[must_use]
pub fn find_named<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map
            .get(key)
            .or_else(|| map.values().find_map(|child| find_named(child, key))),
        Value::Array(items) => items.iter().find_map(|child| find_named(child, key)),
        _ => None,
    }
}

/// Returns the value inside a single-key wrapper object.
#[must_use]
pub fn unwrap_only(value: Value) -> Option<Value> {
    match value {
        Value::Object(map) if map.len() == 1 => map.into_iter().next().map(|(_, v)| v),
        Value::Null => None,
        other => Some(other),
    }
}

/// Extracts the payload of a body according to `shape`.
///
/// Returns `None` when the body holds no payload: an empty body, a
/// `Discard` shape or a missing named key.
///
/// # Errors
/// Returns [`ClientError::Parse`] if a non-empty body is not JSON.
pub fn extract(command: &str, shape: ResponseShape, body: &str) -> Result<Option<Value>, ClientError> {
    if matches!(shape, ResponseShape::Discard) || body.trim().is_empty() {
        return Ok(None);
    }
    let root: Value = serde_json::from_str(body).map_err(|e| parse_error(command, &e))?;
    Ok(match shape {
        ResponseShape::Named(key) => find_named(&root, key).cloned().filter(|v| !v.is_null()),
        ResponseShape::UnwrapOnly => unwrap_only(root),
        ResponseShape::Discard => None,
    })
}

/// Decodes a collection payload; a single object becomes a one-item list.
///
/// # Errors
/// Returns [`ClientError::Parse`] if an item does not decode as `T`.
pub fn decode_list<T: DeserializeOwned>(command: &str, payload: Option<Value>) -> Result<Vec<T>, ClientError> {
    match payload {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(|e| parse_error(command, &e)))
            .collect(),
        Some(single) => serde_json::from_value(single)
            .map(|item| vec![item])
            .map_err(|e| parse_error(command, &e)),
    }
}

/// Decodes a single payload; from a collection the first item is taken.
///
/// # Errors
/// Returns [`ClientError::Parse`] if the payload does not decode as `T`.
pub fn decode_one<T: DeserializeOwned>(command: &str, payload: Option<Value>) -> Result<Option<T>, ClientError> {
    let value = match payload {
        None => return Ok(None),
        Some(Value::Array(items)) => match items.into_iter().next() {
            Some(first) => first,
            None => return Ok(None),
        },
        Some(value) => value,
    };
    serde_json::from_value(value).map(Some).map_err(|e| parse_error(command, &e))
}

/// Pulls the human-readable message out of an error body.
///
/// Falls back to the raw body when it carries no `errortext`.
#[must_use]
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|root| find_named(&root, "errortext").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| body.trim().to_owned())
}

fn parse_error(command: &str, error: &serde_json::Error) -> ClientError {
    ClientError::Parse { command: command.to_owned(), reason: error.to_string() }
}
