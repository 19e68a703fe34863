//! Response envelope unwrapping.
//!
//! # Design
//! Every successful body is `{"<Operation>Result": <payload>}` and every
//! failed one carries a top-level `error` string. The result key is never
//! matched by name; the envelope must simply hold exactly one key.
//!
//! Status handling:
//! - `>= 500`: `HttpError`, body kept verbatim and not parsed.
//! - anything else: body parsed as JSON. A status other than 200, or an
//!   `error` key, yields `Remote`. The `error` key wins even on a 200.

use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::http::HttpResponse;

/// Sub-key under which the list-returning operations nest their payload.
pub const DATA_KEY: &str = "data";

/// Unwrap `response` down to its payload, descending into `sub_key` when
/// one is given.
pub fn unwrap_envelope(response: &HttpResponse, sub_key: Option<&str>) -> Result<Value, ApiError> {
    if response.status >= 500 {
        return Err(ApiError::HttpError {
            status: response.status,
            body: response.body.clone(),
        });
    }

    let body: Value = serde_json::from_str(&response.body)?;

    if let Some(message) = error_message(&body) {
        return Err(ApiError::Remote {
            status: response.status,
            message,
        });
    }
    if response.status != 200 {
        return Err(ApiError::Remote {
            status: response.status,
            message: format!("HTTP status {}", response.status),
        });
    }

    let payload = match body {
        Value::Object(map) => single_value(map)?,
        other => {
            return Err(ApiError::UnexpectedEnvelope(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    match sub_key {
        None => Ok(payload),
        Some(key) => match payload {
            Value::Object(mut inner) => inner.remove(key).ok_or_else(|| {
                ApiError::UnexpectedEnvelope(format!("payload has no {key:?} field"))
            }),
            other => Err(ApiError::UnexpectedEnvelope(format!(
                "expected an object holding {key:?}, got {}",
                json_kind(&other)
            ))),
        },
    }
}

fn error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::String(s) => Some(s.clone()),
        Value::Null => Some("unknown error".to_string()),
        other => Some(other.to_string()),
    }
}

fn single_value(map: Map<String, Value>) -> Result<Value, ApiError> {
    if map.len() != 1 {
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        return Err(ApiError::UnexpectedEnvelope(format!(
            "expected exactly one top-level key, got {} ({})",
            map.len(),
            keys.join(", ")
        )));
    }
    // len checked above
    Ok(map.into_iter().next().map(|(_, v)| v).unwrap_or(Value::Null))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
