//! Response envelope decoding.
//!
//! The backend is inconsistent about wrapping. All of these carry the same
//! payload `X`:
//!
//! ```text
//! {"status": "success", "data": X}
//! {"data": X}
//! X
//! ```
//!
//! A `status` other than `"success"` is a refusal, reported with the
//! envelope's `message`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ServiceError;

/// HTTP status reported for refusals that arrive inside a 200 envelope.
const ENVELOPE_REFUSAL_STATUS: u16 = 200;

/// Extracts `X` from any of the accepted shapes.
pub fn unwrap_data<T: DeserializeOwned>(body: Value) -> Result<T, ServiceError> {
    let data = open(body)?;
    Ok(serde_json::from_value(data)?)
}

/// Like [`unwrap_data`] for list endpoints: a missing or `null` `data`
/// decodes as an empty list.
pub fn unwrap_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ServiceError> {
    match open(body)? {
        Value::Null => Ok(Vec::new()),
        data => Ok(serde_json::from_value(data)?),
    }
}

/// Parses a raw list response body and unwraps it.
pub fn decode_list<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, ServiceError> {
    unwrap_list(serde_json::from_str(text)?)
}

fn open(body: Value) -> Result<Value, ServiceError> {
    let mut map = match body {
        Value::Object(map) => map,
        other => return Ok(other),
    };

    if let Some(status) = map.get("status").and_then(Value::as_str) {
        if status != "success" {
            let message = map
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(status)
                .to_string();
            return Err(ServiceError::Rejected {
                status: ENVELOPE_REFUSAL_STATUS,
                message,
            });
        }
        return Ok(map.remove("data").unwrap_or(Value::Null));
    }

    match map.remove("data") {
        Some(data) => Ok(data),
        None => Ok(Value::Object(map)),
    }
}
