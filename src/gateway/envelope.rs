//! Normalization of upstream response envelopes.
//!
//! The upstream API does not use one consistent envelope shape across
//! endpoints: the record collection may sit under a generic `data`
//! array, under a resource-named array, or nested one level as
//! `data.<resource>`. The ordered fallback here absorbs that
//! inconsistency in one place so every downstream consumer can assume
//! exactly one shape. Adding a new envelope variant is a one-place
//! change.

use serde_json::Value;

/// True when the envelope carries an explicit `success: true` flag.
/// A missing or non-boolean flag counts as failure.
pub fn succeeded(envelope: &Value) -> bool {
    envelope
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Optional human-readable message carried by the envelope.
pub fn message(envelope: &Value) -> Option<String> {
    envelope
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Resolves the record collection for `resource`, trying in order:
/// a generic `data` array, a resource-named array, then a resource
/// array nested one level inside `data`. First match wins; no match
/// resolves to an empty collection.
pub fn records(envelope: &Value, resource: &str) -> Vec<Value> {
    if let Some(list) = envelope.get("data").and_then(Value::as_array) {
        return list.clone();
    }
    if let Some(list) = envelope.get(resource).and_then(Value::as_array) {
        return list.clone();
    }
    if let Some(list) = envelope
        .get("data")
        .and_then(|data| data.get(resource))
        .and_then(Value::as_array)
    {
        return list.clone();
    }
    Vec::new()
}

/// Single-record mirror of [`records`]: `data.<resource>` object,
/// then the `data` object itself, then a top-level resource object.
pub fn record(envelope: &Value, resource: &str) -> Option<Value> {
    if let Some(object) = envelope
        .get("data")
        .and_then(|data| data.get(resource))
        .filter(|v| v.is_object())
    {
        return Some(object.clone());
    }
    if let Some(object) = envelope.get("data").filter(|v| v.is_object()) {
        return Some(object.clone());
    }
    envelope.get(resource).filter(|v| v.is_object()).cloned()
}
