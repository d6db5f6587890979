//! Input normalization
//!
//! All loosely typed inbound fields pass through here exactly once, when a
//! `ReorderRequest` is built. Stores never see unsanitized input.

use super::entities::ItemId;
use super::errors::ReorderError;
use serde_json::Value;

/// Reduce a raw key to lowercase `[a-z0-9_-]`. Only ASCII letters are folded.
pub fn sanitize_key(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect()
}

/// Strip the first matching type prefix (`post-123` -> `123`).
pub fn strip_type_prefix<'a>(key: &'a str, prefixes: &[String]) -> &'a str {
    prefixes
        .iter()
        .find_map(|prefix| key.strip_prefix(prefix.as_str()))
        .unwrap_or(key)
}

/// Sanitize one submitted identifier. `None` when nothing usable remains.
pub fn sanitize_identifier(raw: &str, prefixes: &[String]) -> Option<ItemId> {
    let key = sanitize_key(raw);
    let id = strip_type_prefix(&key, prefixes);
    if id.is_empty() {
        None
    } else {
        Some(ItemId::new(id))
    }
}

/// Sanitize a whole sequence, silently dropping identifiers that end up empty.
pub fn sanitize_order(order: &[String], prefixes: &[String]) -> Vec<ItemId> {
    order
        .iter()
        .filter_map(|raw| sanitize_identifier(raw, prefixes))
        .collect()
}

/// Extract the raw `order` sequence.
///
/// String and integer elements are kept; anything else is dropped since it
/// cannot produce an identifier.
pub fn normalize_order(value: Option<&Value>) -> Result<Vec<String>, ReorderError> {
    match value {
        None | Some(Value::Null) => Err(ReorderError::Validation { reason: "missing" }),
        Some(Value::Array(items)) => Ok(items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) if n.is_u64() || n.is_i64() => Some(n.to_string()),
                _ => None,
            })
            .collect()),
        Some(_) => Err(ReorderError::Validation {
            reason: "not a sequence",
        }),
    }
}

/// Normalize `start` to a non-negative offset.
///
/// Absent, blank, negative, fractional or unparseable input becomes `0`. A
/// non-negative integer too large for `u32` is rejected rather than reset.
pub fn normalize_start(value: Option<&Value>) -> Result<u32, ReorderError> {
    let digits = match value {
        Some(Value::Number(n)) => match n.as_u64() {
            Some(v) => v.to_string(),
            None => return Ok(0),
        },
        Some(Value::String(s)) => s.trim().to_string(),
        _ => return Ok(0),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(0);
    }
    digits
        .parse::<u32>()
        .map_err(|_| ReorderError::StartOutOfRange { start: digits })
}

/// Normalize `object_type` through the key sanitizer; non-strings become empty.
pub fn normalize_object_type(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => sanitize_key(s),
        _ => String::new(),
    }
}
