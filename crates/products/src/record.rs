//! Flat key-value records (decoded JSON objects) and typed field access.
//!
//! A field holding `null` is treated the same as an absent field.

use catalog_core::{DomainError, DomainResult};
use serde_json::Value;

/// Flat key-value record, as produced by a JSON object.
pub type Record = serde_json::Map<String, Value>;

fn required<'a>(record: &'a Record, field: &str) -> DomainResult<&'a Value> {
    match record.get(field) {
        Some(Value::Null) | None => Err(DomainError::missing_field(field)),
        Some(value) => Ok(value),
    }
}

pub fn required_str(record: &Record, field: &str) -> DomainResult<String> {
    required(record, field)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| DomainError::invalid_field(field, "a string"))
}

pub fn required_f64(record: &Record, field: &str) -> DomainResult<f64> {
    required(record, field)?
        .as_f64()
        .ok_or_else(|| DomainError::invalid_field(field, "a number"))
}

pub fn required_i64(record: &Record, field: &str) -> DomainResult<i64> {
    required(record, field)?
        .as_i64()
        .ok_or_else(|| DomainError::invalid_field(field, "an integer"))
}

pub fn required_u64(record: &Record, field: &str) -> DomainResult<u64> {
    required(record, field)?
        .as_u64()
        .ok_or_else(|| DomainError::invalid_field(field, "a non-negative integer"))
}

pub fn required_array<'a>(record: &'a Record, field: &str) -> DomainResult<&'a Vec<Value>> {
    required(record, field)?
        .as_array()
        .ok_or_else(|| DomainError::invalid_field(field, "an array"))
}

pub fn optional_str(record: &Record, field: &str) -> DomainResult<Option<String>> {
    match record.get(field) {
        Some(Value::Null) | None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_owned()))
            .ok_or_else(|| DomainError::invalid_field(field, "a string")),
    }
}

/// Interpret a JSON value as a record, naming `context` on failure.
pub fn as_record<'a>(value: &'a Value, context: &str) -> DomainResult<&'a Record> {
    value
        .as_object()
        .ok_or_else(|| DomainError::invalid_field(context, "an object"))
}
