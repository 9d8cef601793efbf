// src/domain/errors.rs
//! Failures raised by the persistence collaborator.
//!
//! The store reports problems as loosely shaped records rather than a closed
//! enum: a `name` tag, an optional driver `code`, per-field validation details
//! and an optional `key_value` payload for uniqueness conflicts. Nothing here
//! guarantees which combination of fields is present, so consumers must
//! inspect the shape defensively.
use serde_json::{Map, Value};
use std::{collections::BTreeMap, fmt};

pub type StoreResult<T> = Result<T, RawError>;

pub const CAST_ERROR: &str = "CastError";
pub const VALIDATION_ERROR: &str = "ValidationError";
pub const DOCUMENT_NOT_FOUND_ERROR: &str = "DocumentNotFoundError";
pub const SERVER_ERROR: &str = "ServerError";

/// Driver code reported for a duplicate value on a unique index.
pub const DUPLICATE_KEY_CODE: i64 = 11000;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawError {
    pub name: String,
    pub message: Option<String>,
    pub code: Option<i64>,
    pub errors: BTreeMap<String, FieldFailure>,
    pub key_value: Option<Map<String, Value>>,
}

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub message: String,
    pub kind: String,
    pub path: String,
}

impl FieldFailure {
    pub fn new(path: impl Into<String>, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: kind.into(),
            path: path.into(),
        }
    }
}

impl RawError {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    pub fn cast(model: &str, path: &str, value: &str) -> Self {
        Self::new(CAST_ERROR).with_message(format!(
            "Cast to Uuid failed for value \"{value}\" at path \"{path}\" for model \"{model}\""
        ))
    }

    pub fn validation(model: &str, errors: BTreeMap<String, FieldFailure>) -> Self {
        let summary = errors
            .iter()
            .map(|(field, failure)| format!("{field}: {}", failure.message))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            name: VALIDATION_ERROR.into(),
            message: Some(format!("{model} validation failed: {summary}")),
            errors,
            ..Self::default()
        }
    }

    pub fn duplicate_key(collection: &str, key_value: Map<String, Value>) -> Self {
        let index = key_value
            .keys()
            .map(|key| format!("{key}_1"))
            .collect::<Vec<_>>()
            .join("_");
        let dup = Value::Object(key_value.clone());
        Self {
            name: SERVER_ERROR.into(),
            message: Some(format!(
                "E{DUPLICATE_KEY_CODE} duplicate key error collection: {collection} index: {index} dup key: {dup}"
            )),
            code: Some(DUPLICATE_KEY_CODE),
            key_value: Some(key_value),
            ..Self::default()
        }
    }

    pub fn document_not_found(model: &str, id: &str) -> Self {
        Self::new(DOCUMENT_NOT_FOUND_ERROR).with_message(format!(
            "No document found for query {{ id: \"{id}\" }} on model \"{model}\""
        ))
    }
}

impl fmt::Display for RawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {message}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl std::error::Error for RawError {}
