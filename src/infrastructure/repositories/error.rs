//! Recognition of the persistence collaborator's failure shapes.
//!
//! `detect_shape` is the only place that looks at the loose fields of a
//! [`RawError`]; everything downstream matches on [`StoreFailure`].
use crate::domain::errors::{
    CAST_ERROR, DOCUMENT_NOT_FOUND_ERROR, DUPLICATE_KEY_CODE, RawError, VALIDATION_ERROR,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreFailure {
    /// An identifier could not be parsed into the store's id format.
    InvalidId,
    /// Per-field constraint messages, in field-name order.
    FieldValidation(Vec<String>),
    /// Fields named in the conflicting unique key.
    DuplicateKey(Vec<String>),
    /// An "expected one, found none" query.
    NotFound,
}

/// Inspect a raw store failure and report which known shape it has.
///
/// Every rule is evaluated; when several match, the last one wins.
pub fn detect_shape(err: &RawError) -> Option<StoreFailure> {
    let mut shape = None;

    if err.name == CAST_ERROR {
        shape = Some(StoreFailure::InvalidId);
    }

    if err.name == VALIDATION_ERROR {
        let messages = err
            .errors
            .values()
            .map(|failure| failure.message.clone())
            .collect();
        shape = Some(StoreFailure::FieldValidation(messages));
    }

    if err.code == Some(DUPLICATE_KEY_CODE) {
        let fields = err
            .key_value
            .as_ref()
            .map(|payload| payload.keys().cloned().collect())
            .unwrap_or_default();
        shape = Some(StoreFailure::DuplicateKey(fields));
    }

    if err.name == DOCUMENT_NOT_FOUND_ERROR {
        shape = Some(StoreFailure::NotFound);
    }

    shape
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::FieldFailure;
    use serde_json::{Map, json};
    use std::collections::BTreeMap;

    #[test]
    fn cast_errors_are_invalid_ids() {
        let err = RawError::cast("Tour", "id", "abc");
        assert_eq!(detect_shape(&err), Some(StoreFailure::InvalidId));
    }

    #[test]
    fn validation_messages_follow_field_order() {
        let mut errors = BTreeMap::new();
        errors.insert("b".into(), FieldFailure::new("b", "user defined", "B invalid"));
        errors.insert("a".into(), FieldFailure::new("a", "required", "A invalid"));

        let err = RawError::validation("Tour", errors);

        assert_eq!(
            detect_shape(&err),
            Some(StoreFailure::FieldValidation(vec![
                "A invalid".into(),
                "B invalid".into()
            ]))
        );
    }

    #[test]
    fn duplicate_key_reports_payload_fields() {
        let mut key_value = Map::new();
        key_value.insert("email".into(), json!("x@y.com"));

        let err = RawError::duplicate_key("users", key_value);

        assert_eq!(
            detect_shape(&err),
            Some(StoreFailure::DuplicateKey(vec!["email".into()]))
        );
    }

    #[test]
    fn duplicate_code_without_payload_still_matches() {
        let err = RawError::new("ServerError").with_code(DUPLICATE_KEY_CODE);
        assert_eq!(detect_shape(&err), Some(StoreFailure::DuplicateKey(vec![])));
    }

    #[test]
    fn document_not_found_is_recognised() {
        let err = RawError::document_not_found("Tour", "x");
        assert_eq!(detect_shape(&err), Some(StoreFailure::NotFound));
    }

    #[test]
    fn later_rules_overwrite_earlier_matches() {
        let err = RawError::new(CAST_ERROR).with_code(DUPLICATE_KEY_CODE);
        assert_eq!(detect_shape(&err), Some(StoreFailure::DuplicateKey(vec![])));
    }

    #[test]
    fn unknown_shapes_are_not_classified() {
        assert_eq!(detect_shape(&RawError::new("TypeError")), None);
        assert_eq!(detect_shape(&RawError::default()), None);
    }
}
