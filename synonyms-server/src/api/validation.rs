//! Request validation applied before calling into the store.

use crate::error::{ServerResult, validation_error};

/// Require a present, non-blank string field.
pub fn validate_required<'a>(field: &str, value: Option<&'a str>) -> ServerResult<&'a str> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(validation_error(&format!("The {} field cannot be blank.", field))),
        None => Err(validation_error(&format!("The {} field is required.", field))),
    }
}

/// Require a group of at least two non-blank words.
pub fn validate_group(words: Option<&[String]>) -> ServerResult<&[String]> {
    let words = words.ok_or_else(|| validation_error("The words field is required."))?;

    if words.len() < 2 {
        return Err(validation_error(
            "A synonym group needs at least two words.",
        ));
    }

    for word in words {
        validate_required("words", Some(word.as_str()))?;
    }

    Ok(words)
}
