//! Field validators shared by request payloads

use chrono::{NaiveDate, Utc};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::AppError;

/// Declared field order of a request payload.
///
/// `validator` collects failures in a map, so the payload lists its fields
/// to make "first failing field" deterministic.
pub trait FieldOrder {
    const FIELDS: &'static [&'static str];
}

/// Rejects strings that are empty or whitespace only
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Rejects dates after today (UTC)
pub fn not_in_future(value: &NaiveDate) -> Result<(), ValidationError> {
    if *value > Utc::now().date_naive() {
        return Err(ValidationError::new("past_or_present"));
    }
    Ok(())
}

/// Message of the first failing field, in declaration order
pub fn first_message<T: FieldOrder>(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    T::FIELDS
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .chain(field_errors.values())
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request data".to_string())
}

/// Validate a payload, reducing failures to a single message
pub fn validate_payload<T: Validate + FieldOrder>(payload: &T) -> Result<(), String> {
    payload.validate().map_err(|errors| first_message::<T>(&errors))
}

/// Unwrap a field that validation declares required
pub fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}
