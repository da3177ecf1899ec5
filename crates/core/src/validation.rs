//! Field-level validation of incoming payloads.
//!
//! Payload types implement [`validator::Validate`]; handlers call
//! [`validate_resource`] to flatten the result into a list of
//! [`FieldFailure`]s that can be returned to the caller as-is.

use std::borrow::Cow;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::types::Timestamp;

/// Required length of a touchpoint identifier.
pub const TOUCHPOINT_ID_LEN: usize = 10;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    pub field: String,
    pub message: String,
}

/// Run the resource's validation rules. An empty list means the resource is valid.
///
/// Failures are sorted by field, then message, so responses are stable.
pub fn validate_resource<T: Validate>(resource: &T) -> Vec<FieldFailure> {
    match resource.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => failures_from(&errors),
    }
}

/// Flatten `validator`'s per-field error map into [`FieldFailure`]s.
pub fn failures_from(errors: &ValidationErrors) -> Vec<FieldFailure> {
    let mut failures: Vec<FieldFailure> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| FieldFailure {
                field: field.to_string(),
                message: describe(err),
            })
        })
        .collect();

    failures.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    failures
}

fn describe(err: &ValidationError) -> String {
    err.message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| err.code.to_string())
}

/// Build a [`ValidationError`] carrying a human-readable message.
pub fn rule_error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Reject timestamps later than `now`.
pub fn not_in_future(value: &Timestamp, now: &Timestamp) -> Result<(), ValidationError> {
    if value > now {
        Err(rule_error("not_in_future", "must be less than or equal to the current time"))
    } else {
        Ok(())
    }
}

/// Touchpoint identifiers are exactly ten ASCII digits.
pub fn touchpoint_id(value: &str) -> Result<(), ValidationError> {
    let well_formed =
        value.len() == TOUCHPOINT_ID_LEN && value.bytes().all(|b| b.is_ascii_digit());
    if well_formed {
        Ok(())
    } else {
        Err(rule_error(
            "touchpoint_id",
            format!("must be {TOUCHPOINT_ID_LEN} digits"),
        ))
    }
}
