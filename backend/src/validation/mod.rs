//! Shared validation for request payloads.
//!
//! Payloads derive [`Validate`]; field rules that the derive cannot express
//! live in [`rules`].

pub mod rules;

pub use validator::Validate;

use crate::error::AppError;

/// Runs the derived validation and converts failures into an [`AppError`].
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(AppError::from)
}
