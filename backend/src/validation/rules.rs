//! Field rules referenced from `#[validate(custom(...))]` attributes.

use chrono::NaiveDate;
use validator::{ValidateUrl, ValidationError};

const MAX_LABEL_LEN: usize = 40;
const MAX_LABELS: usize = 30;

/// Validates username format.
///
/// Requirements:
/// - Only ASCII alphanumeric characters and underscores
/// - 1-50 characters in length
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() || username.len() > 50 {
        return Err(ValidationError::new("username_invalid_length"));
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ValidationError::new("username_invalid_characters"));
    }

    Ok(())
}

/// Validates a tag or tech-stack list. Blank entries are tolerated because
/// they are dropped on save.
pub fn validate_labels(labels: &[String]) -> Result<(), ValidationError> {
    if labels.len() > MAX_LABELS {
        return Err(ValidationError::new("too_many_labels"));
    }
    if labels
        .iter()
        .any(|label| label.trim().chars().count() > MAX_LABEL_LEN)
    {
        return Err(ValidationError::new("label_too_long"));
    }
    Ok(())
}

/// Accepts `YYYY-MM` or `YYYY-MM-DD`.
pub fn validate_partial_date(value: &str) -> Result<(), ValidationError> {
    if normalize_partial_date(value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("date_format"))
    }
}

/// Like [`validate_partial_date`], but blank means "still ongoing" and clears
/// the stored end date.
pub fn validate_end_date(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Ok(())
    } else {
        validate_partial_date(value)
    }
}

/// URL check for optional links; blank passes and clears the stored link.
pub fn validate_link(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}

/// Expands a partial date to a full [`NaiveDate`], using the first day of the
/// month when the day is missing.
pub fn normalize_partial_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok())
}
