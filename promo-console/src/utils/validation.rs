//! Input validation helpers
//!
//! Presence and length checks applied before a record is published.

use shared::models::PromotionRecord;

use crate::core::{PublishError, PublishResult};

/// Promotion names and titles
pub const MAX_NAME_LEN: usize = 200;

/// Type labels ("Cashback", "Deposit Match", ...)
pub const MAX_TYPE_LEN: usize = 64;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> PublishResult<()> {
    if value.trim().is_empty() {
        return Err(PublishError::Validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(PublishError::Validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Checks a record must pass before it is appended to the repository
pub fn validate_record(record: &PromotionRecord) -> PublishResult<()> {
    validate_required_text(&record.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&record.promotion_type, "type", MAX_TYPE_LEN)?;
    Ok(())
}
