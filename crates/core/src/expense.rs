//! Expense field validation.

use chrono::{DateTime, NaiveDate};

use crate::error::CoreError;

/// Calendar date format used on the wire and in storage.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate an expense amount: finite and strictly positive.
pub fn validate_amount(amount: f64) -> Result<f64, CoreError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CoreError::Validation(format!(
            "amount must be a positive number, got {amount}"
        )));
    }
    Ok(amount)
}

/// Parse an expense date.
///
/// Accepts a plain `YYYY-MM-DD` date or a full RFC 3339 timestamp, in which
/// case only the calendar date (in the timestamp's own offset) is kept.
pub fn parse_expense_date(value: &str) -> Result<NaiveDate, CoreError> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.date_naive())
        .map_err(|_| CoreError::Validation(format!("invalid date '{value}'")))
}
