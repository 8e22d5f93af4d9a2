//! Date-range resolution for spending statistics.

use chrono::{Days, NaiveDate};

use crate::error::CoreError;
use crate::expense::parse_expense_date;

/// Length of the window used when the caller does not supply a range.
pub const DEFAULT_STATS_WINDOW_DAYS: u64 = 30;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// The [`DEFAULT_STATS_WINDOW_DAYS`] days ending on `today`, inclusive.
    pub fn trailing_window(today: NaiveDate) -> Self {
        let start = today
            .checked_sub_days(Days::new(DEFAULT_STATS_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// Resolve optional query bounds for the stats endpoint.
    ///
    /// Both bounds present: parse them. Either one missing: fall back to the
    /// trailing window ending on `today`.
    pub fn resolve_or_default(
        start: Option<&str>,
        end: Option<&str>,
        today: NaiveDate,
    ) -> Result<Self, CoreError> {
        match (start, end) {
            (Some(start), Some(end)) => Ok(Self {
                start: parse_expense_date(start)?,
                end: parse_expense_date(end)?,
            }),
            _ => Ok(Self::trailing_window(today)),
        }
    }

    /// Resolve optional query bounds for the expense list endpoint.
    ///
    /// Returns `None` when neither bound is given. Supplying only one bound
    /// is a validation error.
    pub fn resolve_optional(
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Option<Self>, CoreError> {
        match (start, end) {
            (None, None) => Ok(None),
            (Some(start), Some(end)) => Ok(Some(Self {
                start: parse_expense_date(start)?,
                end: parse_expense_date(end)?,
            })),
            _ => Err(CoreError::Validation(
                "startDate and endDate must be supplied together".to_string(),
            )),
        }
    }
}
