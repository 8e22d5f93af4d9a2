//! Query parameter types for API handlers.
//!
//! Parameter names are camelCase on the wire (`?startDate=&endDate=`).
//! Values arrive as raw strings; an empty value counts as absent.

use pocket_ledger_core::error::CoreError;
use pocket_ledger_core::types::DbId;
use serde::Deserialize;

/// Filters for `GET /api/expenses`.
///
/// A date range takes precedence over `categoryId`; with neither, every
/// expense is returned.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseListParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub category_id: Option<String>,
}

impl ExpenseListParams {
    pub fn start_date(&self) -> Option<&str> {
        non_empty(&self.start_date)
    }

    pub fn end_date(&self) -> Option<&str> {
        non_empty(&self.end_date)
    }

    /// Parse `categoryId`, rejecting anything that is not an integer.
    pub fn category_id(&self) -> Result<Option<DbId>, CoreError> {
        non_empty(&self.category_id)
            .map(|raw| {
                raw.parse::<DbId>().map_err(|_| {
                    CoreError::Validation(format!("invalid categoryId '{raw}'"))
                })
            })
            .transpose()
    }
}

/// Range for `GET /api/expenses/stats`. Missing bounds fall back to the
/// trailing 30-day window.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl StatsParams {
    pub fn start_date(&self) -> Option<&str> {
        non_empty(&self.start_date)
    }

    pub fn end_date(&self) -> Option<&str> {
        non_empty(&self.end_date)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
