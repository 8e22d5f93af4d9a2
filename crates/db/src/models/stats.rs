//! Aggregate spending statistics over a date range.

use chrono::NaiveDate;
use pocket_ledger_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Spend for one category within the range. Categories without expenses in
/// range are present with zero `count` and `total`.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct CategoryTotal {
    pub id: DbId,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub count: i64,
    pub total: f64,
}

/// Spend for one calendar day that has at least one expense.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub count: i64,
    pub total: f64,
}

/// The three aggregates for one date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseStats {
    pub total: f64,
    pub by_category: Vec<CategoryTotal>,
    pub by_date: Vec<DailyTotal>,
}
