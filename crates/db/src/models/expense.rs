//! Expense model.

use chrono::NaiveDate;
use pocket_ledger_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `expenses` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Expense {
    pub id: DbId,
    pub amount: f64,
    pub category_id: DbId,
    pub date: NaiveDate,
    pub note: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated input for inserting an expense.
#[derive(Debug, Clone)]
pub struct CreateExpense {
    pub amount: f64,
    pub category_id: DbId,
    pub date: NaiveDate,
    pub note: String,
}

/// Validated partial update for an expense. `None` leaves the column
/// untouched; `updated_at` is refreshed regardless.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub amount: Option<f64>,
    pub category_id: Option<DbId>,
    pub date: Option<NaiveDate>,
    pub note: Option<String>,
}

impl ExpensePatch {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category_id.is_none()
            && self.date.is_none()
            && self.note.is_none()
    }
}
