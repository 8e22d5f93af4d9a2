//! Category model.

use pocket_ledger_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub is_default: bool,
}

/// Input for creating a user category. `is_default` is always false.
///
/// Missing fields deserialize as empty strings and are rejected by
/// validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateCategory {
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Partial update for a category. `None` leaves the column untouched; the
/// default flag is not patchable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl CategoryPatch {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.icon.is_none() && self.color.is_none()
    }
}
