//! Repository for the `expenses` table.
//!
//! Every list query returns the most recent expense first: `date` descending,
//! then `id` descending so same-day entries come out newest-inserted first.

use chrono::NaiveDate;
use pocket_ledger_core::types::DbId;

use crate::models::expense::{CreateExpense, Expense, ExpensePatch};
use crate::schema::NOW_UTC;
use crate::DbPool;

/// Column list for expenses queries.
const COLUMNS: &str = "id, amount, category_id, date, note, created_at, updated_at";

/// Shared ordering clause for list queries.
const ORDER_BY: &str = "ORDER BY date DESC, id DESC";

/// Provides CRUD and filtered listing for expenses.
pub struct ExpenseRepo;

impl ExpenseRepo {
    /// List every expense, most recent first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Expense>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenses {ORDER_BY}");
        sqlx::query_as::<_, Expense>(&query).fetch_all(pool).await
    }

    /// List expenses whose date falls in `[start, end]`, most recent first.
    pub async fn list_by_date_range(
        pool: &DbPool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM expenses WHERE date BETWEEN ?1 AND ?2 {ORDER_BY}");
        sqlx::query_as::<_, Expense>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }

    /// List expenses recorded against one category, most recent first.
    pub async fn list_by_category(
        pool: &DbPool,
        category_id: DbId,
    ) -> Result<Vec<Expense>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenses WHERE category_id = ?1 {ORDER_BY}");
        sqlx::query_as::<_, Expense>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Find an expense by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM expenses WHERE id = ?1");
        sqlx::query_as::<_, Expense>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an expense, returning the created row.
    ///
    /// Fails with a foreign key violation if `category_id` does not exist.
    pub async fn create(pool: &DbPool, input: &CreateExpense) -> Result<Expense, sqlx::Error> {
        let query = format!(
            "INSERT INTO expenses (amount, category_id, date, note)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(input.amount)
            .bind(input.category_id)
            .bind(input.date)
            .bind(&input.note)
            .fetch_one(pool)
            .await
    }

    /// Update the supplied fields of an expense and refresh `updated_at`.
    ///
    /// Returns `None` if no expense has this ID.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        patch: &ExpensePatch,
    ) -> Result<Option<Expense>, sqlx::Error> {
        let query = format!(
            "UPDATE expenses SET
                amount = COALESCE(?2, amount),
                category_id = COALESCE(?3, category_id),
                date = COALESCE(?4, date),
                note = COALESCE(?5, note),
                updated_at = {NOW_UTC}
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(id)
            .bind(patch.amount)
            .bind(patch.category_id)
            .bind(patch.date)
            .bind(&patch.note)
            .fetch_optional(pool)
            .await
    }

    /// Delete an expense by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
