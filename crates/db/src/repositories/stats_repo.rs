//! Spending aggregates over an inclusive date range.
//!
//! Dates are stored as `YYYY-MM-DD` text, so `BETWEEN` on the text column
//! compares calendar days and needs no time-of-day handling.

use chrono::NaiveDate;

use crate::models::stats::{CategoryTotal, DailyTotal, ExpenseStats};
use crate::DbPool;

/// Provides the statistics queries behind the stats endpoint.
pub struct StatsRepo;

impl StatsRepo {
    /// Compute total spend, per-category spend, and per-day spend for
    /// `[start, end]`.
    ///
    /// The three queries run in one transaction and see the same snapshot.
    pub async fn expense_stats(
        pool: &DbPool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ExpenseStats, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // TOTAL() yields 0.0 for an empty set, unlike SUM().
        let total: f64 = sqlx::query_scalar(
            "SELECT TOTAL(amount) FROM expenses WHERE date BETWEEN ?1 AND ?2",
        )
        .bind(start)
        .bind(end)
        .fetch_one(&mut *tx)
        .await?;

        let by_category = sqlx::query_as::<_, CategoryTotal>(
            "SELECT c.id, c.name, c.icon, c.color,
                    COUNT(e.id) AS count,
                    TOTAL(e.amount) AS total
             FROM categories c
             LEFT JOIN expenses e
               ON e.category_id = c.id
              AND e.date BETWEEN ?1 AND ?2
             GROUP BY c.id, c.name, c.icon, c.color
             ORDER BY total DESC, c.id ASC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&mut *tx)
        .await?;

        let by_date = sqlx::query_as::<_, DailyTotal>(
            "SELECT date, COUNT(*) AS count, TOTAL(amount) AS total
             FROM expenses
             WHERE date BETWEEN ?1 AND ?2
             GROUP BY date
             ORDER BY date DESC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(ExpenseStats {
            total,
            by_category,
            by_date,
        })
    }
}
