//! Table definitions and default data.
//!
//! There is no migration history: both tables are created with
//! `CREATE TABLE IF NOT EXISTS` on every startup.

use pocket_ledger_core::category::DEFAULT_CATEGORIES;

use crate::DbPool;

/// SQL expression producing the current UTC time as RFC 3339 text.
pub(crate) const NOW_UTC: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";

const CREATE_CATEGORIES: &str = "CREATE TABLE IF NOT EXISTS categories (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT    NOT NULL,
    icon       TEXT    NOT NULL,
    color      TEXT    NOT NULL,
    is_default INTEGER NOT NULL DEFAULT 0
)";

const CREATE_EXPENSES: &str = "CREATE TABLE IF NOT EXISTS expenses (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    amount      REAL    NOT NULL CHECK (amount > 0),
    category_id INTEGER NOT NULL REFERENCES categories (id),
    date        TEXT    NOT NULL,
    note        TEXT    NOT NULL DEFAULT '',
    created_at  TEXT    NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at  TEXT    NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
)";

const CREATE_EXPENSES_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses (date)";

const CREATE_EXPENSES_CATEGORY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_expenses_category_id ON expenses (category_id)";

/// Create both tables and their indexes if they do not exist yet.
pub async fn create_tables(pool: &DbPool) -> Result<(), sqlx::Error> {
    for statement in [
        CREATE_CATEGORIES,
        CREATE_EXPENSES,
        CREATE_EXPENSES_DATE_INDEX,
        CREATE_EXPENSES_CATEGORY_INDEX,
    ] {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Insert the default categories unless at least one default row exists.
///
/// The check and the inserts share one transaction, so either the whole
/// seed list lands or none of it does.
pub async fn seed_default_categories(pool: &DbPool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let existing: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE is_default = 1")
            .fetch_one(&mut *tx)
            .await?;

    if existing > 0 {
        tx.rollback().await?;
        return Ok(0);
    }

    let mut inserted = 0;
    for category in DEFAULT_CATEGORIES {
        inserted += sqlx::query(
            "INSERT INTO categories (name, icon, color, is_default) VALUES (?1, ?2, ?3, 1)",
        )
        .bind(category.name)
        .bind(category.icon)
        .bind(category.color)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    tx.commit().await?;
    tracing::info!(count = inserted, "Seeded default categories");

    Ok(inserted)
}
