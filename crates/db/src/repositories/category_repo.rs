//! Repository for the `categories` table.

use pocket_ledger_core::types::DbId;

use crate::models::category::{Category, CategoryPatch, CreateCategory};
use crate::DbPool;

/// Column list for categories queries.
const COLUMNS: &str = "id, name, icon, color, is_default";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories, ordered by id ascending.
    pub async fn list(pool: &DbPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = ?1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a category with the given ID exists.
    pub async fn exists(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE id = ?1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }

    /// Create a user category, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, icon, color, is_default)
             VALUES (?1, ?2, ?3, 0)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.icon)
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }

    /// Update the supplied fields of a category, returning the updated row.
    ///
    /// Returns `None` if no category has this ID.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        patch: &CategoryPatch,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE(?2, name),
                icon = COALESCE(?3, icon),
                color = COALESCE(?4, color)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&patch.name)
            .bind(&patch.icon)
            .bind(&patch.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user category by ID. Returns `true` if a row was deleted.
    ///
    /// Default categories are never deleted. Fails with a foreign key
    /// violation while expenses still reference the category.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?1 AND is_default = 0")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
