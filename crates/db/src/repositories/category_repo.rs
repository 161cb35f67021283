//! Repository for the `categories` table.

use larder_core::catalog::CategoryDraft;
use larder_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;
use crate::models::item::ItemSummary;
use crate::repositories::ItemRepo;

/// Column list for categories queries.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Outcome of a guarded category delete.
#[derive(Debug)]
pub enum CategoryDelete {
    /// The category existed, nothing referenced it, and it is gone.
    Deleted,
    /// Referencing items block the delete; nothing was changed.
    Blocked(Vec<ItemSummary>),
    /// No category with that id.
    Missing,
}

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of categories.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Insert a new category from a validated draft, returning the row.
    pub async fn create(pool: &PgPool, draft: &CategoryDraft) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&draft.name)
            .bind(&draft.description)
            .fetch_one(pool)
            .await
    }

    /// Replace every field of a category under its existing ID, returning
    /// the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &CategoryDraft,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = $2,
                description = $3,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&draft.name)
            .bind(&draft.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category unless items still reference it.
    ///
    /// The existence check and the delete run as a single conditional
    /// statement, so a concurrent item insert cannot slip in between them
    /// and be orphaned.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<CategoryDelete, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM categories
             WHERE id = $1
               AND NOT EXISTS (SELECT 1 FROM items WHERE category_id = $1)",
        )
        .bind(id)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(CategoryDelete::Deleted);
        }

        // Nothing deleted: either blocked by items or already gone. Items
        // can only reference live categories, so blockers imply existence.
        let blockers = ItemRepo::list_by_category(pool, id).await?;
        if blockers.is_empty() {
            Ok(CategoryDelete::Missing)
        } else {
            Ok(CategoryDelete::Blocked(blockers))
        }
    }
}
