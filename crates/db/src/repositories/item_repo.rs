//! Repository for the `items` table.

use larder_core::catalog::ItemDraft;
use larder_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::{Item, ItemSummary, ItemWithCategory};

/// Column list for items queries.
const COLUMNS: &str = "id, name, description, stock, price, category_id, created_at, updated_at";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// List all items, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY name ASC");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Find an item by its ID, joined with its owning category's name.
    pub async fn find_with_category(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ItemWithCategory>, sqlx::Error> {
        sqlx::query_as::<_, ItemWithCategory>(
            "SELECT i.id, i.name, i.description, i.stock, i.price, i.category_id,
                    c.name AS category_name
             FROM items i
             JOIN categories c ON c.id = i.category_id
             WHERE i.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List the items referencing a category, ordered by name ascending.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<ItemSummary>, sqlx::Error> {
        sqlx::query_as::<_, ItemSummary>(
            "SELECT id, name, description FROM items
             WHERE category_id = $1
             ORDER BY name ASC",
        )
        .bind(category_id)
        .fetch_all(pool)
        .await
    }

    /// Total number of items.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Insert a new item from a validated draft, returning the row.
    pub async fn create(pool: &PgPool, draft: &ItemDraft) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (name, description, stock, price, category_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(&draft.stock)
            .bind(&draft.price)
            .bind(draft.category_id)
            .fetch_one(pool)
            .await
    }

    /// Replace every field of an item under its existing ID, returning the
    /// updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &ItemDraft,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                name = $2,
                description = $3,
                stock = $4,
                price = $5,
                category_id = $6,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(&draft.stock)
            .bind(&draft.price)
            .bind(draft.category_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
