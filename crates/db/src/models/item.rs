//! Item model and projections.

use larder_core::catalog::ItemInput;
use larder_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `items` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub stock: String,
    pub price: String,
    pub category_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An item joined with its owning category's name, for detail pages and
/// form prefill.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ItemWithCategory {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub stock: String,
    pub price: String,
    pub category_id: DbId,
    pub category_name: String,
}

/// Name + description projection, used on category pages and to decide
/// whether a category delete is blocked.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ItemSummary {
    pub id: DbId,
    pub name: String,
    pub description: String,
}

/// Prefill a form with the stored values.
impl From<&ItemWithCategory> for ItemInput {
    fn from(item: &ItemWithCategory) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            stock: item.stock.clone(),
            price: item.price.clone(),
            category: item.category_id.to_string(),
        }
    }
}
