//! Route table.

pub mod catalog;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /                   summary counts
/// /health             liveness probe
/// /categories         category pages (see catalog::category_router)
/// /category/...
/// /item_list          item pages (see catalog::item_router)
/// /item/...
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index::index))
        .merge(health::router())
        .merge(catalog::category_router())
        .merge(catalog::item_router())
}
