//! Home page handler.

use axum::extract::State;
use axum::response::IntoResponse;

use larder_db::repositories::{CategoryRepo, ItemRepo};

use crate::error::AppResult;
use crate::state::AppState;
use crate::views;

/// GET /
///
/// The two totals are independent reads with no ordering dependency, so
/// they are issued concurrently and joined before rendering.
pub async fn index(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let (num_categories, num_items) = tokio::try_join!(
        CategoryRepo::count(&state.pool),
        ItemRepo::count(&state.pool),
    )?;

    Ok(views::index(num_categories, num_items))
}
