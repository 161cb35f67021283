//! Route definitions for the catalog pages.
//!
//! Mounted at the root by `app_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{category, item};
use crate::state::AppState;

/// Category routes.
///
/// ```text
/// GET  /categories             -> list
/// GET  /category/create        -> create_form
/// POST /category/create        -> create
/// GET  /category/{id}          -> detail (+ referencing items)
/// GET  /category/{id}/update   -> update_form (prefilled)
/// POST /category/{id}/update   -> update (full replace)
/// GET  /category/{id}/delete   -> delete_form (+ referencing items)
/// POST /category/{id}/delete   -> delete (guarded)
/// ```
pub fn category_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category::list))
        .route(
            "/category/create",
            get(category::create_form).post(category::create),
        )
        .route("/category/{id}", get(category::detail))
        .route(
            "/category/{id}/update",
            get(category::update_form).post(category::update),
        )
        .route(
            "/category/{id}/delete",
            get(category::delete_form).post(category::delete),
        )
}

/// Item routes.
///
/// ```text
/// GET  /item_list              -> list
/// GET  /item/create            -> create_form (+ category dropdown)
/// POST /item/create            -> create
/// GET  /item/{id}              -> detail (joined with its category)
/// GET  /item/{id}/update       -> update_form (prefilled, + dropdown)
/// POST /item/{id}/update       -> update (full replace)
/// GET  /item/{id}/delete       -> delete_form
/// POST /item/{id}/delete       -> delete (unconditional)
/// ```
pub fn item_router() -> Router<AppState> {
    Router::new()
        .route("/item_list", get(item::list))
        .route("/item/create", get(item::create_form).post(item::create))
        .route("/item/{id}", get(item::detail))
        .route(
            "/item/{id}/update",
            get(item::update_form).post(item::update),
        )
        .route(
            "/item/{id}/delete",
            get(item::delete_form).post(item::delete),
        )
}
