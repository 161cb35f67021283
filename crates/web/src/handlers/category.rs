//! Handlers for category pages and mutations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;

use larder_core::catalog::{self, CategoryInput};
use larder_core::error::CoreError;
use larder_core::types::DbId;
use larder_db::repositories::{CategoryDelete, CategoryRepo, ItemRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /categories
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(views::category::list(&categories))
}

/// GET /category/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let (category, items) = tokio::try_join!(
        CategoryRepo::find_by_id(&state.pool, id),
        ItemRepo::list_by_category(&state.pool, id),
    )?;

    let category = category.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    }))?;

    Ok(views::category::detail(&category, &items))
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// GET /category/create
pub async fn create_form() -> impl IntoResponse {
    views::category::form(
        "Create Category",
        "/category/create",
        &CategoryInput::default(),
        &[],
    )
}

/// POST /category/create
pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<CategoryInput>,
) -> AppResult<Response> {
    let input = input.sanitized();
    let draft = match catalog::validate_category(&input) {
        Ok(draft) => draft,
        Err(violations) => {
            let page =
                views::category::form("Create Category", "/category/create", &input, &violations);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    draft.ensure_complete()?;
    let category = CategoryRepo::create(&state.pool, &draft).await?;
    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok(Redirect::to(&format!("/category/{}", category.id)).into_response())
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// GET /category/{id}/update
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    Ok(views::category::form(
        "Update Category",
        &format!("/category/{id}/update"),
        &CategoryInput::from(&category),
        &[],
    ))
}

/// POST /category/{id}/update
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(input): Form<CategoryInput>,
) -> AppResult<Response> {
    let input = input.sanitized();
    let draft = match catalog::validate_category(&input) {
        Ok(draft) => draft,
        Err(violations) => {
            let page = views::category::form(
                "Update Category",
                &format!("/category/{id}/update"),
                &input,
                &violations,
            );
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
        }
    };

    draft.ensure_complete()?;
    let updated = CategoryRepo::update(&state.pool, id, &draft)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    tracing::info!(category_id = updated.id, "Category updated");

    Ok(Redirect::to(&format!("/category/{}", updated.id)).into_response())
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// GET /category/{id}/delete
///
/// A missing target redirects back to the list instead of failing: the
/// record is already in the state the delete was after.
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let (category, items) = tokio::try_join!(
        CategoryRepo::find_by_id(&state.pool, id),
        ItemRepo::list_by_category(&state.pool, id),
    )?;

    let Some(category) = category else {
        return Ok(Redirect::to("/categories").into_response());
    };

    Ok(views::category::delete(&category, &items).into_response())
}

/// POST /category/{id}/delete
///
/// The guard and the delete run as one atomic statement in the repository;
/// a blocked delete re-renders the confirmation page with the blockers.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    match CategoryRepo::delete(&state.pool, id).await? {
        CategoryDelete::Deleted => {
            tracing::info!(category_id = id, "Category deleted");
            Ok(Redirect::to("/categories").into_response())
        }
        CategoryDelete::Blocked(blockers) => {
            let category = CategoryRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Category",
                    id,
                }))?;
            let page = views::category::delete(&category, &blockers);
            Ok((StatusCode::CONFLICT, page).into_response())
        }
        CategoryDelete::Missing => Ok(Redirect::to("/categories").into_response()),
    }
}
