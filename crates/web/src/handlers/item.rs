//! Handlers for item pages and mutations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;

use larder_core::catalog::{self, ItemDraft, ItemInput};
use larder_core::error::CoreError;
use larder_core::types::DbId;
use larder_core::validation::Violation;
use larder_db::repositories::{CategoryRepo, ItemRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /item_list
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = ItemRepo::list(&state.pool).await?;
    Ok(views::item::list(&items))
}

/// GET /item/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = ItemRepo::find_with_category(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;

    Ok(views::item::detail(&item))
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// GET /item/create
pub async fn create_form(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(views::item::form(
        "Create Item",
        "/item/create",
        &ItemInput::default(),
        &categories,
        &[],
    ))
}

/// POST /item/create
pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<ItemInput>,
) -> AppResult<Response> {
    let input = input.sanitized();
    match resolve_draft(&state, &input).await? {
        Ok(draft) => {
            draft.ensure_complete()?;
            let item = ItemRepo::create(&state.pool, &draft).await?;
            tracing::info!(item_id = item.id, name = %item.name, "Item created");
            Ok(Redirect::to(&format!("/item/{}", item.id)).into_response())
        }
        Err(violations) => rerender_form(&state, "Create Item", "/item/create", &input, &violations).await,
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// GET /item/{id}/update
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let (item, categories) = tokio::try_join!(
        ItemRepo::find_with_category(&state.pool, id),
        CategoryRepo::list(&state.pool),
    )?;

    let item = item.ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;

    Ok(views::item::form(
        "Update Item",
        &format!("/item/{id}/update"),
        &ItemInput::from(&item),
        &categories,
        &[],
    ))
}

/// POST /item/{id}/update
///
/// Full replace: every field must pass validation again; nothing is
/// carried over from the stored record.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(input): Form<ItemInput>,
) -> AppResult<Response> {
    let input = input.sanitized();
    match resolve_draft(&state, &input).await? {
        Ok(draft) => {
            draft.ensure_complete()?;
            let updated = ItemRepo::update(&state.pool, id, &draft)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
            tracing::info!(item_id = updated.id, "Item updated");
            Ok(Redirect::to(&format!("/item/{}", updated.id)).into_response())
        }
        Err(violations) => {
            rerender_form(
                &state,
                "Update Item",
                &format!("/item/{id}/update"),
                &input,
                &violations,
            )
            .await
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// GET /item/{id}/delete
///
/// A missing target redirects back to the list instead of failing: the
/// record is already in the state the delete was after.
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    match ItemRepo::find_with_category(&state.pool, id).await? {
        Some(item) => Ok(views::item::delete(&item).into_response()),
        None => Ok(Redirect::to("/item_list").into_response()),
    }
}

/// POST /item/{id}/delete
///
/// Unconditional: nothing references an item.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    if ItemRepo::delete(&state.pool, id).await? {
        tracing::info!(item_id = id, "Item deleted");
    }
    Ok(Redirect::to("/item_list").into_response())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run the field rules, then check the category reference against the
/// store once they pass.
async fn resolve_draft(
    state: &AppState,
    input: &ItemInput,
) -> AppResult<Result<ItemDraft, Vec<Violation>>> {
    let draft = match catalog::validate_item(input) {
        Ok(draft) => draft,
        Err(violations) => return Ok(Err(violations)),
    };

    if CategoryRepo::find_by_id(&state.pool, draft.category_id)
        .await?
        .is_none()
    {
        return Ok(Err(vec![Violation {
            field: "category",
            message: "Category does not exist.",
        }]));
    }

    Ok(Ok(draft))
}

/// Re-render the item form with the submitted values and the violations,
/// keeping the category dropdown populated.
async fn rerender_form(
    state: &AppState,
    title: &str,
    action: &str,
    input: &ItemInput,
    violations: &[Violation],
) -> AppResult<Response> {
    let categories = CategoryRepo::list(&state.pool).await?;
    let page = views::item::form(title, action, input, &categories, violations);
    Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
}
