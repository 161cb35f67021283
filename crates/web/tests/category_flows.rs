//! HTTP-level tests for the category pages.

mod common;

use axum::http::StatusCode;
use common::{body_string, get, id_from, location, post_form};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_redirects_to_detail(pool: PgPool) {
    let response = post_form(
        common::build_test_app(pool.clone()),
        "/category/create",
        "name=Fruit&description=Fresh+fruit",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let detail_path = location(&response);

    let response = get(common::build_test_app(pool), &detail_path).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Fruit"));
    assert!(body.contains("Fresh fruit"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_form_renders_empty(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/category/create").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("action=\"/category/create\""));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_non_alphanumeric_name_re_renders_form(pool: PgPool) {
    let response = post_form(
        common::build_test_app(pool.clone()),
        "/category/create",
        "name=Dried+Fruit&description=With+a+space",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_string(response).await;
    assert!(body.contains("Name has non-alphanumeric characters."));
    // The submitted values are re-presented, not discarded.
    assert!(body.contains("value=\"Dried Fruit\""));
    assert!(body.contains("With a space"));

    // Nothing was persisted.
    let response = get(common::build_test_app(pool), "/categories").await;
    let body = body_string(response).await;
    assert!(!body.contains("Dried Fruit"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_empty_fields_lists_every_violation(pool: PgPool) {
    let response = post_form(
        common::build_test_app(pool),
        "/category/create",
        "name=&description=",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_string(response).await;
    assert!(body.contains("Category name must be specified."));
    assert!(body.contains("Description must be specified."));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submitted_markup_is_escaped_before_storage(pool: PgPool) {
    let response = post_form(
        common::build_test_app(pool.clone()),
        "/category/create",
        "name=Fruit&description=See+%3Cscript%3E",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let detail_path = location(&response);

    let body = body_string(get(common::build_test_app(pool), &detail_path).await).await;
    assert!(body.contains("See &lt;script&gt;"));
    assert!(!body.contains("See <script>"));
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_shows_categories_in_name_order(pool: PgPool) {
    for body in [
        "name=Vegetables&description=Green",
        "name=Dairy&description=Cold",
    ] {
        post_form(common::build_test_app(pool.clone()), "/category/create", body).await;
    }

    let body = body_string(get(common::build_test_app(pool), "/categories").await).await;
    let dairy = body.find("Dairy").unwrap();
    let vegetables = body.find("Vegetables").unwrap();
    assert!(dairy < vegetables);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_category_detail_is_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/category/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response).await;
    assert!(body.contains("Category with id 999999 not found"));
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_form_is_prefilled(pool: PgPool) {
    let response = post_form(
        common::build_test_app(pool.clone()),
        "/category/create",
        "name=Fruit&description=Fresh+fruit",
    )
    .await;
    let id = id_from(&location(&response));

    let body = body_string(
        get(
            common::build_test_app(pool),
            &format!("/category/{id}/update"),
        )
        .await,
    )
    .await;
    assert!(body.contains("value=\"Fruit\""));
    assert!(body.contains("Fresh fruit"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_replaces_all_fields(pool: PgPool) {
    let response = post_form(
        common::build_test_app(pool.clone()),
        "/category/create",
        "name=Fruit&description=Fresh+fruit",
    )
    .await;
    let id = id_from(&location(&response));

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/category/{id}/update"),
        "name=Produce&description=All+produce",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let body = body_string(get(common::build_test_app(pool), &format!("/category/{id}")).await).await;
    assert!(body.contains("Produce"));
    assert!(body.contains("All produce"));
    assert!(!body.contains("Fresh fruit"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_category_is_404(pool: PgPool) {
    let response = post_form(
        common::build_test_app(pool),
        "/category/999999/update",
        "name=Ghost&description=Gone",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_confirmation_for_missing_category_redirects_to_list(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/category/999999/delete").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/categories");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_unreferenced_category_redirects_to_list(pool: PgPool) {
    let response = post_form(
        common::build_test_app(pool.clone()),
        "/category/create",
        "name=Fruit&description=Fresh+fruit",
    )
    .await;
    let id = id_from(&location(&response));

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/category/{id}/delete"),
        "",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/categories");

    let response = get(common::build_test_app(pool), &format!("/category/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
