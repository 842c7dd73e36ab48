//! Category endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        category::{CategoryRequest, CategorySummary},
        BookSummary,
    },
    AppState,
};

use super::{PathParams, ValidatedJson};

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Category list", body = Vec<CategorySummary>)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<CategorySummary>>> {
    Ok(Json(state.services.categories.find_all().await?))
}

/// List the books in a category
#[utoipa::path(
    get,
    path = "/categories/books/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Books in category", body = Vec<BookSummary>)
    )
)]
pub async fn list_books_by_category(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<Vec<BookSummary>>> {
    Ok(Json(state.services.categories.find_all_books_by_category_id(id).await?))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = CategorySummary),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<CategorySummary>> {
    Ok(Json(state.services.categories.find_by_id(id).await?))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategorySummary),
        (status = 400, description = "Invalid category data", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CategoryRequest>,
) -> AppResult<(StatusCode, Json<CategorySummary>)> {
    let category = state.services.categories.create(&data).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Rename a category
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategorySummary),
        (status = 400, description = "Invalid category data", body = crate::error::ErrorResponse),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
    ValidatedJson(data): ValidatedJson<CategoryRequest>,
) -> AppResult<Json<CategorySummary>> {
    Ok(Json(state.services.categories.update(id, data).await?))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<StatusCode> {
    state.services.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
