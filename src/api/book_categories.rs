//! Book-Category link endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::book_category::{BookCategoryId, BookCategoryResponse, CreateBookCategory},
    AppState,
};

use super::{PathParams, ValidatedJson};

/// List all book-category links
#[utoipa::path(
    get,
    path = "/book_categories",
    tag = "book_categories",
    responses(
        (status = 200, description = "Link list", body = Vec<BookCategoryResponse>)
    )
)]
pub async fn list_book_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BookCategoryResponse>>> {
    Ok(Json(state.services.book_categories.find_all().await?))
}

/// Get a single link
#[utoipa::path(
    get,
    path = "/book_categories/{book_id}/{category_id}",
    tag = "book_categories",
    params(
        ("book_id" = i32, Path, description = "Book ID"),
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Link details", body = BookCategoryResponse),
        (status = 404, description = "Link not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_category(
    State(state): State<AppState>,
    PathParams((book_id, category_id)): PathParams<(i32, i32)>,
) -> AppResult<Json<BookCategoryResponse>> {
    let key = BookCategoryId { book_id, category_id };
    Ok(Json(state.services.book_categories.find_by_id(key).await?))
}

/// File a book under a category
#[utoipa::path(
    post,
    path = "/book_categories",
    tag = "book_categories",
    request_body = CreateBookCategory,
    responses(
        (status = 201, description = "Link created", body = BookCategoryResponse),
        (status = 400, description = "Invalid link data", body = crate::error::ErrorResponse),
        (status = 404, description = "Book or category not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Link already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book_category(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateBookCategory>,
) -> AppResult<(StatusCode, Json<BookCategoryResponse>)> {
    let link = state.services.book_categories.create(&data).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// Remove a link
#[utoipa::path(
    delete,
    path = "/book_categories/{book_id}/{category_id}",
    tag = "book_categories",
    params(
        ("book_id" = i32, Path, description = "Book ID"),
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Link removed")
    )
)]
pub async fn delete_book_category(
    State(state): State<AppState>,
    PathParams((book_id, category_id)): PathParams<(i32, i32)>,
) -> AppResult<StatusCode> {
    let key = BookCategoryId { book_id, category_id };
    state.services.book_categories.delete(key).await?;
    Ok(StatusCode::NO_CONTENT)
}
