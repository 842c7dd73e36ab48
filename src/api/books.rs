//! Book endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        book::{BookResponse, CreateBook, UpdateBook},
        AuthorSummary, CategorySummary, EditorSummary, PublisherSummary,
    },
    AppState,
};

use super::{PathParams, ValidatedJson};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Book list", body = Vec<BookResponse>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<BookResponse>>> {
    let books = state.services.books.find_all().await?;
    Ok(Json(books))
}

/// List the authors of a book
#[utoipa::path(
    get,
    path = "/books/authors/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Authors of the book", body = Vec<AuthorSummary>)
    )
)]
pub async fn list_authors_by_book(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<Vec<AuthorSummary>>> {
    let authors = state.services.books.find_all_authors_by_book_id(id).await?;
    Ok(Json(authors))
}

/// List the editors of a book
#[utoipa::path(
    get,
    path = "/books/editors/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Editors of the book", body = Vec<EditorSummary>)
    )
)]
pub async fn list_editors_by_book(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<Vec<EditorSummary>>> {
    let editors = state.services.books.find_all_editors_by_book_id(id).await?;
    Ok(Json(editors))
}

/// List the categories of a book
#[utoipa::path(
    get,
    path = "/books/categories/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Categories of the book", body = Vec<CategorySummary>)
    )
)]
pub async fn list_categories_by_book(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<Vec<CategorySummary>>> {
    let categories = state.services.books.find_all_categories_by_book_id(id).await?;
    Ok(Json(categories))
}

/// List the publishers of a book
#[utoipa::path(
    get,
    path = "/books/publishers/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Publishers of the book", body = Vec<PublisherSummary>)
    )
)]
pub async fn list_publishers_by_book(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<Vec<PublisherSummary>>> {
    let publishers = state.services.books.find_all_publishers_by_book_id(id).await?;
    Ok(Json(publishers))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.books.find_by_id(id).await?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Invalid book data", body = crate::error::ErrorResponse),
        (status = 404, description = "Translator not found", body = crate::error::ErrorResponse),
        (status = 409, description = "ISBN already used", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateBook>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let book = state.services.books.create(&data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Update a book (absent fields are kept)
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Invalid book data", body = crate::error::ErrorResponse),
        (status = 404, description = "Book or translator not found", body = crate::error::ErrorResponse),
        (status = 409, description = "ISBN already used", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
    ValidatedJson(data): ValidatedJson<UpdateBook>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.books.update(id, data).await?;
    Ok(Json(book))
}

/// Delete a book and its links
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
