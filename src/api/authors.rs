//! Author endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        author::{AuthorResponse, CreateAuthor, UpdateAuthor},
        BookSummary, EditorSummary,
    },
    AppState,
};

use super::{PathParams, ValidatedJson};

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Author list", body = Vec<AuthorResponse>)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> AppResult<Json<Vec<AuthorResponse>>> {
    let authors = state.services.authors.find_all().await?;
    Ok(Json(authors))
}

/// List the books an author worked on
#[utoipa::path(
    get,
    path = "/authors/books/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Books by author", body = Vec<BookSummary>)
    )
)]
pub async fn list_books_by_author(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<Vec<BookSummary>>> {
    let books = state.services.authors.find_all_books_by_author_id(id).await?;
    Ok(Json(books))
}

/// List the editors an author worked with
#[utoipa::path(
    get,
    path = "/authors/editors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Editors by author", body = Vec<EditorSummary>)
    )
)]
pub async fn list_editors_by_author(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<Vec<EditorSummary>>> {
    let editors = state.services.authors.find_all_editors_by_author_id(id).await?;
    Ok(Json(editors))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = AuthorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<AuthorResponse>> {
    let author = state.services.authors.find_by_id(id).await?;
    Ok(Json(author))
}

/// Create an author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = AuthorResponse),
        (status = 400, description = "Invalid author data", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateAuthor>,
) -> AppResult<(StatusCode, Json<AuthorResponse>)> {
    let author = state.services.authors.create(&data).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// Update an author (absent fields are kept)
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = AuthorResponse),
        (status = 400, description = "Invalid author data", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
    ValidatedJson(data): ValidatedJson<UpdateAuthor>,
) -> AppResult<Json<AuthorResponse>> {
    let author = state.services.authors.update(id, data).await?;
    Ok(Json(author))
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted")
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<StatusCode> {
    state.services.authors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
