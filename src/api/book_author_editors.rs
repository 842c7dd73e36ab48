//! Book-Author-Editor link endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::book_author_editor::{
        BookAuthorEditorId, BookAuthorEditorResponse, CreateBookAuthorEditor,
    },
    AppState,
};

use super::{PathParams, ValidatedJson};

/// List all book-author-editor links
#[utoipa::path(
    get,
    path = "/book_author_editors",
    tag = "book_author_editors",
    responses(
        (status = 200, description = "Link list", body = Vec<BookAuthorEditorResponse>)
    )
)]
pub async fn list_book_author_editors(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BookAuthorEditorResponse>>> {
    let links = state.services.book_author_editors.find_all().await?;
    Ok(Json(links))
}

/// Get a single link
#[utoipa::path(
    get,
    path = "/book_author_editors/{book_id}/{author_id}/{editor_id}",
    tag = "book_author_editors",
    params(
        ("book_id" = i32, Path, description = "Book ID"),
        ("author_id" = i32, Path, description = "Author ID"),
        ("editor_id" = i32, Path, description = "Editor ID")
    ),
    responses(
        (status = 200, description = "Link details", body = BookAuthorEditorResponse),
        (status = 404, description = "Link not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_author_editor(
    State(state): State<AppState>,
    PathParams((book_id, author_id, editor_id)): PathParams<(i32, i32, i32)>,
) -> AppResult<Json<BookAuthorEditorResponse>> {
    let key = BookAuthorEditorId {
        book_id,
        author_id,
        editor_id,
    };
    let link = state.services.book_author_editors.find_by_id(key).await?;
    Ok(Json(link))
}

/// Link a book to an author and an editor
#[utoipa::path(
    post,
    path = "/book_author_editors",
    tag = "book_author_editors",
    request_body = CreateBookAuthorEditor,
    responses(
        (status = 201, description = "Link created", body = BookAuthorEditorResponse),
        (status = 400, description = "Invalid link data", body = crate::error::ErrorResponse),
        (status = 404, description = "Book, author or editor not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Link already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book_author_editor(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateBookAuthorEditor>,
) -> AppResult<(StatusCode, Json<BookAuthorEditorResponse>)> {
    let link = state.services.book_author_editors.create(&data).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// Remove a link
#[utoipa::path(
    delete,
    path = "/book_author_editors/{book_id}/{author_id}/{editor_id}",
    tag = "book_author_editors",
    params(
        ("book_id" = i32, Path, description = "Book ID"),
        ("author_id" = i32, Path, description = "Author ID"),
        ("editor_id" = i32, Path, description = "Editor ID")
    ),
    responses(
        (status = 204, description = "Link removed")
    )
)]
pub async fn delete_book_author_editor(
    State(state): State<AppState>,
    PathParams((book_id, author_id, editor_id)): PathParams<(i32, i32, i32)>,
) -> AppResult<StatusCode> {
    let key = BookAuthorEditorId {
        book_id,
        author_id,
        editor_id,
    };
    state.services.book_author_editors.delete(key).await?;
    Ok(StatusCode::NO_CONTENT)
}
