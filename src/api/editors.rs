//! Editor endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        editor::{EditorResponse, CreateEditor, UpdateEditor},
        BookSummary, AuthorSummary,
    },
    AppState,
};

use super::{PathParams, ValidatedJson};

/// List all editors
#[utoipa::path(
    get,
    path = "/editors",
    tag = "editors",
    responses(
        (status = 200, description = "Editor list", body = Vec<EditorResponse>)
    )
)]
pub async fn list_editors(State(state): State<AppState>) -> AppResult<Json<Vec<EditorResponse>>> {
    let editors = state.services.editors.find_all().await?;
    Ok(Json(editors))
}

/// List the books an editor worked on
#[utoipa::path(
    get,
    path = "/editors/books/{id}",
    tag = "editors",
    params(("id" = i32, Path, description = "Editor ID")),
    responses(
        (status = 200, description = "Books by editor", body = Vec<BookSummary>)
    )
)]
pub async fn list_books_by_editor(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<Vec<BookSummary>>> {
    let books = state.services.editors.find_all_books_by_editor_id(id).await?;
    Ok(Json(books))
}

/// List the authors an editor worked with
#[utoipa::path(
    get,
    path = "/editors/authors/{id}",
    tag = "editors",
    params(("id" = i32, Path, description = "Editor ID")),
    responses(
        (status = 200, description = "Authors by editor", body = Vec<AuthorSummary>)
    )
)]
pub async fn list_authors_by_editor(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<Vec<AuthorSummary>>> {
    let authors = state.services.editors.find_all_authors_by_editor_id(id).await?;
    Ok(Json(authors))
}

/// Get editor by ID
#[utoipa::path(
    get,
    path = "/editors/{id}",
    tag = "editors",
    params(("id" = i32, Path, description = "Editor ID")),
    responses(
        (status = 200, description = "Editor details", body = EditorResponse),
        (status = 404, description = "Editor not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_editor(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<EditorResponse>> {
    let editor = state.services.editors.find_by_id(id).await?;
    Ok(Json(editor))
}

/// Create an editor
#[utoipa::path(
    post,
    path = "/editors",
    tag = "editors",
    request_body = CreateEditor,
    responses(
        (status = 201, description = "Editor created", body = EditorResponse),
        (status = 400, description = "Invalid editor data", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_editor(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateEditor>,
) -> AppResult<(StatusCode, Json<EditorResponse>)> {
    let editor = state.services.editors.create(&data).await?;
    Ok((StatusCode::CREATED, Json(editor)))
}

/// Update an editor (absent fields are kept)
#[utoipa::path(
    put,
    path = "/editors/{id}",
    tag = "editors",
    params(("id" = i32, Path, description = "Editor ID")),
    request_body = UpdateEditor,
    responses(
        (status = 200, description = "Editor updated", body = EditorResponse),
        (status = 400, description = "Invalid editor data", body = crate::error::ErrorResponse),
        (status = 404, description = "Editor not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_editor(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
    ValidatedJson(data): ValidatedJson<UpdateEditor>,
) -> AppResult<Json<EditorResponse>> {
    let editor = state.services.editors.update(id, data).await?;
    Ok(Json(editor))
}

/// Delete an editor
#[utoipa::path(
    delete,
    path = "/editors/{id}",
    tag = "editors",
    params(("id" = i32, Path, description = "Editor ID")),
    responses(
        (status = 204, description = "Editor deleted")
    )
)]
pub async fn delete_editor(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<StatusCode> {
    state.services.editors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
