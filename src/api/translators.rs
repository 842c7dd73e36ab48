//! Translator endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        translator::{CreateTranslator, TranslatorSummary, UpdateTranslator},
        BookSummary,
    },
    AppState,
};

use super::{PathParams, ValidatedJson};

/// List all translators
#[utoipa::path(
    get,
    path = "/translators",
    tag = "translators",
    responses(
        (status = 200, description = "Translator list", body = Vec<TranslatorSummary>)
    )
)]
pub async fn list_translators(State(state): State<AppState>) -> AppResult<Json<Vec<TranslatorSummary>>> {
    Ok(Json(state.services.translators.find_all().await?))
}

/// List the books of a translator
#[utoipa::path(
    get,
    path = "/translators/books/{id}",
    tag = "translators",
    params(("id" = i32, Path, description = "Translator ID")),
    responses(
        (status = 200, description = "Books by translator", body = Vec<BookSummary>),
        (status = 404, description = "Translator not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books_by_translator(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<Vec<BookSummary>>> {
    let books = state.services.translators.find_all_books_by_translator_id(id).await?;
    Ok(Json(books))
}

/// Get translator by ID
#[utoipa::path(
    get,
    path = "/translators/{id}",
    tag = "translators",
    params(("id" = i32, Path, description = "Translator ID")),
    responses(
        (status = 200, description = "Translator details", body = TranslatorSummary),
        (status = 404, description = "Translator not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_translator(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<TranslatorSummary>> {
    Ok(Json(state.services.translators.find_by_id(id).await?))
}

/// Create a translator
#[utoipa::path(
    post,
    path = "/translators",
    tag = "translators",
    request_body = CreateTranslator,
    responses(
        (status = 201, description = "Translator created", body = TranslatorSummary),
        (status = 400, description = "Invalid translator data", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_translator(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateTranslator>,
) -> AppResult<(StatusCode, Json<TranslatorSummary>)> {
    let translator = state.services.translators.create(&data).await?;
    Ok((StatusCode::CREATED, Json(translator)))
}

/// Update a translator
#[utoipa::path(
    put,
    path = "/translators/{id}",
    tag = "translators",
    params(("id" = i32, Path, description = "Translator ID")),
    request_body = UpdateTranslator,
    responses(
        (status = 200, description = "Translator updated", body = TranslatorSummary),
        (status = 404, description = "Translator not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_translator(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
    ValidatedJson(data): ValidatedJson<UpdateTranslator>,
) -> AppResult<Json<TranslatorSummary>> {
    Ok(Json(state.services.translators.update(id, data).await?))
}

/// Delete a translator (their books are kept, untranslated)
#[utoipa::path(
    delete,
    path = "/translators/{id}",
    tag = "translators",
    params(("id" = i32, Path, description = "Translator ID")),
    responses(
        (status = 204, description = "Translator deleted")
    )
)]
pub async fn delete_translator(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<StatusCode> {
    state.services.translators.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
