//! Publisher endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        publisher::{CreatePublisher, PublisherResponse, UpdatePublisher},
        BookSummary,
    },
    AppState,
};

use super::{PathParams, ValidatedJson};

/// List all publishers
#[utoipa::path(
    get,
    path = "/publishers",
    tag = "publishers",
    responses(
        (status = 200, description = "Publisher list", body = Vec<PublisherResponse>)
    )
)]
pub async fn list_publishers(State(state): State<AppState>) -> AppResult<Json<Vec<PublisherResponse>>> {
    let publishers = state.services.publishers.find_all().await?;
    Ok(Json(publishers))
}

/// List the books released by a publisher
#[utoipa::path(
    get,
    path = "/publishers/books/{id}",
    tag = "publishers",
    params(("id" = i32, Path, description = "Publisher ID")),
    responses(
        (status = 200, description = "Books by publisher", body = Vec<BookSummary>)
    )
)]
pub async fn list_books_by_publisher(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<Vec<BookSummary>>> {
    let books = state.services.publishers.find_all_books_by_publisher_id(id).await?;
    Ok(Json(books))
}

/// Get publisher by ID
#[utoipa::path(
    get,
    path = "/publishers/{id}",
    tag = "publishers",
    params(("id" = i32, Path, description = "Publisher ID")),
    responses(
        (status = 200, description = "Publisher details", body = PublisherResponse),
        (status = 404, description = "Publisher not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_publisher(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<PublisherResponse>> {
    let publisher = state.services.publishers.find_by_id(id).await?;
    Ok(Json(publisher))
}

/// Create a publisher
#[utoipa::path(
    post,
    path = "/publishers",
    tag = "publishers",
    request_body = CreatePublisher,
    responses(
        (status = 201, description = "Publisher created", body = PublisherResponse),
        (status = 400, description = "Invalid publisher data", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_publisher(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreatePublisher>,
) -> AppResult<(StatusCode, Json<PublisherResponse>)> {
    let publisher = state.services.publishers.create(&data).await?;
    Ok((StatusCode::CREATED, Json(publisher)))
}

/// Update a publisher
#[utoipa::path(
    put,
    path = "/publishers/{id}",
    tag = "publishers",
    params(("id" = i32, Path, description = "Publisher ID")),
    request_body = UpdatePublisher,
    responses(
        (status = 200, description = "Publisher updated", body = PublisherResponse),
        (status = 400, description = "Invalid publisher data", body = crate::error::ErrorResponse),
        (status = 404, description = "Publisher not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_publisher(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
    ValidatedJson(data): ValidatedJson<UpdatePublisher>,
) -> AppResult<Json<PublisherResponse>> {
    let publisher = state.services.publishers.update(id, data).await?;
    Ok(Json(publisher))
}

/// Delete a publisher
#[utoipa::path(
    delete,
    path = "/publishers/{id}",
    tag = "publishers",
    params(("id" = i32, Path, description = "Publisher ID")),
    responses(
        (status = 204, description = "Publisher deleted")
    )
)]
pub async fn delete_publisher(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<StatusCode> {
    state.services.publishers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
