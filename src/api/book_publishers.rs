//! Book-Publisher link endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::book_publisher::{BookPublisherId, BookPublisherResponse, CreateBookPublisher},
    AppState,
};

use super::{PathParams, ValidatedJson};

/// List all book-publisher links
#[utoipa::path(
    get,
    path = "/book_publishers",
    tag = "book_publishers",
    responses(
        (status = 200, description = "Link list", body = Vec<BookPublisherResponse>)
    )
)]
pub async fn list_book_publishers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BookPublisherResponse>>> {
    Ok(Json(state.services.book_publishers.find_all().await?))
}

#[utoipa::path(
    get,
    path = "/book_publishers/{book_id}/{publisher_id}",
    tag = "book_publishers",
    params(
        ("book_id" = i32, Path, description = "Book ID"),
        ("publisher_id" = i32, Path, description = "Publisher ID")
    ),
    responses(
        (status = 200, description = "Link details", body = BookPublisherResponse),
        (status = 404, description = "Link not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book_publisher(
    State(state): State<AppState>,
    PathParams((book_id, publisher_id)): PathParams<(i32, i32)>,
) -> AppResult<Json<BookPublisherResponse>> {
    let key = BookPublisherId { book_id, publisher_id };
    Ok(Json(state.services.book_publishers.find_by_id(key).await?))
}

#[utoipa::path(
    post,
    path = "/book_publishers",
    tag = "book_publishers",
    request_body = CreateBookPublisher,
    responses(
        (status = 201, description = "Link created", body = BookPublisherResponse),
        (status = 400, description = "Invalid link data", body = crate::error::ErrorResponse),
        (status = 404, description = "Book or publisher not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Link already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book_publisher(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateBookPublisher>,
) -> AppResult<(StatusCode, Json<BookPublisherResponse>)> {
    let link = state.services.book_publishers.create(&data).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

#[utoipa::path(
    delete,
    path = "/book_publishers/{book_id}/{publisher_id}",
    tag = "book_publishers",
    params(
        ("book_id" = i32, Path, description = "Book ID"),
        ("publisher_id" = i32, Path, description = "Publisher ID")
    ),
    responses(
        (status = 204, description = "Link removed")
    )
)]
pub async fn delete_book_publisher(
    State(state): State<AppState>,
    PathParams((book_id, publisher_id)): PathParams<(i32, i32)>,
) -> AppResult<StatusCode> {
    let key = BookPublisherId { book_id, publisher_id };
    state.services.book_publishers.delete(key).await?;
    Ok(StatusCode::NO_CONTENT)
}
