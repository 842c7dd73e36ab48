//! API handlers for the catalog REST endpoints

pub mod authors;
pub mod book_author_editors;
pub mod book_categories;
pub mod book_publishers;
pub mod books;
pub mod categories;
pub mod editors;
pub mod health;
pub mod openapi;
pub mod publishers;
pub mod translators;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::validation::{validate_payload, FieldOrder},
    AppState,
};

/// JSON body extractor that validates the payload.
///
/// Unparseable bodies become [`AppError::MalformedRequest`]; constraint
/// failures become [`AppError::Validation`] carrying the first field's message.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + FieldOrder,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            AppError::MalformedRequest
        })?;

        validate_payload(&payload).map_err(AppError::Validation)?;
        Ok(ValidatedJson(payload))
    }
}

/// Path extractor reporting bad ids with the JSON error envelope
pub struct PathParams<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected path: {}", rejection.body_text());
                AppError::BadRequest("Invalid path parameter".to_string())
            })?;
        Ok(PathParams(value))
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let catalog = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authors
        .route("/authors", get(authors::list_authors).post(authors::create_author))
        .route(
            "/authors/:id",
            get(authors::get_author)
                .put(authors::update_author)
                .delete(authors::delete_author),
        )
        .route("/authors/books/:id", get(authors::list_books_by_author))
        .route("/authors/editors/:id", get(authors::list_editors_by_author))
        // Editors
        .route("/editors", get(editors::list_editors).post(editors::create_editor))
        .route(
            "/editors/:id",
            get(editors::get_editor)
                .put(editors::update_editor)
                .delete(editors::delete_editor),
        )
        .route("/editors/books/:id", get(editors::list_books_by_editor))
        .route("/editors/authors/:id", get(editors::list_authors_by_editor))
        // Translators
        .route(
            "/translators",
            get(translators::list_translators).post(translators::create_translator),
        )
        .route(
            "/translators/:id",
            get(translators::get_translator)
                .put(translators::update_translator)
                .delete(translators::delete_translator),
        )
        .route("/translators/books/:id", get(translators::list_books_by_translator))
        // Publishers
        .route(
            "/publishers",
            get(publishers::list_publishers).post(publishers::create_publisher),
        )
        .route(
            "/publishers/:id",
            get(publishers::get_publisher)
                .put(publishers::update_publisher)
                .delete(publishers::delete_publisher),
        )
        .route("/publishers/books/:id", get(publishers::list_books_by_publisher))
        // Categories
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/:id",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route("/categories/books/:id", get(categories::list_books_by_category))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book).put(books::update_book).delete(books::delete_book),
        )
        .route("/books/authors/:id", get(books::list_authors_by_book))
        .route("/books/editors/:id", get(books::list_editors_by_book))
        .route("/books/categories/:id", get(books::list_categories_by_book))
        .route("/books/publishers/:id", get(books::list_publishers_by_book))
        // Associations
        .route(
            "/book_author_editors",
            get(book_author_editors::list_book_author_editors)
                .post(book_author_editors::create_book_author_editor),
        )
        .route(
            "/book_author_editors/:book_id/:author_id/:editor_id",
            get(book_author_editors::get_book_author_editor)
                .delete(book_author_editors::delete_book_author_editor),
        )
        .route(
            "/book_categories",
            get(book_categories::list_book_categories).post(book_categories::create_book_category),
        )
        .route(
            "/book_categories/:book_id/:category_id",
            get(book_categories::get_book_category).delete(book_categories::delete_book_category),
        )
        .route(
            "/book_publishers",
            get(book_publishers::list_book_publishers).post(book_publishers::create_book_publisher),
        )
        .route(
            "/book_publishers/:book_id/:publisher_id",
            get(book_publishers::get_book_publisher).delete(book_publishers::delete_book_publisher),
        )
        .with_state(state);

    Router::new()
        .merge(catalog)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
