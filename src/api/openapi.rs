//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    authors, book_author_editors, book_categories, book_publishers, books, categories, editors,
    health, publishers, translators,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Catalog API",
        version = "1.0.0",
        description = "Library catalog REST API: books, their authors, editors, translators, publishers and categories"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        authors::list_books_by_author,
        authors::list_editors_by_author,
        // Editors
        editors::list_editors,
        editors::get_editor,
        editors::create_editor,
        editors::update_editor,
        editors::delete_editor,
        editors::list_books_by_editor,
        editors::list_authors_by_editor,
        // Translators
        translators::list_translators,
        translators::get_translator,
        translators::create_translator,
        translators::update_translator,
        translators::delete_translator,
        translators::list_books_by_translator,
        // Publishers
        publishers::list_publishers,
        publishers::get_publisher,
        publishers::create_publisher,
        publishers::update_publisher,
        publishers::delete_publisher,
        publishers::list_books_by_publisher,
        // Categories
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        categories::list_books_by_category,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::list_authors_by_book,
        books::list_editors_by_book,
        books::list_categories_by_book,
        books::list_publishers_by_book,
        // Links
        book_author_editors::list_book_author_editors,
        book_author_editors::get_book_author_editor,
        book_author_editors::create_book_author_editor,
        book_author_editors::delete_book_author_editor,
        book_categories::list_book_categories,
        book_categories::get_book_category,
        book_categories::create_book_category,
        book_categories::delete_book_category,
        book_publishers::list_book_publishers,
        book_publishers::get_book_publisher,
        book_publishers::create_book_publisher,
        book_publishers::delete_book_publisher,
    ),
    components(
        schemas(
            // Authors
            crate::models::author::AuthorResponse,
            crate::models::author::AuthorSummary,
            crate::models::author::CreateAuthor,
            crate::models::author::UpdateAuthor,
            // Editors
            crate::models::editor::EditorResponse,
            crate::models::editor::EditorSummary,
            crate::models::editor::CreateEditor,
            crate::models::editor::UpdateEditor,
            // Translators
            crate::models::translator::TranslatorSummary,
            crate::models::translator::CreateTranslator,
            crate::models::translator::UpdateTranslator,
            // Publishers
            crate::models::publisher::PublisherResponse,
            crate::models::publisher::PublisherSummary,
            crate::models::publisher::CreatePublisher,
            crate::models::publisher::UpdatePublisher,
            // Categories
            crate::models::category::CategorySummary,
            crate::models::category::CategoryRequest,
            // Books
            crate::models::book::BookResponse,
            crate::models::book::BookSummary,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            // Links
            crate::models::book_author_editor::BookAuthorEditorResponse,
            crate::models::book_author_editor::CreateBookAuthorEditor,
            crate::models::book_category::BookCategoryResponse,
            crate::models::book_category::CreateBookCategory,
            crate::models::book_publisher::BookPublisherResponse,
            crate::models::book_publisher::CreateBookPublisher,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "authors", description = "Author management"),
        (name = "editors", description = "Editor management"),
        (name = "translators", description = "Translator management"),
        (name = "publishers", description = "Publisher management"),
        (name = "categories", description = "Category management"),
        (name = "books", description = "Book management"),
        (name = "book_author_editors", description = "Book, author and editor links"),
        (name = "book_categories", description = "Book and category links"),
        (name = "book_publishers", description = "Book and publisher links")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_link_routes() {
        let doc = ApiDoc::openapi();
        let paths = doc.paths.paths;
        assert!(paths.contains_key("/books/{id}"));
        assert!(paths.contains_key("/book_author_editors/{book_id}/{author_id}/{editor_id}"));
        assert!(paths.contains_key("/translators/books/{id}"));
    }

    #[test]
    fn test_error_responses_reference_error_schema() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(doc["components"]["schemas"]["ErrorResponse"].is_object());

        let not_found = &doc["paths"]["/authors/{id}"]["get"]["responses"]["404"];
        assert_eq!(
            not_found["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/ErrorResponse"
        );
    }
}
