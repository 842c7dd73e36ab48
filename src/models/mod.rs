//! Data models for the book catalog

pub mod association;
pub mod author;
pub mod book;
pub mod book_author_editor;
pub mod book_category;
pub mod book_publisher;
pub mod category;
pub mod editor;
pub mod publisher;
pub mod translator;
pub mod validation;

// Re-export commonly used types
pub use association::CompositeKey;
pub use author::{Author, AuthorResponse, AuthorSummary};
pub use book::{Book, BookResponse, BookSummary};
pub use book_author_editor::{BookAuthorEditorId, BookAuthorEditorResponse};
pub use book_category::{BookCategoryId, BookCategoryResponse};
pub use book_publisher::{BookPublisherId, BookPublisherResponse};
pub use category::{Category, CategorySummary};
pub use editor::{Editor, EditorResponse, EditorSummary};
pub use publisher::{Publisher, PublisherResponse, PublisherSummary};
pub use translator::{Translator, TranslatorResponse, TranslatorSummary};
