//! Book-Author-Editor junction model (ternary relationship)
//!
//! A row states that an author, working with an editor, produced a book.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    association::CompositeKey,
    author::{Author, AuthorSummary},
    book::{Book, BookSummary},
    editor::{Editor, EditorSummary},
    validation::{required, FieldOrder},
};
use crate::error::AppResult;

/// Composite primary key of `book_author_editor`
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct BookAuthorEditorId {
    pub book_id: i32,
    pub author_id: i32,
    pub editor_id: i32,
}

impl CompositeKey for BookAuthorEditorId {
    const NAME: &'static str = "BookAuthorEditor";

    fn components(&self) -> Vec<(&'static str, i32)> {
        vec![
            ("bookId", self.book_id),
            ("authorId", self.author_id),
            ("editorId", self.editor_id),
        ]
    }
}

/// Junction row joined with the display names of its three ends
#[derive(Debug, Clone, FromRow)]
pub struct BookAuthorEditorRow {
    pub book_id: i32,
    pub book_name: String,
    pub author_id: i32,
    pub author_first_name: String,
    pub author_last_name: String,
    pub editor_id: i32,
    pub editor_first_name: String,
    pub editor_last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookAuthorEditorResponse {
    pub book: BookSummary,
    pub author: AuthorSummary,
    pub editor: EditorSummary,
}

/// Link request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookAuthorEditor {
    #[validate(required(message = "bookId is required"))]
    pub book_id: Option<i32>,
    #[validate(required(message = "authorId is required"))]
    pub author_id: Option<i32>,
    #[validate(required(message = "editorId is required"))]
    pub editor_id: Option<i32>,
}

impl FieldOrder for CreateBookAuthorEditor {
    const FIELDS: &'static [&'static str] = &["book_id", "author_id", "editor_id"];
}

impl CreateBookAuthorEditor {
    /// Requested `(bookId, authorId, editorId)`
    pub fn ids(&self) -> AppResult<(i32, i32, i32)> {
        Ok((
            required(self.book_id, "bookId")?,
            required(self.author_id, "authorId")?,
            required(self.editor_id, "editorId")?,
        ))
    }
}

impl BookAuthorEditorId {
    /// Key derived from resolved entities rather than raw input
    pub fn of(book: &Book, author: &Author, editor: &Editor) -> Self {
        Self {
            book_id: book.id,
            author_id: author.id,
            editor_id: editor.id,
        }
    }
}

impl BookAuthorEditorResponse {
    pub fn from_entities(book: &Book, author: &Author, editor: &Editor) -> Self {
        Self {
            book: book.into(),
            author: author.into(),
            editor: editor.into(),
        }
    }
}

impl From<BookAuthorEditorRow> for BookAuthorEditorResponse {
    fn from(row: BookAuthorEditorRow) -> Self {
        Self {
            book: BookSummary {
                id: row.book_id,
                name: row.book_name,
            },
            author: AuthorSummary {
                id: row.author_id,
                first_name: row.author_first_name,
                last_name: row.author_last_name,
            },
            editor: EditorSummary {
                id: row.editor_id,
                first_name: row.editor_first_name,
                last_name: row.editor_last_name,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, models::validation::validate_payload};

    #[test]
    fn test_not_found_lists_ids_in_order() {
        let key = BookAuthorEditorId {
            book_id: 1,
            author_id: 2,
            editor_id: 3,
        };
        match key.not_found() {
            AppError::NotFound(msg) => assert_eq!(
                msg,
                "BookAuthorEditor with bookId=1 and authorId=2 and editorId=3 not found"
            ),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_already_exists_is_conflict() {
        let key = BookAuthorEditorId {
            book_id: 4,
            author_id: 5,
            editor_id: 6,
        };
        assert!(matches!(key.already_exists(), AppError::Conflict(_)));
    }

    #[test]
    fn test_row_projection() {
        let row = BookAuthorEditorRow {
            book_id: 1,
            book_name: "1984".into(),
            author_id: 2,
            author_first_name: "John".into(),
            author_last_name: "Doe".into(),
            editor_id: 3,
            editor_first_name: "Jane".into(),
            editor_last_name: "Roe".into(),
        };
        let json = serde_json::to_value(BookAuthorEditorResponse::from(row)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "book": { "id": 1, "name": "1984" },
                "author": { "id": 2, "firstName": "John", "lastName": "Doe" },
                "editor": { "id": 3, "firstName": "Jane", "lastName": "Roe" }
            })
        );
    }

    #[test]
    fn test_missing_editor_id() {
        let payload: CreateBookAuthorEditor =
            serde_json::from_str(r#"{"bookId": 1, "authorId": 2}"#).unwrap();
        assert_eq!(validate_payload(&payload).unwrap_err(), "editorId is required");
    }

    #[test]
    fn test_ids_never_default_a_missing_id() {
        let payload: CreateBookAuthorEditor =
            serde_json::from_str(r#"{"bookId": 1, "editorId": 3}"#).unwrap();
        match payload.ids() {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "authorId is required"),
            other => panic!("unexpected result: {:?}", other),
        }

        let payload: CreateBookAuthorEditor =
            serde_json::from_str(r#"{"bookId": 1, "authorId": 2, "editorId": 3}"#).unwrap();
        assert_eq!(payload.ids().unwrap(), (1, 2, 3));
    }
}
