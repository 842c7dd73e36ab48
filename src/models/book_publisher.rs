//! Book-Publisher junction model (N:M relationship)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    association::CompositeKey,
    book::{Book, BookSummary},
    publisher::{Publisher, PublisherSummary},
    validation::{required, FieldOrder},
};
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct BookPublisherId {
    pub book_id: i32,
    pub publisher_id: i32,
}

impl CompositeKey for BookPublisherId {
    const NAME: &'static str = "BookPublisher";

    fn components(&self) -> Vec<(&'static str, i32)> {
        vec![("bookId", self.book_id), ("publisherId", self.publisher_id)]
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct BookPublisherRow {
    pub book_id: i32,
    pub book_name: String,
    pub publisher_id: i32,
    pub publisher_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookPublisherResponse {
    pub book: BookSummary,
    pub publisher: PublisherSummary,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookPublisher {
    #[validate(required(message = "bookId is required"))]
    pub book_id: Option<i32>,
    #[validate(required(message = "publisherId is required"))]
    pub publisher_id: Option<i32>,
}

impl FieldOrder for CreateBookPublisher {
    const FIELDS: &'static [&'static str] = &["book_id", "publisher_id"];
}

impl CreateBookPublisher {
    /// Requested `(bookId, publisherId)`
    pub fn ids(&self) -> AppResult<(i32, i32)> {
        Ok((
            required(self.book_id, "bookId")?,
            required(self.publisher_id, "publisherId")?,
        ))
    }
}

impl BookPublisherId {
    pub fn of(book: &Book, publisher: &Publisher) -> Self {
        Self {
            book_id: book.id,
            publisher_id: publisher.id,
        }
    }
}

impl BookPublisherResponse {
    pub fn from_entities(book: &Book, publisher: &Publisher) -> Self {
        Self {
            book: book.into(),
            publisher: publisher.into(),
        }
    }
}

impl From<BookPublisherRow> for BookPublisherResponse {
    fn from(row: BookPublisherRow) -> Self {
        Self {
            book: BookSummary {
                id: row.book_id,
                name: row.book_name,
            },
            publisher: PublisherSummary {
                id: row.publisher_id,
                name: row.publisher_name,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_report_missing_book_first() {
        let payload: CreateBookPublisher = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.ids().unwrap_err().to_string(), "bookId is required");

        let payload: CreateBookPublisher =
            serde_json::from_str(r#"{"bookId": 1, "publisherId": 9}"#).unwrap();
        assert_eq!(payload.ids().unwrap(), (1, 9));
    }

    #[test]
    fn test_not_found_message() {
        let key = BookPublisherId {
            book_id: 1,
            publisher_id: 9,
        };
        assert_eq!(
            key.not_found().to_string(),
            "BookPublisher with bookId=1 and publisherId=9 not found"
        );
    }
}
