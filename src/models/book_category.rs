//! Book-Category junction model (N:M relationship)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    association::CompositeKey,
    book::{Book, BookSummary},
    category::{Category, CategorySummary},
    validation::{required, FieldOrder},
};
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct BookCategoryId {
    pub book_id: i32,
    pub category_id: i32,
}

impl CompositeKey for BookCategoryId {
    const NAME: &'static str = "BookCategory";

    fn components(&self) -> Vec<(&'static str, i32)> {
        vec![("bookId", self.book_id), ("categoryId", self.category_id)]
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct BookCategoryRow {
    pub book_id: i32,
    pub book_name: String,
    pub category_id: i32,
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookCategoryResponse {
    pub book: BookSummary,
    pub category: CategorySummary,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookCategory {
    #[validate(required(message = "bookId is required"))]
    pub book_id: Option<i32>,
    #[validate(required(message = "categoryId is required"))]
    pub category_id: Option<i32>,
}

impl FieldOrder for CreateBookCategory {
    const FIELDS: &'static [&'static str] = &["book_id", "category_id"];
}

impl CreateBookCategory {
    /// Requested `(bookId, categoryId)`
    pub fn ids(&self) -> AppResult<(i32, i32)> {
        Ok((
            required(self.book_id, "bookId")?,
            required(self.category_id, "categoryId")?,
        ))
    }
}

impl BookCategoryId {
    pub fn of(book: &Book, category: &Category) -> Self {
        Self {
            book_id: book.id,
            category_id: category.id,
        }
    }
}

impl BookCategoryResponse {
    pub fn from_entities(book: &Book, category: &Category) -> Self {
        Self {
            book: book.into(),
            category: category.into(),
        }
    }
}

impl From<BookCategoryRow> for BookCategoryResponse {
    fn from(row: BookCategoryRow) -> Self {
        Self {
            book: BookSummary {
                id: row.book_id,
                name: row.book_name,
            },
            category: CategorySummary {
                id: row.category_id,
                name: row.category_name,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_two_part_key() {
        let key = BookCategoryId {
            book_id: 10,
            category_id: 20,
        };
        assert_eq!(key.describe(), "bookId=10 and categoryId=20");
        assert_eq!(
            key.not_found().to_string(),
            "BookCategory with bookId=10 and categoryId=20 not found"
        );
    }

    #[test]
    fn test_ids_report_missing_category() {
        let payload: CreateBookCategory = serde_json::from_str(r#"{"bookId": 10}"#).unwrap();
        let err = payload.ids().unwrap_err();
        assert_eq!(err.to_string(), "categoryId is required");
    }
}
