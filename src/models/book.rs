//! Book model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    translator::{Translator, TranslatorSummary},
    validation::{not_blank, not_in_future, FieldOrder},
};

/// Book row, joined with its translator's name
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub isbn: String,
    pub no_pages: i32,
    pub price: i32,
    pub language: String,
    pub publish_date: NaiveDate,
    pub translator_id: Option<i32>,
    pub translator_first_name: Option<String>,
    pub translator_last_name: Option<String>,
}

/// Book embedded in other resources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookSummary {
    pub id: i32,
    pub name: String,
}

/// Book details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: i32,
    pub name: String,
    pub isbn: String,
    pub no_pages: i32,
    pub price: i32,
    pub language: String,
    pub publish_date: NaiveDate,
    pub translator: Option<TranslatorSummary>,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(
        required(message = "name is required and cannot be blank"),
        custom(function = "not_blank", message = "name is required and cannot be blank")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "isbn is required and cannot be blank"),
        custom(function = "not_blank", message = "isbn is required and cannot be blank")
    )]
    pub isbn: Option<String>,
    #[validate(
        required(message = "noPages is required"),
        range(min = 0, message = "noPages cannot be less than 0")
    )]
    pub no_pages: Option<i32>,
    #[validate(
        required(message = "price is required"),
        range(min = 0, message = "price cannot be less than 0")
    )]
    pub price: Option<i32>,
    #[validate(
        required(message = "language is required and cannot be blank"),
        custom(function = "not_blank", message = "language is required and cannot be blank")
    )]
    pub language: Option<String>,
    /// Format: YYYY-MM-DD
    #[validate(
        required(message = "publishDate is required"),
        custom(function = "not_in_future", message = "publishDate must be in the past or present")
    )]
    pub publish_date: Option<NaiveDate>,
    /// Optional translator reference
    pub translator_id: Option<i32>,
}

impl FieldOrder for CreateBook {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "isbn",
        "no_pages",
        "price",
        "language",
        "publish_date",
    ];
}

/// Update book request; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    #[validate(custom(function = "not_blank", message = "name cannot be blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "not_blank", message = "isbn cannot be blank"))]
    pub isbn: Option<String>,
    #[validate(range(min = 0, message = "noPages cannot be less than 0"))]
    pub no_pages: Option<i32>,
    #[validate(range(min = 0, message = "price cannot be less than 0"))]
    pub price: Option<i32>,
    #[validate(custom(function = "not_blank", message = "language cannot be blank"))]
    pub language: Option<String>,
    #[validate(custom(function = "not_in_future", message = "publishDate must be in the past or present"))]
    pub publish_date: Option<NaiveDate>,
    /// Reassign the translator
    pub translator_id: Option<i32>,
}

impl FieldOrder for UpdateBook {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "isbn",
        "no_pages",
        "price",
        "language",
        "publish_date",
    ];
}

impl Book {
    /// Overwrite the plain columns present in the patch.
    ///
    /// `translator_id` is resolved by the service and applied with
    /// [`Book::set_translator`].
    pub fn apply_update(&mut self, patch: UpdateBook) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(isbn) = patch.isbn {
            self.isbn = isbn;
        }
        if let Some(no_pages) = patch.no_pages {
            self.no_pages = no_pages;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(publish_date) = patch.publish_date {
            self.publish_date = publish_date;
        }
    }

    pub fn set_translator(&mut self, translator: &Translator) {
        self.translator_id = Some(translator.id);
        self.translator_first_name = Some(translator.first_name.clone());
        self.translator_last_name = Some(translator.last_name.clone());
    }

    pub fn translator(&self) -> Option<TranslatorSummary> {
        match (self.translator_id, &self.translator_first_name, &self.translator_last_name) {
            (Some(id), Some(first_name), Some(last_name)) => Some(TranslatorSummary {
                id,
                first_name: first_name.clone(),
                last_name: last_name.clone(),
            }),
            _ => None,
        }
    }
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            name: book.name.clone(),
        }
    }
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        let translator = book.translator();
        Self {
            id: book.id,
            name: book.name,
            isbn: book.isbn,
            no_pages: book.no_pages,
            price: book.price,
            language: book.language,
            publish_date: book.publish_date,
            translator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validation::validate_payload;
    use serde_json::json;

    fn nineteen_eighty_four() -> Book {
        Book {
            id: 1,
            name: "1984".into(),
            isbn: "X1".into(),
            no_pages: 300,
            price: 10,
            language: "en".into(),
            publish_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            translator_id: None,
            translator_first_name: None,
            translator_last_name: None,
        }
    }

    #[test]
    fn test_response_without_translator() {
        let json = serde_json::to_value(BookResponse::from(nineteen_eighty_four())).unwrap();
        assert_eq!(
            json,
            json!({
                "id": 1,
                "name": "1984",
                "isbn": "X1",
                "noPages": 300,
                "price": 10,
                "language": "en",
                "publishDate": "2020-01-01",
                "translator": null
            })
        );
    }

    #[test]
    fn test_set_translator_embeds_summary() {
        let mut book = nineteen_eighty_four();
        book.set_translator(&Translator {
            id: 4,
            first_name: "Amélie".into(),
            last_name: "Audiberti".into(),
        });
        let response = BookResponse::from(book);
        assert_eq!(response.translator.map(|t| t.id), Some(4));
    }

    #[test]
    fn test_partial_update() {
        let mut book = nineteen_eighty_four();
        book.apply_update(UpdateBook {
            price: Some(12),
            language: Some("fr".into()),
            ..Default::default()
        });
        assert_eq!(book.price, 12);
        assert_eq!(book.language, "fr");
        assert_eq!(book.name, "1984");
        assert_eq!(book.no_pages, 300);
        assert_eq!(BookSummary::from(&book), BookSummary { id: 1, name: "1984".into() });
    }

    #[test]
    fn test_create_validation_order() {
        let payload: CreateBook = serde_json::from_value(json!({
            "name": "1984",
            "isbn": "X1",
            "noPages": -1,
            "price": -5,
            "language": "en",
            "publishDate": "2020-01-01"
        }))
        .unwrap();
        assert_eq!(validate_payload(&payload).unwrap_err(), "noPages cannot be less than 0");
    }

    #[test]
    fn test_valid_create() {
        let payload: CreateBook = serde_json::from_value(json!({
            "name": "1984",
            "isbn": "X1",
            "noPages": 300,
            "price": 10,
            "language": "en",
            "publishDate": "2020-01-01"
        }))
        .unwrap();
        assert!(validate_payload(&payload).is_ok());
        assert_eq!(payload.translator_id, None);
    }

    #[test]
    fn test_bad_date_is_a_parse_error() {
        let result: Result<CreateBook, _> = serde_json::from_value(json!({
            "publishDate": "01/01/2020"
        }));
        assert!(result.is_err());
    }
}
