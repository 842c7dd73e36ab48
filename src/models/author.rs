//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::validation::{not_blank, not_in_future, FieldOrder};

/// Author row
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub debut_date: NaiveDate,
}

/// Author embedded in other resources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Author details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub debut_date: NaiveDate,
}

/// Create author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthor {
    #[validate(
        required(message = "firstName is required and cannot be blank"),
        custom(function = "not_blank", message = "firstName is required and cannot be blank")
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = "lastName is required and cannot be blank"),
        custom(function = "not_blank", message = "lastName is required and cannot be blank")
    )]
    pub last_name: Option<String>,
    /// Format: YYYY-MM-DD
    #[validate(
        required(message = "debutDate is required"),
        custom(function = "not_in_future", message = "debutDate must be in the past or present")
    )]
    pub debut_date: Option<NaiveDate>,
}

impl FieldOrder for CreateAuthor {
    const FIELDS: &'static [&'static str] = &["first_name", "last_name", "debut_date"];
}

/// Update author request; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthor {
    #[validate(custom(function = "not_blank", message = "firstName cannot be blank"))]
    pub first_name: Option<String>,
    #[validate(custom(function = "not_blank", message = "lastName cannot be blank"))]
    pub last_name: Option<String>,
    #[validate(custom(function = "not_in_future", message = "debutDate must be in the past or present"))]
    pub debut_date: Option<NaiveDate>,
}

impl FieldOrder for UpdateAuthor {
    const FIELDS: &'static [&'static str] = &["first_name", "last_name", "debut_date"];
}

impl Author {
    pub fn apply_update(&mut self, patch: UpdateAuthor) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(debut_date) = patch.debut_date {
            self.debut_date = debut_date;
        }
    }
}

impl From<&Author> for AuthorSummary {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
        }
    }
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name,
            last_name: author.last_name,
            debut_date: author.debut_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validation::validate_payload;

    fn john_doe() -> Author {
        Author {
            id: 1,
            first_name: "John".into(),
            last_name: "Doe".into(),
            debut_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_apply_update_keeps_absent_fields() {
        let mut author = john_doe();
        author.apply_update(UpdateAuthor {
            last_name: Some("Smith".into()),
            ..Default::default()
        });
        assert_eq!(author.first_name, "John");
        assert_eq!(author.last_name, "Smith");
        assert_eq!(author.debut_date, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
    }

    #[test]
    fn test_summary_drops_debut_date() {
        let json = serde_json::to_value(AuthorSummary::from(&john_doe())).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "firstName": "John", "lastName": "Doe" }));
    }

    #[test]
    fn test_create_reports_first_field() {
        let payload: CreateAuthor = serde_json::from_value(serde_json::json!({
            "lastName": " ",
        }))
        .unwrap();
        assert_eq!(
            validate_payload(&payload).unwrap_err(),
            "firstName is required and cannot be blank"
        );

        let payload: CreateAuthor = serde_json::from_value(serde_json::json!({
            "firstName": "John",
            "lastName": "Doe",
        }))
        .unwrap();
        assert_eq!(validate_payload(&payload).unwrap_err(), "debutDate is required");
    }

    #[test]
    fn test_future_debut_rejected() {
        let payload: CreateAuthor = serde_json::from_value(serde_json::json!({
            "firstName": "John",
            "lastName": "Doe",
            "debutDate": "2999-01-01",
        }))
        .unwrap();
        assert_eq!(
            validate_payload(&payload).unwrap_err(),
            "debutDate must be in the past or present"
        );
    }
}
