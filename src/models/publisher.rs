//! Publisher model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::validation::{not_blank, not_in_future, FieldOrder};

/// Publisher row
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Publisher {
    pub id: i32,
    pub name: String,
    pub founded_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublisherSummary {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublisherResponse {
    pub id: i32,
    pub name: String,
    pub founded_date: NaiveDate,
}

/// Create publisher request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePublisher {
    #[validate(
        required(message = "name is required and cannot be blank"),
        custom(function = "not_blank", message = "name is required and cannot be blank")
    )]
    pub name: Option<String>,
    /// Format: YYYY-MM-DD
    #[validate(
        required(message = "foundedDate is required"),
        custom(function = "not_in_future", message = "foundedDate must be in the past or present")
    )]
    pub founded_date: Option<NaiveDate>,
}

impl FieldOrder for CreatePublisher {
    const FIELDS: &'static [&'static str] = &["name", "founded_date"];
}

/// Update publisher request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePublisher {
    #[validate(custom(function = "not_blank", message = "name cannot be blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "not_in_future", message = "foundedDate must be in the past or present"))]
    pub founded_date: Option<NaiveDate>,
}

impl FieldOrder for UpdatePublisher {
    const FIELDS: &'static [&'static str] = &["name", "founded_date"];
}

impl Publisher {
    pub fn apply_update(&mut self, patch: UpdatePublisher) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(founded_date) = patch.founded_date {
            self.founded_date = founded_date;
        }
    }
}

impl From<&Publisher> for PublisherSummary {
    fn from(publisher: &Publisher) -> Self {
        Self {
            id: publisher.id,
            name: publisher.name.clone(),
        }
    }
}

impl From<Publisher> for PublisherResponse {
    fn from(publisher: Publisher) -> Self {
        Self {
            id: publisher.id,
            name: publisher.name,
            founded_date: publisher.founded_date,
        }
    }
}
