//! Editor model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::validation::{not_blank, not_in_future, FieldOrder};

/// Editor row
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Editor {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub debut_date: NaiveDate,
}

/// Editor embedded in other resources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditorSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Editor details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditorResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub debut_date: NaiveDate,
}

/// Create editor request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEditor {
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

impl FieldOrder for CreateEditor {
    const FIELDS: &'static [&'static str] = &["first_name", "last_name", "debut_date"];
}

/// Update editor request; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEditor {
    #[validate(custom(function = "not_blank", message = "firstName cannot be blank"))]
    pub first_name: Option<String>,
    #[validate(custom(function = "not_blank", message = "lastName cannot be blank"))]
    pub last_name: Option<String>,
    #[validate(custom(function = "not_in_future", message = "debutDate must be in the past or present"))]
    pub debut_date: Option<NaiveDate>,
}

impl FieldOrder for UpdateEditor {
    const FIELDS: &'static [&'static str] = &["first_name", "last_name", "debut_date"];
}

impl Editor {
    pub fn apply_update(&mut self, patch: UpdateEditor) {
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

impl From<&Editor> for EditorSummary {
    fn from(editor: &Editor) -> Self {
        Self {
            id: editor.id,
            first_name: editor.first_name.clone(),
            last_name: editor.last_name.clone(),
        }
    }
}

impl From<Editor> for EditorResponse {
    fn from(editor: Editor) -> Self {
        Self {
            id: editor.id,
            first_name: editor.first_name,
            last_name: editor.last_name,
            debut_date: editor.debut_date,
        }
    }
}
