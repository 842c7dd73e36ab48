//! Translator model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::validation::{not_blank, FieldOrder};

/// Translator row
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Translator {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Translator embedded in book responses.
///
/// Translators never embed their books, which keeps book responses finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Translator details (same shape as the summary)
pub type TranslatorResponse = TranslatorSummary;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTranslator {
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
}

impl FieldOrder for CreateTranslator {
    const FIELDS: &'static [&'static str] = &["first_name", "last_name"];
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTranslator {
    #[validate(custom(function = "not_blank", message = "firstName cannot be blank"))]
    pub first_name: Option<String>,
    #[validate(custom(function = "not_blank", message = "lastName cannot be blank"))]
    pub last_name: Option<String>,
}

impl FieldOrder for UpdateTranslator {
    const FIELDS: &'static [&'static str] = &["first_name", "last_name"];
}

impl Translator {
    pub fn apply_update(&mut self, patch: UpdateTranslator) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
    }
}

impl From<&Translator> for TranslatorSummary {
    fn from(translator: &Translator) -> Self {
        Self {
            id: translator.id,
            first_name: translator.first_name.clone(),
            last_name: translator.last_name.clone(),
        }
    }
}

impl From<Translator> for TranslatorSummary {
    fn from(translator: Translator) -> Self {
        Self {
            id: translator.id,
            first_name: translator.first_name,
            last_name: translator.last_name,
        }
    }
}
