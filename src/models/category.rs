//! Category model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::validation::{not_blank, FieldOrder};

/// Category row
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Category as returned by every endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategorySummary {
    pub id: i32,
    pub name: String,
}

/// Create or update category request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategoryRequest {
    #[validate(
        required(message = "name is required and cannot be blank"),
        custom(function = "not_blank", message = "name is required and cannot be blank")
    )]
    pub name: Option<String>,
}

impl FieldOrder for CategoryRequest {
    const FIELDS: &'static [&'static str] = &["name"];
}

impl Category {
    pub fn apply_update(&mut self, patch: CategoryRequest) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

impl From<Category> for CategorySummary {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}
