//! Composite keys of the junction tables

use crate::error::AppError;

/// Identity of a junction row, made of the linked entities' ids
pub trait CompositeKey {
    /// Resource name used in messages, e.g. `BookCategory`
    const NAME: &'static str;

    /// `(field, id)` pairs in declared order
    fn components(&self) -> Vec<(&'static str, i32)>;

    /// `bookId=1 and categoryId=2`
    fn describe(&self) -> String {
        self.components()
            .iter()
            .map(|(field, id)| format!("{}={}", field, id))
            .collect::<Vec<_>>()
            .join(" and ")
    }

    fn not_found(&self) -> AppError {
        AppError::NotFound(format!("{} with {} not found", Self::NAME, self.describe()))
    }

    fn already_exists(&self) -> AppError {
        AppError::Conflict(format!("{} with {} already exists", Self::NAME, self.describe()))
    }
}
