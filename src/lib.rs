//! Book Catalog server
//!
//! REST JSON API over a library catalog: books and the people and
//! organisations behind them (authors, editors, translators, publishers),
//! plus category tagging.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
