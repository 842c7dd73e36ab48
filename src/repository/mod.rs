//! Repository layer for database operations

pub mod authors;
pub mod book_author_editors;
pub mod book_categories;
pub mod book_publishers;
pub mod books;
pub mod categories;
pub mod editors;
pub mod publishers;
pub mod translators;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub authors: authors::AuthorsRepository,
    pub editors: editors::EditorsRepository,
    pub translators: translators::TranslatorsRepository,
    pub publishers: publishers::PublishersRepository,
    pub categories: categories::CategoriesRepository,
    pub books: books::BooksRepository,
    pub book_author_editors: book_author_editors::BookAuthorEditorsRepository,
    pub book_categories: book_categories::BookCategoriesRepository,
    pub book_publishers: book_publishers::BookPublishersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            editors: editors::EditorsRepository::new(pool.clone()),
            translators: translators::TranslatorsRepository::new(pool.clone()),
            publishers: publishers::PublishersRepository::new(pool.clone()),
            categories: categories::CategoriesRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            book_author_editors: book_author_editors::BookAuthorEditorsRepository::new(pool.clone()),
            book_categories: book_categories::BookCategoriesRepository::new(pool.clone()),
            book_publishers: book_publishers::BookPublishersRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database (readiness check)
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
