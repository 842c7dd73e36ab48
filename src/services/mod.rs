//! Business logic services

pub mod authors;
pub mod book_author_editors;
pub mod book_categories;
pub mod book_publishers;
pub mod books;
pub mod categories;
pub mod editors;
pub mod publishers;
pub mod translators;

use crate::{error::AppResult, repository::Repository};

/// Container for all services, wired once at startup
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub authors: authors::AuthorsService,
    pub editors: editors::EditorsService,
    pub translators: translators::TranslatorsService,
    pub publishers: publishers::PublishersService,
    pub categories: categories::CategoriesService,
    pub books: books::BooksService,
    pub book_author_editors: book_author_editors::BookAuthorEditorsService,
    pub book_categories: book_categories::BookCategoriesService,
    pub book_publishers: book_publishers::BookPublishersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        let authors = authors::AuthorsService::new(repository.clone());
        let editors = editors::EditorsService::new(repository.clone());
        let translators = translators::TranslatorsService::new(repository.clone());
        let publishers = publishers::PublishersService::new(repository.clone());
        let categories = categories::CategoriesService::new(repository.clone());
        let books = books::BooksService::new(repository.clone(), translators.clone());

        Self {
            book_author_editors: book_author_editors::BookAuthorEditorsService::new(
                repository.clone(),
                books.clone(),
                authors.clone(),
                editors.clone(),
            ),
            book_categories: book_categories::BookCategoriesService::new(
                repository.clone(),
                books.clone(),
                categories.clone(),
            ),
            book_publishers: book_publishers::BookPublishersService::new(
                repository.clone(),
                books.clone(),
                publishers.clone(),
            ),
            authors,
            editors,
            translators,
            publishers,
            categories,
            books,
            repository,
        }
    }

    /// Database readiness
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
