//! Book-Publisher link service

use crate::{
    error::AppResult,
    models::{
        book_publisher::{BookPublisherId, BookPublisherResponse, CreateBookPublisher},
        CompositeKey,
    },
    repository::Repository,
};

use super::{books::BooksService, publishers::PublishersService};

#[derive(Clone)]
pub struct BookPublishersService {
    repository: Repository,
    books: BooksService,
    publishers: PublishersService,
}

impl BookPublishersService {
    pub fn new(repository: Repository, books: BooksService, publishers: PublishersService) -> Self {
        Self {
            repository,
            books,
            publishers,
        }
    }

    pub async fn find_all(&self) -> AppResult<Vec<BookPublisherResponse>> {
        let rows = self.repository.book_publishers.find_all().await?;
        Ok(rows.into_iter().map(BookPublisherResponse::from).collect())
    }

    pub async fn find_by_id(&self, key: BookPublisherId) -> AppResult<BookPublisherResponse> {
        self.repository
            .book_publishers
            .find_by_id(key)
            .await?
            .map(BookPublisherResponse::from)
            .ok_or_else(|| key.not_found())
    }

    pub async fn create(&self, data: &CreateBookPublisher) -> AppResult<BookPublisherResponse> {
        let (book_id, publisher_id) = data.ids()?;
        let book = self.books.find_entity_by_id(book_id).await?;
        let publisher = self.publishers.find_entity_by_id(publisher_id).await?;

        let key = BookPublisherId::of(&book, &publisher);
        if self.repository.book_publishers.create(key).await?.is_none() {
            return Err(key.already_exists());
        }

        tracing::info!("BookPublisher created: {}", key.describe());
        Ok(BookPublisherResponse::from_entities(&book, &publisher))
    }

    pub async fn delete(&self, key: BookPublisherId) -> AppResult<()> {
        self.repository.book_publishers.delete_by_id(key).await?;
        Ok(())
    }
}
