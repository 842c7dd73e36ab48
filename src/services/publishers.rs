//! Publisher management service

use crate::{
    error::{AppError, AppResult},
    models::{
        publisher::{CreatePublisher, Publisher, PublisherResponse, UpdatePublisher},
        BookSummary,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct PublishersService {
    repository: Repository,
}

impl PublishersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn find_all(&self) -> AppResult<Vec<PublisherResponse>> {
        let publishers = self.repository.publishers.find_all().await?;
        Ok(publishers.into_iter().map(PublisherResponse::from).collect())
    }

    pub async fn find_all_books_by_publisher_id(&self, publisher_id: i32) -> AppResult<Vec<BookSummary>> {
        let books = self
            .repository
            .book_publishers
            .find_all_books_by_publisher_id(publisher_id)
            .await?;
        Ok(books.iter().map(BookSummary::from).collect())
    }

    pub async fn find_entity_by_id(&self, publisher_id: i32) -> AppResult<Publisher> {
        self.repository
            .publishers
            .find_by_id(publisher_id)
            .await?
            .ok_or_else(|| AppError::entity_not_found("Publisher", publisher_id))
    }

    pub async fn find_by_id(&self, publisher_id: i32) -> AppResult<PublisherResponse> {
        self.find_entity_by_id(publisher_id).await.map(PublisherResponse::from)
    }

    pub async fn create(&self, data: &CreatePublisher) -> AppResult<PublisherResponse> {
        let publisher = self.repository.publishers.create(data).await?;
        tracing::info!("Publisher created: id={}", publisher.id);
        Ok(publisher.into())
    }

    pub async fn update(&self, publisher_id: i32, patch: UpdatePublisher) -> AppResult<PublisherResponse> {
        let mut publisher = self.find_entity_by_id(publisher_id).await?;
        publisher.apply_update(patch);
        self.repository
            .publishers
            .update(&publisher)
            .await?
            .map(PublisherResponse::from)
            .ok_or_else(|| AppError::entity_not_found("Publisher", publisher_id))
    }

    pub async fn delete(&self, publisher_id: i32) -> AppResult<()> {
        self.repository.publishers.delete_by_id(publisher_id).await?;
        Ok(())
    }
}
