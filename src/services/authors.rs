//! Author management service

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, AuthorResponse, CreateAuthor, UpdateAuthor},
        BookSummary, EditorSummary,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn find_all(&self) -> AppResult<Vec<AuthorResponse>> {
        let authors = self.repository.authors.find_all().await?;
        Ok(authors.into_iter().map(AuthorResponse::from).collect())
    }

    /// Books this author worked on, with any editor
    pub async fn find_all_books_by_author_id(&self, author_id: i32) -> AppResult<Vec<BookSummary>> {
        let books = self
            .repository
            .book_author_editors
            .find_all_books_by_author_id(author_id)
            .await?;
        Ok(books.iter().map(BookSummary::from).collect())
    }

    pub async fn find_all_editors_by_author_id(&self, author_id: i32) -> AppResult<Vec<EditorSummary>> {
        let editors = self
            .repository
            .book_author_editors
            .find_all_editors_by_author_id(author_id)
            .await?;
        Ok(editors.iter().map(EditorSummary::from).collect())
    }

    /// Resolve an author row, failing with NotFound
    pub async fn find_entity_by_id(&self, author_id: i32) -> AppResult<Author> {
        self.repository
            .authors
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| AppError::entity_not_found("Author", author_id))
    }

    pub async fn find_by_id(&self, author_id: i32) -> AppResult<AuthorResponse> {
        self.find_entity_by_id(author_id).await.map(AuthorResponse::from)
    }

    pub async fn create(&self, data: &CreateAuthor) -> AppResult<AuthorResponse> {
        let author = self.repository.authors.create(data).await?;
        tracing::info!("Author created: id={}", author.id);
        Ok(author.into())
    }

    pub async fn update(&self, author_id: i32, patch: UpdateAuthor) -> AppResult<AuthorResponse> {
        let mut author = self.find_entity_by_id(author_id).await?;
        author.apply_update(patch);
        self.repository
            .authors
            .update(&author)
            .await?
            .map(AuthorResponse::from)
            .ok_or_else(|| AppError::entity_not_found("Author", author_id))
    }

    pub async fn delete(&self, author_id: i32) -> AppResult<()> {
        let deleted = self.repository.authors.delete_by_id(author_id).await?;
        if deleted > 0 {
            tracing::info!("Author deleted: id={}", author_id);
        }
        Ok(())
    }
}
