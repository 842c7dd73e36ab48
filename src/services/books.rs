//! Book management service

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookResponse, CreateBook, UpdateBook},
        AuthorSummary, CategorySummary, EditorSummary, PublisherSummary,
    },
    repository::Repository,
};

use super::translators::TranslatorsService;

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    translators: TranslatorsService,
}

impl BooksService {
    pub fn new(repository: Repository, translators: TranslatorsService) -> Self {
        Self {
            repository,
            translators,
        }
    }

    pub async fn find_all(&self) -> AppResult<Vec<BookResponse>> {
        let books = self.repository.books.find_all().await?;
        Ok(books.into_iter().map(BookResponse::from).collect())
    }

    pub async fn find_all_authors_by_book_id(&self, book_id: i32) -> AppResult<Vec<AuthorSummary>> {
        let authors = self
            .repository
            .book_author_editors
            .find_all_authors_by_book_id(book_id)
            .await?;
        Ok(authors.iter().map(AuthorSummary::from).collect())
    }

    pub async fn find_all_editors_by_book_id(&self, book_id: i32) -> AppResult<Vec<EditorSummary>> {
        let editors = self
            .repository
            .book_author_editors
            .find_all_editors_by_book_id(book_id)
            .await?;
        Ok(editors.iter().map(EditorSummary::from).collect())
    }

    pub async fn find_all_categories_by_book_id(&self, book_id: i32) -> AppResult<Vec<CategorySummary>> {
        let categories = self
            .repository
            .book_categories
            .find_all_categories_by_book_id(book_id)
            .await?;
        Ok(categories.into_iter().map(CategorySummary::from).collect())
    }

    pub async fn find_all_publishers_by_book_id(&self, book_id: i32) -> AppResult<Vec<PublisherSummary>> {
        let publishers = self
            .repository
            .book_publishers
            .find_all_publishers_by_book_id(book_id)
            .await?;
        Ok(publishers.iter().map(PublisherSummary::from).collect())
    }

    /// Resolve a book row, failing with NotFound
    pub async fn find_entity_by_id(&self, book_id: i32) -> AppResult<Book> {
        self.repository
            .books
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::entity_not_found("Book", book_id))
    }

    pub async fn find_by_id(&self, book_id: i32) -> AppResult<BookResponse> {
        self.find_entity_by_id(book_id).await.map(BookResponse::from)
    }

    /// Create a book, linking the translator when `translatorId` is given
    pub async fn create(&self, data: &CreateBook) -> AppResult<BookResponse> {
        let translator_id = match data.translator_id {
            Some(id) => Some(self.translators.find_entity_by_id(id).await?.id),
            None => None,
        };

        let book = self.repository.books.create(data, translator_id).await?;
        tracing::info!("Book created: id={} isbn={}", book.id, book.isbn);
        Ok(book.into())
    }

    pub async fn update(&self, book_id: i32, patch: UpdateBook) -> AppResult<BookResponse> {
        let mut book = self.find_entity_by_id(book_id).await?;

        if let Some(translator_id) = patch.translator_id {
            let translator = self.translators.find_entity_by_id(translator_id).await?;
            book.set_translator(&translator);
        }
        book.apply_update(patch);

        self.repository
            .books
            .update(&book)
            .await?
            .map(BookResponse::from)
            .ok_or_else(|| AppError::entity_not_found("Book", book_id))
    }

    pub async fn delete(&self, book_id: i32) -> AppResult<()> {
        let deleted = self.repository.books.delete_by_id(book_id).await?;
        if deleted > 0 {
            tracing::info!("Book deleted: id={}", book_id);
        }
        Ok(())
    }
}
