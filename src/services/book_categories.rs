//! Book-Category link service

use crate::{
    error::AppResult,
    models::{
        book_category::{BookCategoryId, BookCategoryResponse, CreateBookCategory},
        CompositeKey,
    },
    repository::Repository,
};

use super::{books::BooksService, categories::CategoriesService};

#[derive(Clone)]
pub struct BookCategoriesService {
    repository: Repository,
    books: BooksService,
    categories: CategoriesService,
}

impl BookCategoriesService {
    pub fn new(repository: Repository, books: BooksService, categories: CategoriesService) -> Self {
        Self {
            repository,
            books,
            categories,
        }
    }

    pub async fn find_all(&self) -> AppResult<Vec<BookCategoryResponse>> {
        let rows = self.repository.book_categories.find_all().await?;
        Ok(rows.into_iter().map(BookCategoryResponse::from).collect())
    }

    pub async fn find_by_id(&self, key: BookCategoryId) -> AppResult<BookCategoryResponse> {
        self.repository
            .book_categories
            .find_by_id(key)
            .await?
            .map(BookCategoryResponse::from)
            .ok_or_else(|| key.not_found())
    }

    pub async fn create(&self, data: &CreateBookCategory) -> AppResult<BookCategoryResponse> {
        let (book_id, category_id) = data.ids()?;
        let book = self.books.find_entity_by_id(book_id).await?;
        let category = self.categories.find_entity_by_id(category_id).await?;

        let key = BookCategoryId::of(&book, &category);
        self.repository
            .book_categories
            .create(key)
            .await?
            .ok_or_else(|| key.already_exists())?;

        tracing::info!("BookCategory created: {}", key.describe());
        Ok(BookCategoryResponse::from_entities(&book, &category))
    }

    pub async fn delete(&self, key: BookCategoryId) -> AppResult<()> {
        self.repository.book_categories.delete_by_id(key).await?;
        Ok(())
    }
}
