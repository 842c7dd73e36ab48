//! Category management service

use crate::{
    error::{AppError, AppResult},
    models::{
        category::{Category, CategoryRequest, CategorySummary},
        BookSummary,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CategoriesService {
    repository: Repository,
}

impl CategoriesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn find_all(&self) -> AppResult<Vec<CategorySummary>> {
        let categories = self.repository.categories.find_all().await?;
        Ok(categories.into_iter().map(CategorySummary::from).collect())
    }

    pub async fn find_all_books_by_category_id(&self, category_id: i32) -> AppResult<Vec<BookSummary>> {
        let books = self
            .repository
            .book_categories
            .find_all_books_by_category_id(category_id)
            .await?;
        Ok(books.iter().map(BookSummary::from).collect())
    }

    pub async fn find_entity_by_id(&self, category_id: i32) -> AppResult<Category> {
        self.repository
            .categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| AppError::entity_not_found("Category", category_id))
    }

    pub async fn find_by_id(&self, category_id: i32) -> AppResult<CategorySummary> {
        self.find_entity_by_id(category_id).await.map(CategorySummary::from)
    }

    pub async fn create(&self, data: &CategoryRequest) -> AppResult<CategorySummary> {
        let name = data
            .name
            .as_deref()
            .ok_or_else(|| AppError::Validation("name is required and cannot be blank".to_string()))?;
        let category = self.repository.categories.create(name).await?;
        tracing::info!("Category created: id={}", category.id);
        Ok(category.into())
    }

    pub async fn update(&self, category_id: i32, patch: CategoryRequest) -> AppResult<CategorySummary> {
        let mut category = self.find_entity_by_id(category_id).await?;
        category.apply_update(patch);
        self.repository
            .categories
            .update(&category)
            .await?
            .map(CategorySummary::from)
            .ok_or_else(|| AppError::entity_not_found("Category", category_id))
    }

    pub async fn delete(&self, category_id: i32) -> AppResult<()> {
        self.repository.categories.delete_by_id(category_id).await?;
        Ok(())
    }
}
