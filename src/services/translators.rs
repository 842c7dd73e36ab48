//! Translator management service

use crate::{
    error::{AppError, AppResult},
    models::{
        translator::{CreateTranslator, Translator, TranslatorResponse, UpdateTranslator},
        BookSummary,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct TranslatorsService {
    repository: Repository,
}

impl TranslatorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn find_all(&self) -> AppResult<Vec<TranslatorResponse>> {
        let translators = self.repository.translators.find_all().await?;
        Ok(translators.into_iter().map(TranslatorResponse::from).collect())
    }

    /// Books translated by this translator. Unlike the junction lookups,
    /// an unknown translator is reported as NotFound.
    pub async fn find_all_books_by_translator_id(&self, translator_id: i32) -> AppResult<Vec<BookSummary>> {
        let translator = self.find_entity_by_id(translator_id).await?;
        let books = self
            .repository
            .books
            .find_all_by_translator_id(translator.id)
            .await?;
        Ok(books.iter().map(BookSummary::from).collect())
    }

    pub async fn find_entity_by_id(&self, translator_id: i32) -> AppResult<Translator> {
        self.repository
            .translators
            .find_by_id(translator_id)
            .await?
            .ok_or_else(|| AppError::entity_not_found("Translator", translator_id))
    }

    pub async fn find_by_id(&self, translator_id: i32) -> AppResult<TranslatorResponse> {
        self.find_entity_by_id(translator_id).await.map(TranslatorResponse::from)
    }

    pub async fn create(&self, data: &CreateTranslator) -> AppResult<TranslatorResponse> {
        let translator = self.repository.translators.create(data).await?;
        tracing::info!("Translator created: id={}", translator.id);
        Ok(translator.into())
    }

    pub async fn update(&self, translator_id: i32, patch: UpdateTranslator) -> AppResult<TranslatorResponse> {
        let mut translator = self.find_entity_by_id(translator_id).await?;
        translator.apply_update(patch);
        self.repository
            .translators
            .update(&translator)
            .await?
            .map(TranslatorResponse::from)
            .ok_or_else(|| AppError::entity_not_found("Translator", translator_id))
    }

    pub async fn delete(&self, translator_id: i32) -> AppResult<()> {
        self.repository.translators.delete_by_id(translator_id).await?;
        Ok(())
    }
}
