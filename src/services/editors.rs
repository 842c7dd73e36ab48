//! Editor management service

use crate::{
    error::{AppError, AppResult},
    models::{
        editor::{CreateEditor, Editor, EditorResponse, UpdateEditor},
        AuthorSummary, BookSummary,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct EditorsService {
    repository: Repository,
}

impl EditorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn find_all(&self) -> AppResult<Vec<EditorResponse>> {
        let editors = self.repository.editors.find_all().await?;
        Ok(editors.into_iter().map(EditorResponse::from).collect())
    }

    pub async fn find_all_books_by_editor_id(&self, editor_id: i32) -> AppResult<Vec<BookSummary>> {
        let books = self
            .repository
            .book_author_editors
            .find_all_books_by_editor_id(editor_id)
            .await?;
        Ok(books.iter().map(BookSummary::from).collect())
    }

    pub async fn find_all_authors_by_editor_id(&self, editor_id: i32) -> AppResult<Vec<AuthorSummary>> {
        let authors = self
            .repository
            .book_author_editors
            .find_all_authors_by_editor_id(editor_id)
            .await?;
        Ok(authors.iter().map(AuthorSummary::from).collect())
    }

    pub async fn find_entity_by_id(&self, editor_id: i32) -> AppResult<Editor> {
        self.repository
            .editors
            .find_by_id(editor_id)
            .await?
            .ok_or_else(|| AppError::entity_not_found("Editor", editor_id))
    }

    pub async fn find_by_id(&self, editor_id: i32) -> AppResult<EditorResponse> {
        self.find_entity_by_id(editor_id).await.map(EditorResponse::from)
    }

    pub async fn create(&self, data: &CreateEditor) -> AppResult<EditorResponse> {
        let editor = self.repository.editors.create(data).await?;
        tracing::info!("Editor created: id={}", editor.id);
        Ok(editor.into())
    }

    pub async fn update(&self, editor_id: i32, patch: UpdateEditor) -> AppResult<EditorResponse> {
        let mut editor = self.find_entity_by_id(editor_id).await?;
        editor.apply_update(patch);
        self.repository
            .editors
            .update(&editor)
            .await?
            .map(EditorResponse::from)
            .ok_or_else(|| AppError::entity_not_found("Editor", editor_id))
    }

    pub async fn delete(&self, editor_id: i32) -> AppResult<()> {
        self.repository.editors.delete_by_id(editor_id).await?;
        Ok(())
    }
}
