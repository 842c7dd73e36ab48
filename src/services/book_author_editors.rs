//! Book-Author-Editor link service

use crate::{
    error::AppResult,
    models::{
        book_author_editor::{
            BookAuthorEditorId, BookAuthorEditorResponse, CreateBookAuthorEditor,
        },
        CompositeKey,
    },
    repository::Repository,
};

use super::{authors::AuthorsService, books::BooksService, editors::EditorsService};

#[derive(Clone)]
pub struct BookAuthorEditorsService {
    repository: Repository,
    books: BooksService,
    authors: AuthorsService,
    editors: EditorsService,
}

impl BookAuthorEditorsService {
    pub fn new(
        repository: Repository,
        books: BooksService,
        authors: AuthorsService,
        editors: EditorsService,
    ) -> Self {
        Self {
            repository,
            books,
            authors,
            editors,
        }
    }

    pub async fn find_all(&self) -> AppResult<Vec<BookAuthorEditorResponse>> {
        let rows = self.repository.book_author_editors.find_all().await?;
        Ok(rows.into_iter().map(BookAuthorEditorResponse::from).collect())
    }

    pub async fn find_by_id(&self, key: BookAuthorEditorId) -> AppResult<BookAuthorEditorResponse> {
        self.repository
            .book_author_editors
            .find_by_id(key)
            .await?
            .map(BookAuthorEditorResponse::from)
            .ok_or_else(|| key.not_found())
    }

    /// Link a book, an author and an editor.
    ///
    /// Each id is resolved in order (book, author, editor); the first missing
    /// one is reported. An existing identical triple is a conflict.
    pub async fn create(&self, data: &CreateBookAuthorEditor) -> AppResult<BookAuthorEditorResponse> {
        let (book_id, author_id, editor_id) = data.ids()?;
        let book = self.books.find_entity_by_id(book_id).await?;
        let author = self.authors.find_entity_by_id(author_id).await?;
        let editor = self.editors.find_entity_by_id(editor_id).await?;

        let key = BookAuthorEditorId::of(&book, &author, &editor);
        self.repository
            .book_author_editors
            .create(key)
            .await?
            .ok_or_else(|| key.already_exists())?;

        tracing::info!("BookAuthorEditor created: {}", key.describe());
        Ok(BookAuthorEditorResponse::from_entities(&book, &author, &editor))
    }

    /// Remove a link; an absent key is not an error
    pub async fn delete(&self, key: BookAuthorEditorId) -> AppResult<()> {
        let deleted = self.repository.book_author_editors.delete_by_id(key).await?;
        if deleted == 0 {
            tracing::debug!("BookAuthorEditor delete: no row for {}", key.describe());
        }
        Ok(())
    }
}
