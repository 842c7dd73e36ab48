//! Book-Author-Editor junction repository
//!
//! Besides CRUD by composite key, the table answers six lookups: each of the
//! three ends can be listed by the id of either other end.

use sqlx::{Pool, Postgres};

use super::books::BOOK_COLUMNS;
use crate::{
    error::AppResult,
    models::{
        author::Author,
        book::Book,
        book_author_editor::{BookAuthorEditorId, BookAuthorEditorRow},
        editor::Editor,
    },
};

const ROW_SELECT: &str = r#"
    SELECT bae.book_id, b.name AS book_name,
           bae.author_id, a.first_name AS author_first_name, a.last_name AS author_last_name,
           bae.editor_id, e.first_name AS editor_first_name, e.last_name AS editor_last_name
    FROM book_author_editor bae
    JOIN books b ON b.id = bae.book_id
    JOIN authors a ON a.id = bae.author_id
    JOIN editors e ON e.id = bae.editor_id
"#;

#[derive(Clone)]
pub struct BookAuthorEditorsRepository {
    pool: Pool<Postgres>,
}

impl BookAuthorEditorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<BookAuthorEditorRow>> {
        let query = format!(
            "{} ORDER BY bae.book_id, bae.author_id, bae.editor_id",
            ROW_SELECT
        );
        let rows = sqlx::query_as::<_, BookAuthorEditorRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, key: BookAuthorEditorId) -> AppResult<Option<BookAuthorEditorRow>> {
        let query = format!(
            "{} WHERE bae.book_id = $1 AND bae.author_id = $2 AND bae.editor_id = $3",
            ROW_SELECT
        );
        let row = sqlx::query_as::<_, BookAuthorEditorRow>(&query)
            .bind(key.book_id)
            .bind(key.author_id)
            .bind(key.editor_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Insert a link. Returns `None` when the exact triple already exists.
    pub async fn create(&self, key: BookAuthorEditorId) -> AppResult<Option<BookAuthorEditorId>> {
        let row = sqlx::query_as::<_, BookAuthorEditorId>(
            r#"
            INSERT INTO book_author_editor (book_id, author_id, editor_id)
            VALUES ($1, $2, $3)
            ON CONFLICT DO NOTHING
            RETURNING book_id, author_id, editor_id
            "#,
        )
        .bind(key.book_id)
        .bind(key.author_id)
        .bind(key.editor_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete_by_id(&self, key: BookAuthorEditorId) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM book_author_editor WHERE book_id = $1 AND author_id = $2 AND editor_id = $3",
        )
        .bind(key.book_id)
        .bind(key.author_id)
        .bind(key.editor_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn find_all_authors_by_book_id(&self, book_id: i32) -> AppResult<Vec<Author>> {
        self.authors_where("bae.book_id", book_id).await
    }

    pub async fn find_all_authors_by_editor_id(&self, editor_id: i32) -> AppResult<Vec<Author>> {
        self.authors_where("bae.editor_id", editor_id).await
    }

    pub async fn find_all_editors_by_book_id(&self, book_id: i32) -> AppResult<Vec<Editor>> {
        self.editors_where("bae.book_id", book_id).await
    }

    pub async fn find_all_editors_by_author_id(&self, author_id: i32) -> AppResult<Vec<Editor>> {
        self.editors_where("bae.author_id", author_id).await
    }

    pub async fn find_all_books_by_author_id(&self, author_id: i32) -> AppResult<Vec<Book>> {
        self.books_where("bae.author_id", author_id).await
    }

    pub async fn find_all_books_by_editor_id(&self, editor_id: i32) -> AppResult<Vec<Book>> {
        self.books_where("bae.editor_id", editor_id).await
    }

    // `column` is always one of the literals above, never user input.

    async fn authors_where(&self, column: &str, id: i32) -> AppResult<Vec<Author>> {
        let query = format!(
            r#"
            SELECT DISTINCT a.* FROM book_author_editor bae
            JOIN authors a ON a.id = bae.author_id
            WHERE {} = $1
            ORDER BY a.id
            "#,
            column
        );
        let rows = sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn editors_where(&self, column: &str, id: i32) -> AppResult<Vec<Editor>> {
        let query = format!(
            r#"
            SELECT DISTINCT e.* FROM book_author_editor bae
            JOIN editors e ON e.id = bae.editor_id
            WHERE {} = $1
            ORDER BY e.id
            "#,
            column
        );
        let rows = sqlx::query_as::<_, Editor>(&query)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn books_where(&self, column: &str, id: i32) -> AppResult<Vec<Book>> {
        let query = format!(
            r#"
            SELECT DISTINCT {} FROM book_author_editor bae
            JOIN books b ON b.id = bae.book_id
            LEFT JOIN translators t ON t.id = b.translator_id
            WHERE {} = $1
            ORDER BY b.id
            "#,
            BOOK_COLUMNS, column
        );
        let rows = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
