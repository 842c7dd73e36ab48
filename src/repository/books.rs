//! Books repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{is_unique_violation, AppError, AppResult},
    models::book::{Book, CreateBook},
};

/// Columns of [`Book`], with `b` aliasing books and `t` translators
pub(crate) const BOOK_COLUMNS: &str = r#"
    b.id, b.name, b.isbn, b.no_pages, b.price, b.language, b.publish_date, b.translator_id,
    t.first_name AS translator_first_name, t.last_name AS translator_last_name
"#;

fn isbn_conflict(err: sqlx::Error, isbn: &str) -> AppError {
    if is_unique_violation(&err) {
        AppError::Conflict(format!("Book with isbn {} already exists", isbn))
    } else {
        AppError::Database(err)
    }
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books with their translator
    pub async fn find_all(&self) -> AppResult<Vec<Book>> {
        let query = format!(
            "SELECT {} FROM books b LEFT JOIN translators t ON t.id = b.translator_id ORDER BY b.id",
            BOOK_COLUMNS
        );
        let rows = sqlx::query_as::<_, Book>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let query = format!(
            "SELECT {} FROM books b LEFT JOIN translators t ON t.id = b.translator_id WHERE b.id = $1",
            BOOK_COLUMNS
        );
        let row = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Books owned by a translator (one translator, many books)
    pub async fn find_all_by_translator_id(&self, translator_id: i32) -> AppResult<Vec<Book>> {
        let query = format!(
            r#"
            SELECT {} FROM books b
            LEFT JOIN translators t ON t.id = b.translator_id
            WHERE b.translator_id = $1
            ORDER BY b.id
            "#,
            BOOK_COLUMNS
        );
        let rows = sqlx::query_as::<_, Book>(&query)
            .bind(translator_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a validated book. The translator, if any, has been resolved by the caller.
    pub async fn create(&self, data: &CreateBook, translator_id: Option<i32>) -> AppResult<Book> {
        let query = format!(
            r#"
            WITH b AS (
                INSERT INTO books (name, isbn, no_pages, price, language, publish_date, translator_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
            )
            SELECT {} FROM b LEFT JOIN translators t ON t.id = b.translator_id
            "#,
            BOOK_COLUMNS
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&data.name)
            .bind(&data.isbn)
            .bind(data.no_pages)
            .bind(data.price)
            .bind(&data.language)
            .bind(data.publish_date)
            .bind(translator_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| isbn_conflict(e, data.isbn.as_deref().unwrap_or_default()))
    }

    /// Persist every column of an already merged book; `None` if the row is gone
    pub async fn update(&self, book: &Book) -> AppResult<Option<Book>> {
        let query = format!(
            r#"
            WITH b AS (
                UPDATE books
                SET name = $1, isbn = $2, no_pages = $3, price = $4, language = $5,
                    publish_date = $6, translator_id = $7
                WHERE id = $8
                RETURNING *
            )
            SELECT {} FROM b LEFT JOIN translators t ON t.id = b.translator_id
            "#,
            BOOK_COLUMNS
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&book.name)
            .bind(&book.isbn)
            .bind(book.no_pages)
            .bind(book.price)
            .bind(&book.language)
            .bind(book.publish_date)
            .bind(book.translator_id)
            .bind(book.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| isbn_conflict(e, &book.isbn))
    }

    /// Delete a book; its association rows go with it (ON DELETE CASCADE)
    pub async fn delete_by_id(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
