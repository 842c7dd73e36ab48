//! Book-Publisher junction repository

use sqlx::{Pool, Postgres};

use super::books::BOOK_COLUMNS;
use crate::{
    error::AppResult,
    models::{
        book::Book,
        book_publisher::{BookPublisherId, BookPublisherRow},
        publisher::Publisher,
    },
};

const ROW_SELECT: &str = r#"
    SELECT bp.book_id, b.name AS book_name, bp.publisher_id, p.name AS publisher_name
    FROM book_publisher bp
    JOIN books b ON b.id = bp.book_id
    JOIN publishers p ON p.id = bp.publisher_id
"#;

#[derive(Clone)]
pub struct BookPublishersRepository {
    pool: Pool<Postgres>,
}

impl BookPublishersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<BookPublisherRow>> {
        let query = format!("{} ORDER BY bp.book_id, bp.publisher_id", ROW_SELECT);
        let rows = sqlx::query_as::<_, BookPublisherRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, key: BookPublisherId) -> AppResult<Option<BookPublisherRow>> {
        let query = format!("{} WHERE bp.book_id = $1 AND bp.publisher_id = $2", ROW_SELECT);
        let row = sqlx::query_as::<_, BookPublisherRow>(&query)
            .bind(key.book_id)
            .bind(key.publisher_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn create(&self, key: BookPublisherId) -> AppResult<Option<BookPublisherId>> {
        let row = sqlx::query_as::<_, BookPublisherId>(
            r#"
            INSERT INTO book_publisher (book_id, publisher_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            RETURNING book_id, publisher_id
            "#,
        )
        .bind(key.book_id)
        .bind(key.publisher_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete_by_id(&self, key: BookPublisherId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM book_publisher WHERE book_id = $1 AND publisher_id = $2")
            .bind(key.book_id)
            .bind(key.publisher_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn find_all_publishers_by_book_id(&self, book_id: i32) -> AppResult<Vec<Publisher>> {
        let rows = sqlx::query_as::<_, Publisher>(
            r#"
            SELECT DISTINCT p.* FROM book_publisher bp
            JOIN publishers p ON p.id = bp.publisher_id
            WHERE bp.book_id = $1
            ORDER BY p.id
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_all_books_by_publisher_id(&self, publisher_id: i32) -> AppResult<Vec<Book>> {
        let query = format!(
            r#"
            SELECT DISTINCT {} FROM book_publisher bp
            JOIN books b ON b.id = bp.book_id
            LEFT JOIN translators t ON t.id = b.translator_id
            WHERE bp.publisher_id = $1
            ORDER BY b.id
            "#,
            BOOK_COLUMNS
        );
        let rows = sqlx::query_as::<_, Book>(&query)
            .bind(publisher_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
