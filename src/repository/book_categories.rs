//! Book-Category junction repository

use sqlx::{Pool, Postgres};

use super::books::BOOK_COLUMNS;
use crate::{
    error::AppResult,
    models::{
        book::Book,
        book_category::{BookCategoryId, BookCategoryRow},
        category::Category,
    },
};

const ROW_SELECT: &str = r#"
    SELECT bc.book_id, b.name AS book_name, bc.category_id, c.name AS category_name
    FROM book_category bc
    JOIN books b ON b.id = bc.book_id
    JOIN categories c ON c.id = bc.category_id
"#;

#[derive(Clone)]
pub struct BookCategoriesRepository {
    pool: Pool<Postgres>,
}

impl BookCategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<BookCategoryRow>> {
        let query = format!("{} ORDER BY bc.book_id, bc.category_id", ROW_SELECT);
        let rows = sqlx::query_as::<_, BookCategoryRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, key: BookCategoryId) -> AppResult<Option<BookCategoryRow>> {
        let query = format!("{} WHERE bc.book_id = $1 AND bc.category_id = $2", ROW_SELECT);
        let row = sqlx::query_as::<_, BookCategoryRow>(&query)
            .bind(key.book_id)
            .bind(key.category_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Insert a link. Returns `None` when the pair already exists.
    pub async fn create(&self, key: BookCategoryId) -> AppResult<Option<BookCategoryId>> {
        let row = sqlx::query_as::<_, BookCategoryId>(
            r#"
            INSERT INTO book_category (book_id, category_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            RETURNING book_id, category_id
            "#,
        )
        .bind(key.book_id)
        .bind(key.category_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete_by_id(&self, key: BookCategoryId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM book_category WHERE book_id = $1 AND category_id = $2")
            .bind(key.book_id)
            .bind(key.category_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn find_all_categories_by_book_id(&self, book_id: i32) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>(
            r#"
            SELECT DISTINCT c.* FROM book_category bc
            JOIN categories c ON c.id = bc.category_id
            WHERE bc.book_id = $1
            ORDER BY c.id
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_all_books_by_category_id(&self, category_id: i32) -> AppResult<Vec<Book>> {
        let query = format!(
            r#"
            SELECT DISTINCT {} FROM book_category bc
            JOIN books b ON b.id = bc.book_id
            LEFT JOIN translators t ON t.id = b.translator_id
            WHERE bc.category_id = $1
            ORDER BY b.id
            "#,
            BOOK_COLUMNS
        );
        let rows = sqlx::query_as::<_, Book>(&query)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
