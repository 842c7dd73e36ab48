//! Editors repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::editor::{CreateEditor, Editor},
};

#[derive(Clone)]
pub struct EditorsRepository {
    pool: Pool<Postgres>,
}

impl EditorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Editor>> {
        let rows = sqlx::query_as::<_, Editor>("SELECT * FROM editors ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Editor>> {
        let row = sqlx::query_as::<_, Editor>("SELECT * FROM editors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn create(&self, data: &CreateEditor) -> AppResult<Editor> {
        let row = sqlx::query_as::<_, Editor>(
            "INSERT INTO editors (first_name, last_name, debut_date) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.debut_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, editor: &Editor) -> AppResult<Option<Editor>> {
        let row = sqlx::query_as::<_, Editor>(
            r#"
            UPDATE editors SET first_name = $1, last_name = $2, debut_date = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&editor.first_name)
        .bind(&editor.last_name)
        .bind(editor.debut_date)
        .bind(editor.id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete_by_id(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM editors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
