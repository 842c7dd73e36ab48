//! Translators repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::translator::{CreateTranslator, Translator},
};

#[derive(Clone)]
pub struct TranslatorsRepository {
    pool: Pool<Postgres>,
}

impl TranslatorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Translator>> {
        let rows = sqlx::query_as::<_, Translator>("SELECT * FROM translators ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Translator>> {
        let row = sqlx::query_as::<_, Translator>("SELECT * FROM translators WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn create(&self, data: &CreateTranslator) -> AppResult<Translator> {
        let row = sqlx::query_as::<_, Translator>(
            "INSERT INTO translators (first_name, last_name) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, translator: &Translator) -> AppResult<Option<Translator>> {
        let row = sqlx::query_as::<_, Translator>(
            "UPDATE translators SET first_name = $1, last_name = $2 WHERE id = $3 RETURNING *",
        )
        .bind(&translator.first_name)
        .bind(&translator.last_name)
        .bind(translator.id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Books keep their row; `translator_id` is cleared by the foreign key
    pub async fn delete_by_id(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM translators WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
