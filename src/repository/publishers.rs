//! Publishers repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::publisher::{CreatePublisher, Publisher},
};

#[derive(Clone)]
pub struct PublishersRepository {
    pool: Pool<Postgres>,
}

impl PublishersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Publisher>> {
        let rows = sqlx::query_as::<_, Publisher>("SELECT * FROM publishers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Publisher>> {
        let row = sqlx::query_as::<_, Publisher>("SELECT * FROM publishers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn create(&self, data: &CreatePublisher) -> AppResult<Publisher> {
        let row = sqlx::query_as::<_, Publisher>(
            "INSERT INTO publishers (name, founded_date) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.founded_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, publisher: &Publisher) -> AppResult<Option<Publisher>> {
        let row = sqlx::query_as::<_, Publisher>(
            "UPDATE publishers SET name = $1, founded_date = $2 WHERE id = $3 RETURNING *",
        )
        .bind(&publisher.name)
        .bind(publisher.founded_date)
        .bind(publisher.id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete_by_id(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM publishers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
