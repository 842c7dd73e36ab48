//! Repository tests against a migrated database
//!
//! Set DATABASE_URL and run with: cargo test -- --ignored

use book_catalog::{
    config::AppConfig,
    models::{author::CreateAuthor, book::CreateBook, book::UpdateBook},
    repository::Repository,
    services::Services,
    AppError,
};
use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;

async fn repository() -> Repository {
    let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| AppConfig::default().database.url);
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");
    Repository::new(pool)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
#[ignore]
async fn test_update_of_vanished_book_is_none() {
    let repository = repository().await;
    let isbn = format!("979-{}", chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default());

    let data = CreateBook {
        name: Some("Ghost".into()),
        isbn: Some(isbn),
        no_pages: Some(1),
        price: Some(1),
        language: Some("English".into()),
        publish_date: Some(date(2010, 1, 1)),
        translator_id: None,
    };
    let mut book = repository.books.create(&data, None).await.unwrap();
    assert_eq!(repository.books.delete_by_id(book.id).await.unwrap(), 1);

    book.name = "Still a ghost".into();
    assert!(repository.books.update(&book).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn test_update_of_vanished_author_is_none() {
    let repository = repository().await;

    let data = CreateAuthor {
        first_name: Some("Vanishing".into()),
        last_name: Some("Act".into()),
        debut_date: Some(date(1990, 1, 1)),
    };
    let author = repository.authors.create(&data).await.unwrap();
    repository.authors.delete_by_id(author.id).await.unwrap();

    assert!(repository.authors.update(&author).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn test_service_update_of_missing_book_is_not_found() {
    let services = Services::new(repository().await);

    match services.books.update(i32::MAX, UpdateBook::default()).await {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, format!("Book with id {} not found", i32::MAX)),
        other => panic!("unexpected result: {:?}", other),
    }
}
