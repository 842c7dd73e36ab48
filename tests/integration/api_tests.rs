//! API integration tests
//!
//! These run against a live server backed by a migrated database.

use std::sync::atomic::{AtomicU32, Ordering};

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

async fn post(client: &Client, path: &str, body: Value) -> (StatusCode, Value) {
    let response = client
        .post(format!("{}{}", BASE_URL, path))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    let body = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

async fn get(client: &Client, path: &str) -> (StatusCode, Value) {
    let response = client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    let body = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

async fn delete(client: &Client, path: &str) -> StatusCode {
    client
        .delete(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request")
        .status()
}

fn unique_isbn() -> String {
    static SEQ: AtomicU32 = AtomicU32::new(0);
    format!(
        "978-{}-{}",
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default(),
        SEQ.fetch_add(1, Ordering::Relaxed)
    )
}

async fn create_book(client: &Client, name: &str) -> i64 {
    let (status, body) = post(
        client,
        "/books",
        json!({
            "name": name,
            "isbn": unique_isbn(),
            "noPages": 328,
            "price": 10,
            "language": "English",
            "publishDate": "1949-06-08"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("book id")
}

async fn create_person(client: &Client, path: &str, first: &str, last: &str) -> i64 {
    let (status, body) = post(
        client,
        path,
        json!({ "firstName": first, "lastName": last, "debutDate": "1930-01-01" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("person id")
}

async fn create_named(client: &Client, path: &str, body: Value) -> i64 {
    let (status, body) = post(client, path, body).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("entity id")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();
    let (status, body) = get(&client, "/health").await;

    assert!(status.is_success());
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_book_author_editor_lifecycle() {
    let client = Client::new();

    let book_id = create_book(&client, "1984").await;
    let author_id = create_person(&client, "/authors", "John", "Doe").await;
    let editor_id = create_person(&client, "/editors", "Jane", "Roe").await;

    let link = json!({ "bookId": book_id, "authorId": author_id, "editorId": editor_id });
    let (status, body) = post(&client, "/book_author_editors", link.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["book"]["name"], "1984");
    assert_eq!(body["author"]["firstName"], "John");
    assert_eq!(body["editor"]["lastName"], "Roe");

    let (status, body) = post(&client, "/book_author_editors", link).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap_or_default().contains("already exists"));

    let (_, authors) = get(&client, &format!("/books/authors/{}", book_id)).await;
    assert_eq!(authors, json!([{ "id": author_id, "firstName": "John", "lastName": "Doe" }]));

    let (_, books) = get(&client, &format!("/editors/books/{}", editor_id)).await;
    assert_eq!(books, json!([{ "id": book_id, "name": "1984" }]));

    let key = format!("/book_author_editors/{}/{}/{}", book_id, author_id, editor_id);
    assert_eq!(delete(&client, &key).await, StatusCode::NO_CONTENT);

    // Deleting an absent link still succeeds
    assert_eq!(delete(&client, &key).await, StatusCode::NO_CONTENT);

    let (status, body) = get(&client, &key).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        format!(
            "BookAuthorEditor with bookId={} and authorId={} and editorId={} not found",
            book_id, author_id, editor_id
        )
    );
}

#[tokio::test]
#[ignore]
async fn test_link_reports_missing_book_first() {
    let client = Client::new();

    let (status, body) = post(
        &client,
        "/book_categories",
        json!({ "bookId": 999999, "categoryId": 999999 }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Book with id 999999 not found");
}

#[tokio::test]
#[ignore]
async fn test_book_translator_roundtrip() {
    let client = Client::new();

    let translator_id = create_person(&client, "/translators", "Ann", "Lee").await;
    let (status, body) = post(
        &client,
        "/books",
        json!({
            "name": "Translated",
            "isbn": unique_isbn(),
            "noPages": 100,
            "price": 5,
            "language": "French",
            "publishDate": "2001-01-01",
            "translatorId": translator_id
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["translator"]["id"], translator_id);

    let (_, books) = get(&client, &format!("/translators/books/{}", translator_id)).await;
    assert_eq!(books[0]["name"], "Translated");
}

#[tokio::test]
#[ignore]
async fn test_partial_update_keeps_absent_fields() {
    let client = Client::new();
    let author_id = create_person(&client, "/authors", "George", "Orwell").await;

    let response = client
        .put(format!("{}/authors/{}", BASE_URL, author_id))
        .json(&json!({ "lastName": "Blair" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["firstName"], "George");
    assert_eq!(body["lastName"], "Blair");
    assert_eq!(body["debutDate"], "1930-01-01");
}

#[tokio::test]
#[ignore]
async fn test_unknown_entity_message() {
    let client = Client::new();
    let (status, body) = get(&client, "/publishers/999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Publisher with id 999999 not found");
}

#[tokio::test]
#[ignore]
async fn test_author_editor_cross_references() {
    let client = Client::new();

    let book_id = create_book(&client, "Animal Farm").await;
    let author_id = create_person(&client, "/authors", "Eric", "Blair").await;
    let editor_id = create_person(&client, "/editors", "Fred", "Warburg").await;

    let (status, _) = post(
        &client,
        "/book_author_editors",
        json!({ "bookId": book_id, "authorId": author_id, "editorId": editor_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let book = json!([{ "id": book_id, "name": "Animal Farm" }]);
    let author = json!([{ "id": author_id, "firstName": "Eric", "lastName": "Blair" }]);
    let editor = json!([{ "id": editor_id, "firstName": "Fred", "lastName": "Warburg" }]);

    assert_eq!(get(&client, &format!("/books/authors/{}", book_id)).await.1, author);
    assert_eq!(get(&client, &format!("/books/editors/{}", book_id)).await.1, editor);
    assert_eq!(get(&client, &format!("/authors/books/{}", author_id)).await.1, book);
    assert_eq!(get(&client, &format!("/authors/editors/{}", author_id)).await.1, editor);
    assert_eq!(get(&client, &format!("/editors/books/{}", editor_id)).await.1, book);
    assert_eq!(get(&client, &format!("/editors/authors/{}", editor_id)).await.1, author);

    let (status, links) = get(&client, "/book_author_editors").await;
    assert_eq!(status, StatusCode::OK);
    assert!(links
        .as_array()
        .expect("link list")
        .iter()
        .any(|link| link["book"]["id"] == book_id && link["editor"]["id"] == editor_id));
}

#[tokio::test]
#[ignore]
async fn test_book_category_lifecycle() {
    let client = Client::new();

    let book_id = create_book(&client, "Brave New World").await;
    let category_id = create_named(&client, "/categories", json!({ "name": "Dystopia" })).await;

    let link = json!({ "bookId": book_id, "categoryId": category_id });
    let (status, body) = post(&client, "/book_categories", link.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "book": { "id": book_id, "name": "Brave New World" },
            "category": { "id": category_id, "name": "Dystopia" }
        })
    );

    let (status, _) = post(&client, "/book_categories", link).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let key = format!("/book_categories/{}/{}", book_id, category_id);
    let (status, fetched) = get(&client, &key).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);

    let (_, links) = get(&client, "/book_categories").await;
    assert!(links.as_array().expect("link list").contains(&body));

    assert_eq!(
        get(&client, &format!("/books/categories/{}", book_id)).await.1,
        json!([{ "id": category_id, "name": "Dystopia" }])
    );
    assert_eq!(
        get(&client, &format!("/categories/books/{}", category_id)).await.1,
        json!([{ "id": book_id, "name": "Brave New World" }])
    );

    assert_eq!(delete(&client, &key).await, StatusCode::NO_CONTENT);

    let (status, body) = get(&client, &key).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        format!("BookCategory with bookId={} and categoryId={} not found", book_id, category_id)
    );
    assert_eq!(get(&client, &format!("/categories/books/{}", category_id)).await.1, json!([]));
}

#[tokio::test]
#[ignore]
async fn test_book_publisher_lifecycle() {
    let client = Client::new();

    let book_id = create_book(&client, "Fahrenheit 451").await;
    let publisher_id = create_named(
        &client,
        "/publishers",
        json!({ "name": "Ballantine", "foundedDate": "1952-01-01" }),
    )
    .await;

    let link = json!({ "bookId": book_id, "publisherId": publisher_id });
    let (status, body) = post(&client, "/book_publishers", link.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "book": { "id": book_id, "name": "Fahrenheit 451" },
            "publisher": { "id": publisher_id, "name": "Ballantine" }
        })
    );

    let (status, _) = post(&client, "/book_publishers", link).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let key = format!("/book_publishers/{}/{}", book_id, publisher_id);
    let (status, fetched) = get(&client, &key).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);

    let (_, links) = get(&client, "/book_publishers").await;
    assert!(links.as_array().expect("link list").contains(&body));

    assert_eq!(
        get(&client, &format!("/books/publishers/{}", book_id)).await.1,
        json!([{ "id": publisher_id, "name": "Ballantine" }])
    );
    assert_eq!(
        get(&client, &format!("/publishers/books/{}", publisher_id)).await.1,
        json!([{ "id": book_id, "name": "Fahrenheit 451" }])
    );

    assert_eq!(delete(&client, &key).await, StatusCode::NO_CONTENT);

    let (status, body) = get(&client, &key).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        format!("BookPublisher with bookId={} and publisherId={} not found", book_id, publisher_id)
    );
}

#[tokio::test]
#[ignore]
async fn test_deleted_entity_is_not_found() {
    let client = Client::new();
    let editor_id = create_person(&client, "/editors", "Short", "Lived").await;

    let path = format!("/editors/{}", editor_id);
    assert_eq!(delete(&client, &path).await, StatusCode::NO_CONTENT);

    let (status, body) = get(&client, &path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], format!("Editor with id {} not found", editor_id));

    let response = client
        .put(format!("{}{}", BASE_URL, path))
        .json(&json!({ "lastName": "Again" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_shared_author_is_listed_once() {
    let client = Client::new();

    let book_id = create_book(&client, "Two Editors").await;
    let author_id = create_person(&client, "/authors", "Solo", "Writer").await;
    for last_name in ["First", "Second"] {
        let editor_id = create_person(&client, "/editors", "Ed", last_name).await;
        let (status, _) = post(
            &client,
            "/book_author_editors",
            json!({ "bookId": book_id, "authorId": author_id, "editorId": editor_id }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, authors) = get(&client, &format!("/books/authors/{}", book_id)).await;
    assert_eq!(authors, json!([{ "id": author_id, "firstName": "Solo", "lastName": "Writer" }]));

    let (_, books) = get(&client, &format!("/authors/books/{}", author_id)).await;
    assert_eq!(books.as_array().map(Vec::len), Some(1));

    let (_, editors) = get(&client, &format!("/books/editors/{}", book_id)).await;
    assert_eq!(editors.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
#[ignore]
async fn test_duplicate_isbn_conflicts() {
    let client = Client::new();
    let isbn = unique_isbn();
    let book = json!({
        "name": "Original",
        "isbn": isbn,
        "noPages": 10,
        "price": 1,
        "language": "English",
        "publishDate": "2000-01-01"
    });

    let (status, _) = post(&client, "/books", book.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(&client, "/books", book).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], format!("Book with isbn {} already exists", isbn));
}

#[tokio::test]
#[ignore]
async fn test_book_delete_cascades_to_links() {
    let client = Client::new();

    let book_id = create_book(&client, "Short Run").await;
    let author_id = create_person(&client, "/authors", "Cas", "Cade").await;
    let editor_id = create_person(&client, "/editors", "Del", "Ete").await;
    let category_id = create_named(&client, "/categories", json!({ "name": "Ephemera" })).await;

    post(
        &client,
        "/book_author_editors",
        json!({ "bookId": book_id, "authorId": author_id, "editorId": editor_id }),
    )
    .await;
    post(&client, "/book_categories", json!({ "bookId": book_id, "categoryId": category_id })).await;

    assert_eq!(delete(&client, &format!("/books/{}", book_id)).await, StatusCode::NO_CONTENT);

    let (status, _) = get(&client, &format!("/books/{}", book_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let key = format!("/book_author_editors/{}/{}/{}", book_id, author_id, editor_id);
    assert_eq!(get(&client, &key).await.0, StatusCode::NOT_FOUND);
    let key = format!("/book_categories/{}/{}", book_id, category_id);
    assert_eq!(get(&client, &key).await.0, StatusCode::NOT_FOUND);

    assert_eq!(get(&client, &format!("/authors/books/{}", author_id)).await.1, json!([]));
    assert_eq!(get(&client, &format!("/authors/{}", author_id)).await.0, StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_translator_delete_keeps_books() {
    let client = Client::new();

    let translator_id = create_person(&client, "/translators", "Gone", "Soon").await;
    let (_, book) = post(
        &client,
        "/books",
        json!({
            "name": "Orphaned",
            "isbn": unique_isbn(),
            "noPages": 50,
            "price": 3,
            "language": "German",
            "publishDate": "1999-01-01",
            "translatorId": translator_id
        }),
    )
    .await;
    let book_id = book["id"].as_i64().expect("book id");

    assert_eq!(
        delete(&client, &format!("/translators/{}", translator_id)).await,
        StatusCode::NO_CONTENT
    );

    let (status, body) = get(&client, &format!("/books/{}", book_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["translator"].is_null());
}

