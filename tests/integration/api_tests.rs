//! API integration tests

use catalog_server::{api, config::AppConfig, AppState};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

/// Start a server with a fresh catalog and return its base URL
async fn spawn_server(config: AppConfig) -> String {
    let app = api::create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{}", addr)
}

async fn spawn_default() -> String {
    spawn_server(AppConfig::default()).await
}

async fn checkout(client: &Client, base: &str, id: &str) -> (StatusCode, Value) {
    let response = client
        .patch(format!("{}/checkout?id={}", base, id))
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    (status, response.json().await.expect("Failed to parse response"))
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_default().await;

    let response = reqwest::get(format!("{}/health", base))
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 4);
}

#[tokio::test]
async fn test_list_books() {
    let base = spawn_default().await;

    let response = reqwest::get(format!("{}/books", base))
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body.as_array().expect("Expected an array");
    assert_eq!(books.len(), 4);
    assert_eq!(
        books[0],
        json!({
            "id": "1",
            "title": "Little Women",
            "author": "Louisa May Alcott",
            "quantity": 3
        })
    );
}

#[tokio::test]
async fn test_get_book() {
    let base = spawn_default().await;

    let response = reqwest::get(format!("{}/books/3", base))
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Red Rising");
    assert_eq!(body["quantity"], 4);
}

#[tokio::test]
async fn test_get_book_not_found() {
    let base = spawn_default().await;

    let response = reqwest::get(format!("{}/books/999", base))
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "message": "Book not found." }));
}

#[tokio::test]
async fn test_checkout_until_unavailable() {
    let base = spawn_default().await;
    let client = Client::new();

    for expected in [2, 1, 0] {
        let (status, body) = checkout(&client, &base, "1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["quantity"], expected);
    }

    let (status, body) = checkout(&client, &base, "1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Book unavailable." }));

    let body: Value = reqwest::get(format!("{}/books/1", base))
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["quantity"], 0);
}

#[tokio::test]
async fn test_checkout_missing_id() {
    let base = spawn_default().await;
    let client = Client::new();

    let response = client
        .patch(format!("{}/checkout", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Missing ID query parameter.");
}

#[tokio::test]
async fn test_checkout_not_found() {
    let base = spawn_default().await;
    let client = Client::new();

    let (status, body) = checkout(&client, &base, "999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Book not found.");
}

#[tokio::test]
async fn test_checkout_empty_id() {
    let base = spawn_default().await;
    let client = Client::new();

    let (status, body) = checkout(&client, &base, "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Book not found." }));
}

#[tokio::test]
async fn test_repeated_id_parameter() {
    let base = spawn_default().await;
    let client = Client::new();

    for path in ["checkout", "return"] {
        let response = client
            .patch(format!("{}/{}?id=1&id=2", base, path))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("application/json"), "{content_type}");

        let body: Value = response.json().await.expect("Failed to parse response");
        let message = body["message"].as_str().expect("No message in response");
        assert!(message.starts_with("Invalid query string"), "{message}");
    }

    let body: Value = reqwest::get(format!("{}/books/1", base))
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["quantity"], 3);
}

#[tokio::test]
async fn test_return_book() {
    let base = spawn_default().await;
    let client = Client::new();

    let response = client
        .patch(format!("{}/return?id=2", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], "2");
    assert_eq!(body["quantity"], 2);
}

#[tokio::test]
async fn test_return_errors() {
    let base = spawn_default().await;
    let client = Client::new();

    let response = client
        .patch(format!("{}/return", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .patch(format!("{}/return?id=999", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_and_get_book() {
    let base = spawn_default().await;
    let client = Client::new();

    let new_book = json!({
        "id": "5",
        "title": "Hamlet",
        "author": "William Shakespeare",
        "quantity": 2
    });

    let response = client
        .post(format!("{}/books", base))
        .json(&new_book)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, new_book);

    let fetched: Value = reqwest::get(format!("{}/books/5", base))
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(fetched, new_book);
}

#[tokio::test]
async fn test_create_duplicate_id() {
    let base = spawn_default().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .json(&json!({
            "id": "1",
            "title": "Copycat",
            "author": "Someone",
            "quantity": 1
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book with this ID already exists.");
}

#[tokio::test]
async fn test_create_malformed_body() {
    let base = spawn_default().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .header("Content-Type", "application/json")
        .body("{\"id\": \"6\", \"title\": ")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());

    // negative quantity cannot be represented
    let response = client
        .post(format!("{}/books", base))
        .json(&json!({
            "id": "6",
            "title": "Negative",
            "author": "Nobody",
            "quantity": -1
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let books: Value = reqwest::get(format!("{}/books", base))
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(books.as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn test_create_empty_title() {
    let base = spawn_default().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .json(&json!({
            "id": "7",
            "title": "",
            "author": "Someone",
            "quantity": 1
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book title is required");
}

#[tokio::test]
async fn test_unseeded_catalog() {
    let mut config = AppConfig::default();
    config.catalog.seed = false;
    let base = spawn_server(config).await;

    let body: Value = reqwest::get(format!("{}/books", base))
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_openapi_document() {
    let base = spawn_default().await;

    let response = reqwest::get(format!("{}/api-docs/openapi.json", base))
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["paths"]["/checkout"]["patch"].is_object());
}

#[tokio::test]
async fn test_create_without_quantity() {
    let base = spawn_default().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .json(&json!({
            "id": "8",
            "title": "Middlemarch",
            "author": "George Eliot"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["quantity"], 0);

    let (status, body) = checkout(&client, &base, "8").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Book unavailable.");
}

#[tokio::test]
async fn test_create_missing_title() {
    let base = spawn_default().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .json(&json!({
            "id": "9",
            "author": "Someone",
            "quantity": 1
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    let message = body["message"].as_str().expect("No message in response");
    assert!(message.starts_with("Invalid book payload"), "{message}");
    assert!(message.contains("title"), "{message}");

    let response = reqwest::get(format!("{}/books/9", base))
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
