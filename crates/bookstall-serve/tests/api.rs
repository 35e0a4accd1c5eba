//! Router-level API tests against an in-memory store.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use bookstall_core::{Book, CatalogStore, MemoryStore, Review};
use bookstall_serve::{AppState, Config, router};

const TEST_KEY: &str = "test-secret";

fn test_config() -> Config {
    Config {
        bind_addr: "127.0.0.1:0".to_string(),
        api_key: TEST_KEY.to_string(),
        data_dir: PathBuf::from("unused"),
    }
}

fn app(store: Arc<MemoryStore>) -> Router {
    router(AppState::with_store(test_config(), store))
}

fn book(id: &str, featured: bool, date: &str, rating: f64, review_count: u32) -> Book {
    Book {
        id: id.to_string(),
        title: format!("Book {id}"),
        author: "A. Writer".to_string(),
        description: None,
        price: 10.0,
        image: None,
        isbn: None,
        genre: Some(vec!["Fiction".to_string()]),
        tags: None,
        date_published: date.to_string(),
        pages: None,
        language: None,
        publisher: None,
        rating,
        review_count,
        in_stock: true,
        featured,
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, api_key: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn ids(body: &Value) -> Vec<&str> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_str().unwrap())
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Listing and filters
// ═══════════════════════════════════════════════════════════════════════════

fn filter_fixture() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::seeded(
        vec![
            book("1", true, "2020-05-01", 0.0, 0),
            book("2", false, "2021-07-15", 0.0, 0),
            book("3", true, "2022-01-01", 0.0, 0),
            book("4", false, "not a date", 0.0, 0),
        ],
        Vec::new(),
    ))
}

#[tokio::test]
async fn list_without_filters_returns_everything_in_order() {
    let app = app(filter_fixture());
    let (status, body) = call(&app, get("/books")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 4);
    assert_eq!(ids(&body), vec!["1", "2", "3", "4"]);
}

#[tokio::test]
async fn featured_filter_is_an_order_preserving_subset() {
    let app = app(filter_fixture());

    let (_, featured) = call(&app, get("/books?featured=true")).await;
    assert_eq!(ids(&featured), vec!["1", "3"]);
    assert_eq!(featured["count"], 2);

    let (_, plain) = call(&app, get("/books?featured=false")).await;
    assert_eq!(ids(&plain), vec!["2", "4"]);
}

#[tokio::test]
async fn date_range_filter_is_inclusive_and_calendar_based() {
    let app = app(filter_fixture());

    let (_, body) = call(&app, get("/books?start=2020-05-01&end=2021-12-31")).await;
    assert_eq!(ids(&body), vec!["1", "2"]);
}

#[tokio::test]
async fn date_range_excludes_unparsable_publish_dates() {
    let app = app(filter_fixture());

    let (_, body) = call(&app, get("/books?start=1900-01-01&end=2100-01-01")).await;
    // Book 4 has a malformed datePublished and drops out of any active range.
    assert_eq!(ids(&body), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn date_range_requires_both_bounds() {
    let app = app(filter_fixture());

    let (_, body) = call(&app, get("/books?start=2022-01-01")).await;
    assert_eq!(body["count"], 4);
}

#[tokio::test]
async fn filters_compose_in_sequence() {
    let app = app(filter_fixture());

    let (_, body) = call(
        &app,
        get("/books?featured=true&start=2021-01-01&end=2022-12-31"),
    )
    .await;
    assert_eq!(ids(&body), vec!["3"]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Single lookup
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn get_book_returns_the_unique_match() {
    let app = app(filter_fixture());

    let (status, body) = call(&app, get("/books/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "2");
    assert_eq!(body["data"]["title"], "Book 2");
}

#[tokio::test]
async fn get_book_misses_with_404_envelope() {
    let app = app(filter_fixture());

    let (status, body) = call(&app, get("/books/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Book not found");
}

// ═══════════════════════════════════════════════════════════════════════════
// Book creation and authentication
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn create_book_without_key_is_rejected_and_persists_nothing() {
    let store = filter_fixture();
    let app = app(store.clone());

    let (status, body) = call(
        &app,
        post_json("/books", None, json!({"title": "T", "author": "A", "price": 5.0})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Unauthorized: Missing or invalid x-api-key");
    assert_eq!(store.load_books().await.unwrap().len(), 4);
}

#[tokio::test]
async fn create_book_with_wrong_key_is_rejected() {
    let store = filter_fixture();
    let app = app(store.clone());

    let (status, _) = call(
        &app,
        post_json(
            "/books",
            Some("wrong"),
            json!({"title": "T", "author": "A", "price": 5.0}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(store.load_books().await.unwrap().len(), 4);
}

#[tokio::test]
async fn create_book_synthesizes_id_and_defaults() {
    let store = filter_fixture();
    let app = app(store.clone());

    let (status, body) = call(
        &app,
        post_json(
            "/books",
            Some(TEST_KEY),
            json!({"title": "New Arrival", "author": "B. Author", "price": 15.5}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let data = &body["data"];
    assert_eq!(data["id"], "5");
    assert_eq!(data["rating"], 0.0);
    assert_eq!(data["reviewCount"], 0);
    assert_eq!(data["inStock"], true);
    assert_eq!(data["featured"], false);
    assert_eq!(
        data["datePublished"],
        chrono::Utc::now().date_naive().to_string()
    );

    let persisted = store.load_books().await.unwrap();
    assert_eq!(persisted.len(), 5);
    assert_eq!(persisted[4].title, "New Arrival");
}

#[tokio::test]
async fn create_book_payload_overrides_synthesized_fields() {
    let store = filter_fixture();
    let app = app(store.clone());

    let (status, body) = call(
        &app,
        post_json(
            "/books",
            Some(TEST_KEY),
            json!({
                "id": "custom-42",
                "title": "Pinned",
                "author": "C",
                "price": 1.0,
                "featured": true,
                "datePublished": "1999-09-09"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], "custom-42");
    assert_eq!(body["data"]["featured"], true);
    assert_eq!(body["data"]["datePublished"], "1999-09-09");
}

#[tokio::test]
async fn create_book_storage_failure_is_a_generic_500() {
    let store = filter_fixture();
    store.set_fail_writes(true);
    let app = app(store.clone());

    let (status, body) = call(
        &app,
        post_json(
            "/books",
            Some(TEST_KEY),
            json!({"title": "T", "author": "A", "price": 5.0}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to create book");
}

// ═══════════════════════════════════════════════════════════════════════════
// Top-rated ranking
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn top_rated_weighs_review_count_over_raw_rating() {
    let store = Arc::new(MemoryStore::seeded(
        vec![
            book("1", false, "2020-01-01", 4.0, 10),
            book("2", false, "2020-01-01", 5.0, 1),
        ],
        Vec::new(),
    ));
    let app = app(store);

    let (status, body) = call(&app, get("/books/top-rated")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["1", "2"]);
    assert_eq!(body["data"][0]["popularityScore"], 40.0);
    assert_eq!(body["data"][1]["popularityScore"], 5.0);
}

#[tokio::test]
async fn top_rated_caps_at_ten_with_non_increasing_scores() {
    let books: Vec<Book> = (1..=12)
        .map(|i| book(&i.to_string(), false, "2020-01-01", 4.0, i))
        .collect();
    let app = app(Arc::new(MemoryStore::seeded(books, Vec::new())));

    let (_, body) = call(&app, get("/books/top-rated")).await;
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 10);

    let scores: Vec<f64> = entries
        .iter()
        .map(|entry| entry["popularityScore"].as_f64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

// ═══════════════════════════════════════════════════════════════════════════
// Reviews and derived statistics
// ═══════════════════════════════════════════════════════════════════════════

fn review_payload(rating: f64) -> Value {
    json!({"author": "Reader", "rating": rating, "comment": "thoughts"})
}

#[tokio::test]
async fn reviews_update_the_owning_books_aggregate() {
    let store = Arc::new(MemoryStore::seeded(
        vec![book("1", false, "2020-01-01", 0.0, 0)],
        Vec::new(),
    ));
    let app = app(store);

    let (status, first) = call(
        &app,
        post_json("/books/1/reviews", Some(TEST_KEY), review_payload(4.0)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["data"]["bookId"], "1");
    assert_eq!(first["data"]["verified"], false);

    let (status, _) = call(
        &app,
        post_json("/books/1/reviews", Some(TEST_KEY), review_payload(5.0)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, listed) = call(&app, get("/books/1/reviews")).await;
    assert_eq!(listed["count"], 2);

    let (_, owner) = call(&app, get("/books/1")).await;
    assert_eq!(owner["data"]["rating"], 4.5);
    assert_eq!(owner["data"]["reviewCount"], 2);
}

#[tokio::test]
async fn listing_reviews_filters_by_book_id() {
    let store = Arc::new(MemoryStore::seeded(
        vec![
            book("1", false, "2020-01-01", 0.0, 0),
            book("2", false, "2020-01-01", 0.0, 0),
        ],
        vec![
            Review {
                id: "review-a".to_string(),
                book_id: "1".to_string(),
                author: "R1".to_string(),
                rating: 3.0,
                title: None,
                comment: "ok".to_string(),
                timestamp: "2026-01-01T00:00:00.000Z".to_string(),
                verified: Some(false),
            },
            Review {
                id: "review-b".to_string(),
                book_id: "2".to_string(),
                author: "R2".to_string(),
                rating: 5.0,
                title: None,
                comment: "great".to_string(),
                timestamp: "2026-01-02T00:00:00.000Z".to_string(),
                verified: Some(true),
            },
        ],
    ));
    let app = app(store);

    let (_, body) = call(&app, get("/books/2/reviews")).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["id"], "review-b");
}

#[tokio::test]
async fn review_for_unknown_book_is_stored_without_stats_update() {
    let store = Arc::new(MemoryStore::seeded(
        vec![book("1", false, "2020-01-01", 0.0, 0)],
        Vec::new(),
    ));
    let app = app(store.clone());

    let (status, _) = call(
        &app,
        post_json("/books/ghost/reviews", Some(TEST_KEY), review_payload(5.0)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // The orphan review is listed...
    let (_, listed) = call(&app, get("/books/ghost/reviews")).await;
    assert_eq!(listed["count"], 1);

    // ...and no book was touched.
    let books = store.load_books().await.unwrap();
    assert_eq!(books[0].rating, 0.0);
    assert_eq!(books[0].review_count, 0);
}

#[tokio::test]
async fn review_book_id_override_does_not_feed_the_path_books_stats() {
    let store = Arc::new(MemoryStore::seeded(
        vec![
            book("1", false, "2020-01-01", 0.0, 0),
            book("2", false, "2020-01-01", 0.0, 0),
        ],
        Vec::new(),
    ));
    let app = app(store.clone());

    let (status, body) = call(
        &app,
        post_json(
            "/books/1/reviews",
            Some(TEST_KEY),
            json!({"author": "R", "rating": 5.0, "comment": "c", "bookId": "2"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["bookId"], "2");

    // Statistics follow the path id; the redirected review matches none of
    // book 1's reviews, and book 2's stats are never recomputed here.
    let books = store.load_books().await.unwrap();
    assert_eq!(books[0].review_count, 0);
    assert_eq!(books[1].review_count, 0);
}

#[tokio::test]
async fn create_review_without_key_is_rejected_and_persists_nothing() {
    let store = Arc::new(MemoryStore::seeded(
        vec![book("1", false, "2020-01-01", 0.0, 0)],
        Vec::new(),
    ));
    let app = app(store.clone());

    let (status, _) = call(&app, post_json("/books/1/reviews", None, review_payload(4.0))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(store.load_reviews().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_review_storage_failure_is_a_generic_500() {
    let store = Arc::new(MemoryStore::seeded(
        vec![book("1", false, "2020-01-01", 0.0, 0)],
        Vec::new(),
    ));
    store.set_fail_writes(true);
    let app = app(store);

    let (status, body) = call(
        &app,
        post_json("/books/1/reviews", Some(TEST_KEY), review_payload(4.0)),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to add review");
}
