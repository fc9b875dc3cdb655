//! Stub search server for HTTP integration tests.
//!
//! Serves a small book catalogue at `/search` with case-insensitive substring
//! matching capped at five results, plus endpoints that misbehave on purpose.

use std::collections::HashMap;

use axum::{
    extract::Query as QueryParams,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

const CATALOGUE: &[(&str, &str)] = &[
    ("Dune", "Frank Herbert"),
    ("Dune Messiah", "Frank Herbert"),
    ("Children of Dune", "Frank Herbert"),
    ("God Emperor of Dune", "Frank Herbert"),
    ("Heretics of Dune", "Frank Herbert"),
    ("Chapterhouse: Dune", "Frank Herbert"),
    ("The Hobbit", "J.R.R. Tolkien"),
    ("War & Peace", "Leo Tolstoy"),
];

async fn search(QueryParams(params): QueryParams<HashMap<String, String>>) -> Json<Vec<Value>> {
    let query = params.get("query").map(|q| q.to_lowercase()).unwrap_or_default();
    if query.is_empty() {
        return Json(Vec::new());
    }
    let results = CATALOGUE
        .iter()
        .filter(|(title, _)| title.to_lowercase().contains(&query))
        .take(5)
        .map(|(title, author)| json!({ "title": title, "author": author }))
        .collect();
    Json(results)
}

async fn broken() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn garbled() -> impl IntoResponse {
    ([("content-type", "application/json")], r#"{"title": "not an array"}"#)
}

async fn titles_only() -> impl IntoResponse {
    ([("content-type", "application/json")], r#"[{"title": "Dune", "year": 1965}]"#)
}

/// Start the stub server on an ephemeral port and return its base URL.
pub async fn spawn_stub_server() -> String {
    let app = Router::new()
        .route("/search", get(search))
        .route("/broken/search", get(broken))
        .route("/garbled/search", get(garbled))
        .route("/titles/search", get(titles_only));

    let listener =
        tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub server failed");
    });
    format!("http://{addr}")
}
