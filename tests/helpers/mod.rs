#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use key_notes::api;
use key_notes::notes::{default_seeds, NoteStore};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// A seeded store in a fresh temp directory. Keep the `TempDir` alive.
pub fn test_store() -> (NoteStore, TempDir) {
    let tmp = TempDir::new().unwrap();
    let store = NoteStore::new(tmp.path().join("notes"), default_seeds());
    store.ensure_seeded().unwrap();
    (store, tmp)
}

/// Router over a seeded temp store, with `static/app.css` available.
pub fn test_app() -> (Router, Arc<NoteStore>, TempDir) {
    let (store, tmp) = test_store();
    let static_dir = tmp.path().join("static");
    std::fs::create_dir_all(&static_dir).unwrap();
    std::fs::write(static_dir.join("app.css"), "body { color: red; }").unwrap();

    let store = Arc::new(store);
    let router = api::router(Arc::clone(&store), static_dir);
    (router, store, tmp)
}

/// Send one request and collect the status, content type, and body bytes.
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: impl Into<Body>,
) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, bytes.to_vec())
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(router, "GET", uri, Body::empty()).await;
    (status, serde_json::from_slice(&body).unwrap())
}

pub async fn post_json(router: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(router, "POST", uri, body.to_string()).await;
    (status, serde_json::from_slice(&body).unwrap())
}
