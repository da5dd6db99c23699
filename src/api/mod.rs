//! HTTP surface: the JSON notes API, the embedded UI, and static assets.
//!
//! [`router`] builds the full route table. Every route answers unknown
//! methods with a plain 404, the same as unknown paths.

pub mod notes;
pub mod ui;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, get_service, MethodRouter};
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::notes::NoteStore;

/// Errors a request handler can answer with. Each maps to a status code and a
/// `{"error": "..."}` body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(e) => {
                tracing::error!("request failed: {e:#}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Build the application router over `store`, serving `/static/*` from `static_dir`.
pub fn router(store: Arc<NoteStore>, static_dir: impl Into<PathBuf>) -> Router {
    let static_files: MethodRouter =
        get_service(ServeDir::new(static_dir.into())).fallback(not_found);

    Router::new()
        .route("/", get(ui::index).fallback(not_found))
        .route("/index.html", get(ui::index).fallback(not_found))
        .route("/api/notes", get(notes::list_notes).fallback(not_found))
        .route(
            "/api/notes/{id}",
            get(notes::get_note)
                .post(notes::save_note)
                .fallback(not_found),
        )
        .nest_service("/static", static_files)
        .fallback(not_found)
        .with_state(store)
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
