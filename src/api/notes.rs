//! Route handlers for `/api/notes`.
//!
//! Storage is synchronous file I/O, so every handler hops onto the blocking
//! pool before touching disk.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::Value;
use std::sync::Arc;

use super::ApiError;
use crate::notes::{Note, NoteStore, NoteSummary};

// GET /api/notes
pub async fn list_notes(
    State(store): State<Arc<NoteStore>>,
) -> Result<Json<Vec<NoteSummary>>, ApiError> {
    let notes = run_blocking(move || store.list()).await?;
    Ok(Json(notes))
}

// GET /api/notes/{id}
pub async fn get_note(
    State(store): State<Arc<NoteStore>>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    validate_id(&id)?;
    run_blocking(move || store.get(&id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

// POST /api/notes/{id}
pub async fn save_note(
    State(store): State<Arc<NoteStore>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    validate_id(&id)?;
    let content = parse_content(&body)?;

    tracing::info!(id = %id, bytes = content.len(), "saving note");
    run_blocking(move || store.write(&id, &content)).await?;

    Ok(Json(serde_json::json!({ "status": "ok" })))
}

/// Pull `content` out of a `{"content": "..."}` body.
///
/// The Content-Type header is ignored. A missing or null `content` means an
/// empty note; anything that is not a JSON object, or a `content` that is not a
/// string, is rejected.
pub fn parse_content(body: &[u8]) -> Result<String, ApiError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {e}")))?;

    let Value::Object(mut fields) = value else {
        return Err(ApiError::BadRequest("request body must be a JSON object".into()));
    };

    match fields.remove("content") {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ApiError::BadRequest("`content` must be a string".into())),
    }
}

/// Reject ids that could name a file outside the notes directory.
pub fn validate_id(id: &str) -> Result<(), ApiError> {
    let escapes = matches!(id, "" | "." | "..") || id.contains(['/', '\\', '\0']);
    if escapes {
        return Err(ApiError::BadRequest("invalid note id".into()));
    }
    Ok(())
}

async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| anyhow::anyhow!("storage task failed: {e}"))?
        .map_err(ApiError::Internal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_content_reads_string() {
        assert_eq!(parse_content(br##"{"content": "# X\n\nbody"}"##).unwrap(), "# X\n\nbody");
    }

    #[test]
    fn parse_content_missing_or_null_is_empty() {
        assert_eq!(parse_content(b"{}").unwrap(), "");
        assert_eq!(parse_content(br#"{"content": null}"#).unwrap(), "");
        assert_eq!(parse_content(br#"{"other": 1}"#).unwrap(), "");
    }

    #[test]
    fn parse_content_rejects_bad_bodies() {
        let bodies: [&[u8]; 5] = [b"", b"not json", b"[]", b"\"text\"", br#"{"content": 5}"#];
        for body in bodies {
            assert!(
                matches!(parse_content(body), Err(ApiError::BadRequest(_))),
                "body {:?} should be rejected",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn validate_id_accepts_plain_ids() {
        assert!(validate_id("note-01").is_ok());
        assert!(validate_id("note-99").is_ok());
        assert!(validate_id("scratch").is_ok());
        assert!(validate_id("v1..2").is_ok());
        assert!(validate_id("..hidden").is_ok());
    }

    #[test]
    fn validate_id_rejects_escapes() {
        for id in ["", ".", "..", "../etc/passwd", "..\\win", "a/b", "a\\b", "x\0y"] {
            assert!(validate_id(id).is_err(), "{id:?} should be rejected");
        }
    }
}
