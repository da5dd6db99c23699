//! Local Markdown notes served over a tiny JSON API.
//!
//! key-notes keeps each note as a plain `<id>.md` file in one directory and
//! exposes them to a bundled single-page UI over loopback HTTP:
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/`, `/index.html` | the UI |
//! | GET | `/api/notes` | `[{id, title}, ...]` in seed order |
//! | GET | `/api/notes/{id}` | `{id, content}` or 404 `{error}` |
//! | POST | `/api/notes/{id}` | writes `{content}`, answers `{status: "ok"}` |
//! | GET | `/static/{path}` | file from the static directory |
//!
//! # Modules
//!
//! - [`config`]: configuration from TOML and environment variables
//! - [`notes`]: flat-file storage, seeding, and title derivation
//! - [`api`]: axum route table and handlers
//! - [`server`]: port selection and server startup

pub mod api;
pub mod config;
pub mod notes;
pub mod server;
