//! HTTP server startup.
//!
//! Provides [`open_store`] (seeded storage from config), [`bind_first_free`]
//! (loopback port search), and [`serve`] / [`serve_headless`] which run the
//! axum router until a shutdown signal.

use anyhow::{bail, Context, Result};
use std::future::Future;
use std::io::ErrorKind;
use std::net::TcpListener;
use std::sync::Arc;

use crate::api;
use crate::config::{NotesConfig, LOOPBACK_HOST};
use crate::notes::{default_seeds, NoteStore};

/// Build the note store from config and seed any missing notes.
pub fn open_store(config: &NotesConfig) -> Result<NoteStore> {
    let dir = config.resolved_notes_dir();
    let store = NoteStore::new(&dir, default_seeds());
    store
        .ensure_seeded()
        .with_context(|| format!("notes directory {} is not usable", dir.display()))?;
    tracing::info!(dir = %dir.display(), "note storage ready");
    Ok(store)
}

/// Bind the first free loopback port at or above `preferred`, trying at most
/// `attempts` ports. The returned listener is already accepting connections.
pub fn bind_first_free(preferred: u16, attempts: u16) -> Result<TcpListener> {
    for offset in 0..attempts.max(1) {
        let Some(port) = preferred.checked_add(offset) else {
            break;
        };
        match TcpListener::bind((LOOPBACK_HOST, port)) {
            Ok(listener) => return Ok(listener),
            // Windows reports some reserved or in-use ports as PermissionDenied.
            Err(e) if matches!(e.kind(), ErrorKind::AddrInUse | ErrorKind::PermissionDenied) => {
                tracing::debug!(port, "port unavailable, trying next");
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to bind {LOOPBACK_HOST}:{port}"));
            }
        }
    }
    bail!(
        "no free port on {LOOPBACK_HOST} in {preferred}..{}",
        preferred.saturating_add(attempts.max(1) - 1)
    )
}

/// Serve `router` on an already-bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    router: axum::Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    listener
        .set_nonblocking(true)
        .context("failed to make listener non-blocking")?;
    let listener = tokio::net::TcpListener::from_std(listener)?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "serving notes at http://{addr}/");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

/// Seed, bind, and serve without a window until Ctrl-C.
pub async fn serve_headless(config: NotesConfig) -> Result<()> {
    let store = open_store(&config)?;
    let listener = bind_first_free(config.server.port, config.server.port_attempts)?;
    println!("key-notes running at http://{}/", listener.local_addr()?);

    let router = api::router(Arc::new(store), config.resolved_static_dir());
    serve(listener, router, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
        tracing::info!("shutting down");
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_port_in_use() {
        let taken = TcpListener::bind((LOOPBACK_HOST, 0)).unwrap();
        let taken_port = taken.local_addr().unwrap().port();

        match bind_first_free(taken_port, 20) {
            Ok(listener) => {
                let port = listener.local_addr().unwrap().port();
                assert!(port > taken_port);
            }
            // the next ports can legitimately all be taken on a busy machine
            Err(e) => assert!(e.to_string().contains("no free port")),
        }
    }

    #[test]
    fn exhausting_attempts_is_an_error() {
        let taken = TcpListener::bind((LOOPBACK_HOST, 0)).unwrap();
        let taken_port = taken.local_addr().unwrap().port();

        let err = bind_first_free(taken_port, 1).unwrap_err();
        assert!(err.to_string().contains("no free port"));
    }
}
