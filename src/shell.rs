//! Desktop shell: start the server in the background, then show the UI.
//!
//! With the `window` feature the UI gets its own native window (tao + wry)
//! and the process exits when it closes. Otherwise the default browser is
//! pointed at the server and the process runs until Ctrl-C.

use anyhow::{Context, Result};
use std::sync::Arc;

use key_notes::api;
use key_notes::config::NotesConfig;
use key_notes::server;

/// Seed storage, start the server on a free port, and block on the UI.
pub fn run(config: NotesConfig) -> Result<()> {
    let store = server::open_store(&config)?;
    let listener = server::bind_first_free(config.server.port, config.server.port_attempts)?;
    let url = format!("http://{}/", listener.local_addr()?);
    let router = api::router(Arc::new(store), config.resolved_static_dir());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("key-notes-http")
        .build()
        .context("failed to start async runtime")?;

    // The listener is already bound, so the UI can connect as soon as it loads.
    runtime.spawn(async move {
        if let Err(e) = server::serve(listener, router, std::future::pending()).await {
            tracing::error!("server stopped: {e:#}");
        }
    });

    show_ui(&config, &url, runtime)
}

#[cfg(feature = "window")]
fn show_ui(config: &NotesConfig, url: &str, runtime: tokio::runtime::Runtime) -> Result<()> {
    use tao::dpi::LogicalSize;
    use tao::event::{Event, WindowEvent};
    use tao::event_loop::{ControlFlow, EventLoop};
    use tao::window::WindowBuilder;
    use wry::WebViewBuilder;

    let win = &config.window;
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(win.title.as_str())
        .with_inner_size(LogicalSize::new(win.width, win.height))
        .with_min_inner_size(LogicalSize::new(win.min_width, win.min_height))
        .build(&event_loop)
        .context("failed to create window")?;

    let builder = WebViewBuilder::new()
        .with_url(url)
        .with_background_color(win.background_rgba())
        .with_devtools(win.devtools);

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).context("failed to create webview")?;
    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .context("window has no GTK container")?;
        builder.build_gtk(vbox).context("failed to create webview")?
    };

    tracing::info!(%url, "window open");

    // Never returns. The server runtime dies with the process.
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        let _ = (&window, &webview, &runtime);
        if let Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } = event
        {
            *control_flow = ControlFlow::Exit;
        }
    })
}

#[cfg(not(feature = "window"))]
fn show_ui(_config: &NotesConfig, url: &str, runtime: tokio::runtime::Runtime) -> Result<()> {
    println!("key-notes running at {url}");
    if let Err(e) = open::that_detached(url) {
        tracing::warn!("could not open a browser ({e}); visit {url} manually");
    }
    println!("Press Ctrl-C to quit.");

    runtime
        .block_on(tokio::signal::ctrl_c())
        .context("failed to listen for ctrl-c")?;
    tracing::info!("shutting down");
    Ok(())
}
