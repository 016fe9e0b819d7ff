//! HTTP front for a built site.
//!
//! Pages are served from memory at `/<file>` as `text/html`; everything
//! else falls through to the output directory. Unknown paths, including
//! the dangling `/register.php`, get a plain 404.

use std::{net::SocketAddr, path::Path};

use axum::{Router, response::Html, routing::get};
use color_eyre::Section;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::pipeline::EmittedPage;

pub fn router<'a>(pages: impl IntoIterator<Item = &'a EmittedPage>, asset_dir: &Path) -> Router {
    let mut app = Router::new();
    for emitted in pages {
        let html = emitted.html.clone();
        let route = format!("/{}", emitted.page.file_name());
        app = app.route(&route, get(move || async move { Html(html) }));
    }

    app.fallback_service(ServeDir::new(asset_dir))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(app: Router, addr: SocketAddr) -> color_eyre::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_note(|| format!("While binding {addr}"))?;
    info!(%addr, "serving site");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
