mod assets;
mod chrome;
mod pages;
mod partials;

use anyhow::Result;
use axum::Router;
use axum::routing::get;

#[derive(Clone)]
pub(crate) struct AppState {
    /// Page title, interpolated into the navbar and the about modal.
    pub title: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let title = std::env::var("SIDELINE_TITLE").ok().unwrap_or_default();

    if title.is_empty() {
        tracing::warn!("no title set, navbar text and modal header will be empty");
    }

    let state = AppState { title };

    let app = Router::new()
        .route("/", get(pages::index::index))
        .route("/app.css", get(assets::css))
        .with_state(state);

    tracing::info!("serving on localhost:8000");
    let listener = tokio::net::TcpListener::bind("localhost:8000").await?;
    axum::serve(listener, app).await?;

    Ok(())
}
