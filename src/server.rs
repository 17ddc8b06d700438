//! Preview host.
//!
//! Serves a transcript loaded at start-up as a rendered chat page. The
//! transcript is read-only for the lifetime of the server.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::message::Transcript;
use crate::render::{displayed_messages, render_chat_window, render_page};

/// State shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Conversation being previewed.
    pub transcript: Arc<Transcript>,
    /// Global configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, transcript: Transcript) -> Self {
        Self {
            transcript: Arc::new(transcript),
            config: Arc::new(config),
        }
    }
}

/// Query parameters accepted by the render routes.
#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    /// Show the loading indicator.
    #[serde(default)]
    pub loading: bool,
}

/// Build the router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/fragment", get(fragment_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: AppConfig, transcript: Transcript) -> anyhow::Result<()> {
    let address = config.bind_address();
    let message_count = transcript.len();
    let app = router(AppState::new(config, transcript));

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!(
        name: "server.started",
        address = %format!("http://{address}"),
        messages = message_count,
        "Server started"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

async fn index_handler(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
) -> Html<String> {
    Html(render_page(
        &state.config.page.title,
        &state.transcript,
        query.loading,
        &state.config.view,
    ))
}

async fn fragment_handler(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
) -> Html<String> {
    let messages = displayed_messages(&state.transcript, &state.config.view);
    Html(render_chat_window(&messages, query.loading, &state.config.view))
}

async fn health_handler() -> &'static str {
    "ok"
}
