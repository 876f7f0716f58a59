//! HTTP surface
//!
//! Four JSON POST endpoints, one per pipeline stage, plus the static page.
//! Every failure leaves through [`error::ApiError`] as `{"error": ...}` with
//! status 500.

pub mod error;
pub mod handlers;

pub use error::{status_for, ApiError, ErrorBody};

use crate::config::RozbijaczConfig;
use crate::llm::LLMClient;
use crate::pipeline::CoachingPipeline;
use anyhow::Context;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared, read-only state handed to every handler
#[derive(Clone, Debug)]
pub struct AppState {
    pub pipeline: Arc<CoachingPipeline>,
    pub config: Arc<RozbijaczConfig>,
}

impl AppState {
    pub fn new(config: RozbijaczConfig, llm_client: Arc<dyn LLMClient>) -> Self {
        Self {
            pipeline: Arc::new(CoachingPipeline::new(llm_client)),
            config: Arc::new(config),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let index = ServeFile::new(static_dir.join("index.html"));

    Router::new()
        .route("/start-conversation", post(handlers::start_conversation))
        .route("/get-blockers", post(handlers::get_blockers))
        .route("/generate-final-steps", post(handlers::generate_final_steps))
        .route("/generate-action-steps", post(handlers::generate_action_steps))
        .route_service("/", index)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C
pub async fn serve(config: RozbijaczConfig, llm_client: Arc<dyn LLMClient>) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let state = AppState::new(config, llm_client);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated with error")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
