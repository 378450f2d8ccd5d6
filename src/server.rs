//! HTTP surface for the analyzer page.
//!
//! One action event (`POST /analyze`) runs one [`Analyzer::analyze`]
//! transaction and re-renders the page. `POST /api/analyze` exposes the same
//! action as JSON.

use std::sync::Arc;

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::{
    error::{CricketError, Result},
    models::AnalyzeOutcome,
    presenter::{render_page, Analyzer},
};


/// Shared between request handlers
#[derive(Clone)]
pub struct ServerState {
    pub analyzer: Arc<Analyzer>,
}

/// Form and JSON body of an analyze action
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub player_name: String,
}

pub fn router(analyzer: Arc<Analyzer>) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/analyze", post(handle_analyze))
        .route("/api/analyze", post(handle_analyze_json))
        .route("/health", get(handle_health))
        .layer(CorsLayer::permissive())
        .with_state(ServerState { analyzer })
}

/// Bind `addr` and serve until the process is stopped.
pub async fn run(analyzer: Arc<Analyzer>, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("serving on http://{}", listener.local_addr()?);

    axum::serve(listener, router(analyzer))
        .await
        .map_err(|e| CricketError::Server {
            message: e.to_string(),
        })
}

pub async fn handle_index() -> Html<String> {
    Html(render_page("", &AnalyzeOutcome::Idle))
}

pub async fn handle_analyze(
    State(state): State<ServerState>,
    Form(req): Form<AnalyzeRequest>,
) -> Html<String> {
    let outcome = state.analyzer.analyze(&req.player_name).await;
    log_outcome(&req.player_name, &outcome);
    Html(render_page(&req.player_name, &outcome))
}

pub async fn handle_analyze_json(
    State(state): State<ServerState>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalyzeOutcome> {
    let outcome = state.analyzer.analyze(&req.player_name).await;
    log_outcome(&req.player_name, &outcome);
    Json(outcome)
}

pub async fn handle_health() -> &'static str {
    "ok"
}

fn log_outcome(name: &str, outcome: &AnalyzeOutcome) {
    match outcome {
        AnalyzeOutcome::Found(view) => log::info!("analyze {name:?}: found {}", view.profile.full_name),
        other => log::info!("analyze {name:?}: {}", other.banner().unwrap_or("idle")),
    }
}
