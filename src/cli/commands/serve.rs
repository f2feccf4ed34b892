//! HTTP API server for integration with other systems.
//!
//! Provides REST endpoints for menu fetching, recommendations, and trivia.

use crate::cli::Output;
use crate::config::Settings;
use crate::facts;
use crate::orchestrator::Orchestrator;
use crate::preferences::PreferenceSet;
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared application state.
struct AppState {
    orchestrator: Orchestrator,
}

/// Run the HTTP API server.
pub async fn run_serve(host: &str, port: u16, settings: Settings) -> anyhow::Result<()> {
    let orchestrator = Orchestrator::new(settings)?;

    let state = Arc::new(AppState { orchestrator });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/menu", post(menu))
        .route("/recommend", post(recommend))
        .route("/fact", get(fact))
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Spis API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Fetch Menu", "POST /menu");
    Output::kv("Recommend", "POST /recommend");
    Output::kv("Trivia Fact", "GET  /fact");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct MenuRequest {
    /// Menu page URL; falls back to the configured dining center.
    #[serde(default)]
    url: Option<String>,
}

#[derive(Serialize)]
struct MenuResponse {
    transcript: String,
    /// Empty transcripts mean the fetch failed; say so explicitly.
    fetched: bool,
}

#[derive(Deserialize)]
struct RecommendRequest {
    /// Pre-fetched transcript; when absent the menu is fetched from `url`.
    #[serde(default)]
    transcript: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    preferences: PreferenceSet,
}

#[derive(Serialize)]
struct RecommendResponse {
    recommendation: String,
}

#[derive(Serialize)]
struct FactResponse {
    fact: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn menu(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MenuRequest>,
) -> impl IntoResponse {
    let url = req
        .url
        .unwrap_or_else(|| state.orchestrator.menu_url().to_string());
    let transcript = state.orchestrator.fetch_menu(&url).await;
    let fetched = !transcript.is_empty();
    Json(MenuResponse {
        transcript,
        fetched,
    })
}

async fn recommend(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecommendRequest>,
) -> impl IntoResponse {
    if req.preferences.is_empty() {
        return (
            axum::http::StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Please select at least one preference or add a custom request."
                    .to_string(),
            }),
        )
            .into_response();
    }

    let transcript = match req.transcript {
        Some(t) => t,
        None => {
            let url = req
                .url
                .unwrap_or_else(|| state.orchestrator.menu_url().to_string());
            state.orchestrator.fetch_menu(&url).await
        }
    };

    let recommendation = state
        .orchestrator
        .recommend(&transcript, &req.preferences)
        .await;

    Json(RecommendResponse { recommendation }).into_response()
}

async fn fact() -> impl IntoResponse {
    Json(FactResponse {
        fact: facts::random_fact(),
    })
}
