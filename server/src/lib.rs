use anyhow::Result;
use axum::{extract::{DefaultBodyLimit, State}, http::StatusCode, routing::{get, post}, Json, Router};
use serde::{Deserialize, Serialize};
use summary_core::{Limits, Summarizer};
use tower_http::cors::{Any, CorsLayer, AllowOrigin};
use tower_http::trace::TraceLayer;

/// Smallest accepted `/summarize` body; text past `max_input_bytes` is truncated, not rejected.
pub const MIN_BODY_LIMIT: usize = 16 * 1024 * 1024;
// a JSON string may spend up to six bytes ("\u00XX") per input byte
const JSON_ESCAPE_FACTOR: usize = 6;
const BODY_SLACK: usize = 64 * 1024;

/// Largest request body `/summarize` reads before answering 413.
pub fn body_limit(limits: &Limits) -> usize {
    limits.max_input_bytes.saturating_mul(JSON_ESCAPE_FACTOR).saturating_add(BODY_SLACK).max(MIN_BODY_LIMIT)
}

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default = "default_depth")]
    pub depth: i64,
}
fn default_depth() -> i64 { 1 }

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub depth: i64,
    pub sentence_count: usize,
    pub took_s: f64,
    pub positions: Vec<usize>,
    pub sentences: Vec<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub summarizer: Summarizer,
}

pub fn build_app(limits: Limits) -> Result<Router> {
    let max_body = body_limit(&limits);
    let app_state = AppState { summarizer: Summarizer::new().with_limits(limits).with_timing(true) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/summarize", post(summarize_handler).layer(DefaultBodyLimit::max(max_body)))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());
    Ok(app)
}

pub async fn summarize_handler(State(state): State<AppState>, Json(req): Json<SummarizeRequest>) -> Result<Json<SummarizeResponse>, (StatusCode, String)> {
    let summarizer = state.summarizer.clone();
    let depth = req.depth;
    // scoring is CPU bound, keep it off the async workers
    let summary = tokio::task::spawn_blocking(move || summarizer.summarize_text(&req.text, depth))
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .map_err(|e| {
            tracing::error!(error = %e, "summarize failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    let took_s = summary.elapsed.map(|d| d.as_secs_f64()).unwrap_or_default();
    Ok(Json(SummarizeResponse {
        depth: summary.depth,
        sentence_count: summary.sentence_count,
        took_s,
        positions: summary.positions,
        sentences: summary.sentences,
    }))
}
