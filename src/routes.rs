use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::entry::{summarize, EntrySummary};
use crate::fetcher::Fetcher;
use crate::page;

pub struct AppState {
    pub config: Arc<Config>,
    pub fetcher: Fetcher,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/f", get(fizzbuzz))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Custom error type
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error: {}", self.0),
        )
            .into_response()
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        AppError(err.into())
    }
}

// Route handlers
pub async fn index(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let config = &state.config;
    let entries = state
        .fetcher
        .aggregate(&config.feeds, config.max_entries)
        .await;
    let summaries: Vec<EntrySummary> = entries.iter().map(summarize).collect();

    Ok(Html(page::render(&config.profile, &summaries)?))
}

pub async fn fizzbuzz() -> String {
    fizzbuzz_lines(100)
}

/// FizzBuzz for `1..=n`, one value per line.
pub fn fizzbuzz_lines(n: u32) -> String {
    (1..=n)
        .map(|i| match (i % 3, i % 5) {
            (0, 0) => "FizzBuzz".to_string(),
            (0, _) => "Fizz".to_string(),
            (_, 0) => "Buzz".to_string(),
            _ => i.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn health() -> impl IntoResponse {
    Html("OK")
}
