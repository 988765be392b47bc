//! HTTP handlers for the web UI

use crate::crawler::CrawlController;
use crate::progress::BroadcastSink;
use crate::url::split_url_list;
use crate::ScrapeError;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{
        sse::{Event, KeepAlive, Sse},
        Html, IntoResponse, Response,
    },
    routing::{get, post},
    Json, Router,
};
use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use serde_json::json;
use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use tower_http::trace::TraceLayer;

const INDEX_HTML: &str = include_str!("index.html");

/// Shared state of the web server
#[derive(Clone)]
pub struct AppState {
    controller: CrawlController<BroadcastSink>,
    events: BroadcastSink,
    csv_path: Arc<PathBuf>,
}

impl AppState {
    /// Bundles the controller, the sink it reports to, and the export path
    pub fn new(
        controller: CrawlController<BroadcastSink>,
        events: BroadcastSink,
        csv_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            controller,
            events,
            csv_path: Arc::new(csv_path.into()),
        }
    }
}

/// Builds the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/start_scraping", post(start_scraping))
        .route("/stop_scraping", post(stop_scraping))
        .route("/download_csv", get(download_csv))
        .route("/get_status", get(get_status))
        .route("/events", get(events))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct StartRequest {
    /// Newline-separated URL list
    #[serde(default)]
    urls: String,
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn start_scraping(
    State(state): State<AppState>,
    Json(request): Json<StartRequest>,
) -> Response {
    if request.urls.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No URLs provided");
    }

    let urls = split_url_list(&request.urls);
    if urls.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No valid URLs found");
    }

    let total = urls.len();
    match state.controller.start(urls) {
        Ok(_handle) => Json(json!({
            "message": format!("Started scraping {} websites", total),
            "total_urls": total,
        }))
        .into_response(),
        Err(ScrapeError::Busy) => {
            error_response(StatusCode::CONFLICT, "Scraping is already in progress")
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

async fn stop_scraping(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.controller.stop();
    Json(json!({ "message": "Scraping stopped" }))
}

async fn get_status(State(state): State<AppState>) -> Response {
    Json(state.controller.status()).into_response()
}

async fn download_csv(State(state): State<AppState>) -> Response {
    let bytes = match tokio::fs::read(state.csv_path.as_path()).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return error_response(StatusCode::NOT_FOUND, "CSV file not found");
        }
        Err(e) => {
            tracing::error!("Failed to read {}: {}", state.csv_path.display(), e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    let file_name = state
        .csv_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("business_info.csv");

    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// Streams progress notifications as Server-Sent Events
///
/// Sends `connected` first, then one event per notification named after
/// the notification. A client that falls behind gets a `lagged` event with
/// the number of notifications it missed.
async fn events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.events.subscribe();

    let connected =
        stream::once(async { Ok::<_, Infallible>(Event::default().event("connected").data("ok")) });

    let updates = BroadcastStream::new(rx).filter_map(|result| async move {
        match result {
            Ok(event) => Event::default()
                .event(event.name())
                .json_data(&event)
                .ok()
                .map(Ok),
            Err(BroadcastStreamRecvError::Lagged(n)) => Event::default()
                .event("lagged")
                .json_data(json!({ "missed": n }))
                .ok()
                .map(Ok),
        }
    });

    Sse::new(connected.chain(updates)).keep_alive(KeepAlive::default())
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}
