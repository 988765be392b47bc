//! Web UI for running crawls interactively
//!
//! Serves a single page that submits URL lists, streams progress over
//! Server-Sent Events, polls status, and downloads the CSV export.
//!
//! Routes:
//! - `GET /` - the page
//! - `POST /start_scraping` - start a crawl
//! - `POST /stop_scraping` - request a stop
//! - `GET /get_status` - crawl state snapshot
//! - `GET /download_csv` - the last export
//! - `GET /events` - live progress stream

mod routes;

pub use routes::{router, AppState};

use crate::config::Config;
use crate::crawler::CrawlController;
use crate::progress::BroadcastSink;
use crate::ScrapeError;

/// Runs the web server until the process is stopped
///
/// # Arguments
///
/// * `config` - Supplies the bind address, crawl settings and CSV path
pub async fn serve(config: &Config) -> Result<(), ScrapeError> {
    let sink = BroadcastSink::default();
    let controller = CrawlController::new(config, sink.clone())?;
    let state = AppState::new(controller, sink, &config.output.csv_path);

    let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await?;
    tracing::info!(
        "Open your browser and go to: http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, router(state)).await?;

    Ok(())
}
