//! Crawl controller - sequential crawl orchestration
//!
//! This module contains the crawl loop and the state machine around it:
//! - Rejecting a start while a crawl is running
//! - Walking the URL list in order, one fetch at a time
//! - Pacing requests with a fixed delay
//! - Honouring stop requests at the top of each iteration
//! - Summarizing and exporting results when the loop ends
//!
//! Cancellation is cooperative. A stop request is only seen at the top of
//! the next iteration; an in-flight fetch or delay always runs to the end.
//! Each crawl gets its own cancellation flag, and the controller stays busy
//! until the stopped crawl has finished, so a stop followed by a quick
//! restart never has two loops writing to the same state.

use crate::config::Config;
use crate::crawler::{build_http_client, RecordBuilder};
use crate::output::{export_csv, summarize};
use crate::progress::{percentage, MessageKind, ProgressEvent, ProgressSink};
use crate::state::{CrawlPhase, CrawlState, Record};
use crate::ScrapeError;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Drives crawls and owns their state
///
/// Cloning is cheap and every clone shares the same state, so one clone can
/// run the loop on a background task while others serve `status()` and
/// `stop()`.
#[derive(Debug, Clone)]
pub struct CrawlController<S> {
    state: Arc<RwLock<CrawlState>>,
    /// Cancellation flag of the current (or most recent) crawl
    cancel: Arc<Mutex<Arc<AtomicBool>>>,
    builder: RecordBuilder<S>,
    sink: S,
    delay: Duration,
    csv_path: PathBuf,
}

impl<S: ProgressSink> CrawlController<S> {
    /// Creates a controller from configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the fetch settings, the delay and the CSV path
    /// * `sink` - Receives every progress notification
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlController)` - Ready to start crawls
    /// * `Err(ScrapeError)` - The HTTP client could not be built
    pub fn new(config: &Config, sink: S) -> Result<Self, ScrapeError> {
        let client = build_http_client(&config.scraper)?;

        Ok(Self {
            state: Arc::new(RwLock::new(CrawlState::default())),
            cancel: Arc::new(Mutex::new(Arc::new(AtomicBool::new(false)))),
            builder: RecordBuilder::new(client, sink.clone()),
            sink,
            delay: Duration::from_millis(config.scraper.delay_ms),
            csv_path: PathBuf::from(&config.output.csv_path),
        })
    }

    /// Returns a snapshot of the crawl state
    pub fn status(&self) -> CrawlState {
        self.read_state().clone()
    }

    /// Returns the records gathered so far, in crawl order
    pub fn results(&self) -> Vec<Record> {
        self.read_state().results.clone()
    }

    /// Returns true while a crawl is running and has not been asked to stop
    pub fn is_running(&self) -> bool {
        self.read_state().running
    }

    /// Returns true until the current crawl has fully finished
    ///
    /// Stays true after a stop request while the loop winds down; a new
    /// crawl is rejected during that time.
    pub fn is_busy(&self) -> bool {
        self.read_state().phase == CrawlPhase::Running
    }

    /// Requests the running crawl to stop
    ///
    /// Returns immediately. The loop exits at its next iteration check.
    /// Returns whether a crawl was running.
    pub fn stop(&self) -> bool {
        let mut state = self.write_state();
        let was_running = state.running;
        state.running = false;
        self.lock_cancel().store(true, Ordering::SeqCst);
        if was_running {
            tracing::info!("Stop requested");
        }
        was_running
    }

    /// Starts a crawl on a background task
    ///
    /// # Returns
    ///
    /// * `Ok(JoinHandle)` - The crawl was accepted; the handle resolves when it ends
    /// * `Err(ScrapeError::Busy)` - A crawl is running or still winding down
    ///   after a stop; state is untouched
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&self, urls: Vec<String>) -> Result<JoinHandle<()>, ScrapeError> {
        let cancel = self.begin(urls.len())?;

        let controller = self.clone();
        let handle = tokio::spawn(async move {
            let worker = controller.clone();
            let result = tokio::spawn(async move { worker.drive(urls, cancel).await }).await;

            if let Err(e) = result {
                controller.fail(&ScrapeError::TaskFailed(e.to_string()));
            }
        });

        Ok(handle)
    }

    /// Runs a crawl to the end on the current task
    ///
    /// Used by batch mode. Returns the final state snapshot.
    pub async fn run(&self, urls: Vec<String>) -> Result<CrawlState, ScrapeError> {
        let cancel = self.begin(urls.len())?;
        self.drive(urls, cancel).await;
        Ok(self.status())
    }

    /// Claims the controller for a new crawl over `total` entries
    ///
    /// Returns the cancellation flag owned by the new crawl.
    fn begin(&self, total: usize) -> Result<Arc<AtomicBool>, ScrapeError> {
        let mut state = self.write_state();
        if state.phase == CrawlPhase::Running {
            tracing::warn!("Rejected start: a crawl is already running");
            return Err(ScrapeError::Busy);
        }

        state.begin(total);
        let cancel = Arc::new(AtomicBool::new(false));
        *self.lock_cancel() = cancel.clone();

        tracing::info!("Starting crawl of {} URLs", total);
        Ok(cancel)
    }

    /// Runs the loop, then finishes the crawl with exactly one terminal event
    async fn drive(&self, urls: Vec<String>, cancel: Arc<AtomicBool>) {
        let phase = self.crawl_loop(&urls, &cancel).await;
        let records = self.results();

        match self.export(&records) {
            Ok(csv_ready) => {
                let summary = summarize(&records);
                self.write_state().finish(phase);

                tracing::info!(
                    "Crawl {}: {} records (names: {}, emails: {}, instagram: {}, phones: {})",
                    phase,
                    records.len(),
                    summary.business_names,
                    summary.emails,
                    summary.instagram,
                    summary.phones
                );

                self.sink.notify(ProgressEvent::Complete {
                    message: format!(
                        "Scraping complete! Found data for {} websites.",
                        records.len()
                    ),
                    total_results: records.len(),
                    csv_ready,
                    summary,
                });
            }
            Err(e) => self.fail(&e),
        }
    }

    /// The sequential crawl loop
    ///
    /// Returns `Stopped` if a stop request was observed, `Completed` otherwise.
    async fn crawl_loop(&self, urls: &[String], cancel: &AtomicBool) -> CrawlPhase {
        let total = urls.len();

        self.sink.notify(ProgressEvent::message(
            MessageKind::Start,
            format!("Starting to scrape {} websites...", total),
        ));

        for (index, raw) in urls.iter().enumerate() {
            let position = index + 1;

            if cancel.load(Ordering::SeqCst) {
                tracing::info!("Crawl stopped at {}/{}", position, total);
                self.sink.notify(ProgressEvent::message(
                    MessageKind::Warning,
                    "Scraping stopped by user",
                ));
                return CrawlPhase::Stopped;
            }

            let url = raw.trim();
            if url.is_empty() {
                continue;
            }

            self.write_state()
                .advance(position, url, percentage(position, total));
            self.sink
                .notify(ProgressEvent::progress(position, total, url));

            let outcome = self.builder.scrape(url).await;
            self.write_state().push(outcome.record, outcome.error);

            if position < total && !cancel.load(Ordering::SeqCst) {
                tokio::time::sleep(self.delay).await;
            }
        }

        CrawlPhase::Completed
    }

    /// Writes the CSV export; returns whether a file was written
    fn export(&self, records: &[Record]) -> Result<bool, ScrapeError> {
        if records.is_empty() {
            return Ok(false);
        }

        export_csv(records, &self.csv_path)?;
        Ok(true)
    }

    /// Ends the crawl after a controller-level failure
    fn fail(&self, error: &ScrapeError) {
        tracing::error!("Crawl failed: {}", error);
        self.write_state().finish(CrawlPhase::Failed);
        self.sink.notify(ProgressEvent::Failed {
            message: format!("Scraping failed: {}", error),
        });
    }

    fn lock_cancel(&self) -> std::sync::MutexGuard<'_, Arc<AtomicBool>> {
        self.cancel.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn read_state(&self) -> RwLockReadGuard<'_, CrawlState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, CrawlState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
