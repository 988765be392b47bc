/// Crawl state definitions shared between the crawl loop and its observers
use crate::state::Record;
use serde::Serialize;
use std::fmt;

/// Represents where a crawl is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlPhase {
    // ===== Active States =====
    /// No crawl has started yet
    #[default]
    Idle,

    /// The crawl loop is working through the URL list
    Running,

    // ===== Terminal States =====
    /// The loop observed a stop request and exited early
    Stopped,

    /// Every URL in the list was processed
    Completed,

    /// The crawl aborted on a controller-level failure
    Failed,
}

impl CrawlPhase {
    /// Returns true if this phase ends a crawl
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stopped | Self::Completed | Self::Failed)
    }

    /// Returns the lowercase name used in logs and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bookkeeping for the current (or most recent) crawl
///
/// There is exactly one writer, the crawl loop. Observers get clones via
/// the controller's `status()`, so a snapshot never changes under them.
///
/// Invariants:
/// - `completed <= total`
/// - `running` goes true -> false once per crawl and only [`CrawlState::begin`]
///   sets it back to true
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrawlState {
    /// Whether the crawl loop should keep going
    #[serde(rename = "is_running")]
    pub running: bool,

    /// Lifecycle phase of the crawl
    pub phase: CrawlPhase,

    /// 1-based position of the URL being processed
    pub current_index: usize,

    /// The URL being processed
    pub current_url: String,

    /// Last reported completion percentage
    pub progress: f64,

    /// Number of entries in the submitted URL list, blanks included
    #[serde(rename = "total_urls")]
    pub total: usize,

    /// Number of records produced so far
    pub completed: usize,

    /// Records in crawl order
    pub results: Vec<Record>,

    /// Per-URL failures as `"<url>: <detail>"`
    pub errors: Vec<String>,
}

impl CrawlState {
    /// Resets the state for a fresh crawl over `total` entries
    pub fn begin(&mut self, total: usize) {
        *self = Self {
            running: true,
            phase: CrawlPhase::Running,
            total,
            ..Self::default()
        };
    }

    /// Records that the loop moved on to the entry at `index`
    pub fn advance(&mut self, index: usize, url: &str, percentage: f64) {
        self.current_index = index;
        self.current_url = url.to_string();
        self.progress = percentage;
    }

    /// Appends a finished record and, for failed fetches, the error detail
    pub fn push(&mut self, record: Record, error: Option<String>) {
        if let Some(detail) = error {
            self.errors.push(format!("{}: {}", record.website, detail));
        }
        self.results.push(record);
        self.completed = (self.completed + 1).min(self.total);
    }

    /// Ends the crawl in the given terminal phase
    pub fn finish(&mut self, phase: CrawlPhase) {
        debug_assert!(phase.is_terminal());
        self.running = false;
        self.phase = phase;
    }
}
