use crate::output::Summary;
use serde::Serialize;

/// Category of a free-form progress message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Start,
    Scraping,
    Success,
    Error,
    Warning,
    Info,
}

/// A notification emitted while a crawl runs
///
/// Serialized with a `type` tag; [`ProgressEvent::name`] gives the event
/// name used on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressEvent {
    /// Human-readable log line
    Message {
        message: String,
        kind: MessageKind,
        /// Local wall-clock time, `HH:MM:SS`
        timestamp: String,
    },

    /// The loop moved on to a new URL
    Progress {
        current: usize,
        total: usize,
        percentage: f64,
        current_url: String,
    },

    /// The crawl finished and its results are summarized
    Complete {
        message: String,
        total_results: usize,
        csv_ready: bool,
        summary: Summary,
    },

    /// The crawl aborted on a controller-level failure
    Failed { message: String },
}

impl ProgressEvent {
    /// Creates a message event stamped with the current local time
    pub fn message(kind: MessageKind, message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
            kind,
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }

    /// Creates a progress event for the 1-based position `current`
    pub fn progress(current: usize, total: usize, current_url: impl Into<String>) -> Self {
        Self::Progress {
            current,
            total,
            percentage: percentage(current, total),
            current_url: current_url.into(),
        }
    }

    /// Returns the event name used by live transports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Message { .. } => "scraping_update",
            Self::Progress { .. } => "progress_update",
            Self::Complete { .. } => "scraping_complete",
            Self::Failed { .. } => "scraping_error",
        }
    }

    /// Returns true for the events that end a crawl
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete { .. } | Self::Failed { .. })
    }
}

/// `current / total` as a percentage rounded to one decimal place
///
/// Exact halves round to even, so `49 / 400` reports 12.2.
pub fn percentage(current: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = current as f64 / total as f64 * 100.0;
    (percent * 10.0).round_ties_even() / 10.0
}
