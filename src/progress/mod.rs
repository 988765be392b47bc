//! Progress notifications
//!
//! The crawl loop reports what it is doing through a [`ProgressSink`]. Sinks
//! are fire-and-forget: `notify` returns nothing and never fails, and an
//! observer that is not listening simply misses events.
//!
//! - `NoopSink`: discards everything (library use, tests)
//! - `LogSink`: renders events as tracing log lines (batch mode)
//! - `BroadcastSink`: fans events out to live web clients

mod event;
mod sink;

pub use event::{percentage, MessageKind, ProgressEvent};
pub use sink::{BroadcastSink, LogSink, NoopSink, ProgressSink};
