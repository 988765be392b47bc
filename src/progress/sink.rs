use crate::progress::{MessageKind, ProgressEvent};
use tokio::sync::broadcast;

/// Receiver of crawl progress notifications
///
/// The controller is generic over its sink, so a sink is chosen once at
/// construction and calls are statically dispatched. Implementations must
/// not block for long and must not panic.
pub trait ProgressSink: Clone + Send + Sync + 'static {
    /// Delivers one event. Fire-and-forget.
    fn notify(&self, event: ProgressEvent);
}

/// Sink that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn notify(&self, _event: ProgressEvent) {}
}

/// Sink that writes events to the tracing log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn notify(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::Message { message, kind, .. } => match kind {
                MessageKind::Error => tracing::warn!("{}", message),
                MessageKind::Warning => tracing::warn!("{}", message),
                MessageKind::Scraping => tracing::debug!("{}", message),
                _ => tracing::info!("{}", message),
            },
            ProgressEvent::Progress {
                current,
                total,
                percentage,
                current_url,
            } => {
                tracing::info!(
                    "[{}/{}] ({:.1}%) {}",
                    current,
                    total,
                    percentage,
                    current_url
                );
            }
            ProgressEvent::Complete { message, .. } => tracing::info!("{}", message),
            ProgressEvent::Failed { message } => tracing::error!("{}", message),
        }
    }
}

/// Sink that broadcasts events to every live subscriber
///
/// Subscribers that fall more than the channel capacity behind lose the
/// oldest events. With no subscribers, events are dropped.
#[derive(Debug, Clone)]
pub struct BroadcastSink {
    tx: broadcast::Sender<ProgressEvent>,
}

impl BroadcastSink {
    /// Creates a sink with room for `capacity` undelivered events per subscriber
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribes to events emitted from now on
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressEvent> {
        self.tx.subscribe()
    }

    /// Returns the number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for BroadcastSink {
    fn default() -> Self {
        Self::new(256)
    }
}

impl ProgressSink for BroadcastSink {
    fn notify(&self, event: ProgressEvent) {
        // Ignore send errors (no active receivers)
        let _ = self.tx.send(event);
    }
}
