//! In-process change feed for the inquiry collection, backed by a
//! `tokio::sync::broadcast` channel.
//!
//! The store gives no delivery-order guarantee, so subscribers treat each
//! event as a cue to re-read and re-sort the full collection rather than as
//! an incremental delta.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryEventKind {
    Created,
    Deleted,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryEvent {
    pub kind: InquiryEventKind,
    pub inquiry_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl InquiryEvent {
    pub fn created(inquiry_id: Uuid) -> Self {
        InquiryEvent {
            kind: InquiryEventKind::Created,
            inquiry_id,
            timestamp: Utc::now(),
        }
    }

    pub fn deleted(inquiry_id: Uuid) -> Self {
        InquiryEvent {
            kind: InquiryEventKind::Deleted,
            inquiry_id,
            timestamp: Utc::now(),
        }
    }
}

/// Publish/subscribe hub shared via `Arc` across the application.
pub struct EventBus {
    sender: broadcast::Sender<InquiryEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        EventBus { sender }
    }

    /// Delivers the event to all current subscribers. A send with no
    /// listeners is not an error; the event is simply dropped.
    pub fn publish(&self, event: InquiryEvent) {
        let delivered = self.sender.send(event.clone()).unwrap_or(0);
        tracing::debug!(
            kind = ?event.kind,
            inquiry_id = %event.inquiry_id,
            subscribers = delivered,
            "published inquiry event"
        );
    }

    pub fn subscribe(&self) -> broadcast::Receiver<InquiryEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscriber_receives_published_event() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();

        let id = Uuid::new_v4();
        bus.publish(InquiryEvent::created(id));

        let event = rx.recv().await.expect("event should be delivered");
        assert_eq!(event.kind, InquiryEventKind::Created);
        assert_eq!(event.inquiry_id, id);
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_a_noop() {
        let bus = EventBus::new(8);
        bus.publish(InquiryEvent::deleted(Uuid::new_v4()));
        assert_eq!(bus.subscriber_count(), 0);
    }
}
