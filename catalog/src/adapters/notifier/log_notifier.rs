//! Logging notifier
//!
//! Writes each change event to the log instead of a message broker.
//! Useful for local runs; swap in a real transport behind the same port.

use async_trait::async_trait;

use crate::domain::ports::{ProductUpdatedEvent, ProductUpdatedNotifier};
use crate::error::NotificationError;

/// Notifier that logs the JSON payload of every event
pub struct LogProductUpdatedNotifier;

#[async_trait]
impl ProductUpdatedNotifier for LogProductUpdatedNotifier {
    async fn notify(&self, event: ProductUpdatedEvent) -> Result<(), NotificationError> {
        let payload = serde_json::to_string(&event)?;
        tracing::info!(product_id = %event.id, %payload, "Product updated");
        Ok(())
    }
}

/// Notifier that drops every event
pub struct NoopProductUpdatedNotifier;

#[async_trait]
impl ProductUpdatedNotifier for NoopProductUpdatedNotifier {
    async fn notify(&self, _event: ProductUpdatedEvent) -> Result<(), NotificationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> ProductUpdatedEvent {
        ProductUpdatedEvent {
            id: "p1".to_string(),
            name: "Widget".to_string(),
            price_pence: 999,
            description: "d".to_string(),
            updated_at: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[tokio::test]
    async fn log_notifier_accepts_events() {
        assert!(LogProductUpdatedNotifier.notify(event()).await.is_ok());
    }

    #[tokio::test]
    async fn noop_notifier_accepts_events() {
        assert!(NoopProductUpdatedNotifier.notify(event()).await.is_ok());
    }
}
