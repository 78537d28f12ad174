//! Product update notifier port
//!
//! Defines the change event sent to downstream consumers and the interface
//! used to deliver it.

use async_trait::async_trait;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Product;
use crate::error::NotificationError;

/// Notification payload for a product that was created or updated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdatedEvent {
    pub id: String,
    pub name: String,
    pub price_pence: u64,
    pub description: String,
    /// ISO-8601, millisecond precision, UTC (`2024-01-01T00:00:00.000Z`)
    pub updated_at: String,
}

impl From<&Product> for ProductUpdatedEvent {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price_pence: product.price_pence(),
            description: product.description().to_string(),
            updated_at: product
                .updated_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Port trait for delivering product change events
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductUpdatedNotifier: Send + Sync {
    /// Deliver one change event (at-least-once, best effort)
    async fn notify(&self, event: ProductUpdatedEvent) -> Result<(), NotificationError>;
}
