//! Mock implementations of port traits
//!
//! These record every call so tests can verify what the workflow handed over,
//! and can be configured to fail.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::Product;
use crate::domain::ports::{ProductRepository, ProductUpdatedEvent, ProductUpdatedNotifier};
use crate::error::{NotificationError, StorageError};

// ============================================================================
// Recording Product Repository
// ============================================================================

/// Records every product passed to `save` and echoes it back, or fails
#[derive(Default)]
pub struct RecordingProductRepository {
    pub saved: Arc<RwLock<Vec<Product>>>,
    failure: Option<StorageError>,
}

impl RecordingProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: StorageError) -> Self {
        Self {
            saved: Arc::new(RwLock::new(Vec::new())),
            failure: Some(error),
        }
    }

    pub fn get_saved(&self) -> Vec<Product> {
        self.saved.read().unwrap().clone()
    }
}

#[async_trait]
impl ProductRepository for RecordingProductRepository {
    async fn save(&self, product: Product) -> Result<Product, StorageError> {
        self.saved.write().unwrap().push(product.clone());
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(product),
        }
    }
}

// ============================================================================
// Recording Notifier
// ============================================================================

/// Records every event passed to `notify`, or fails
#[derive(Default)]
pub struct RecordingNotifier {
    pub events: Arc<RwLock<Vec<ProductUpdatedEvent>>>,
    failure: Option<NotificationError>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: NotificationError) -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
            failure: Some(error),
        }
    }

    pub fn get_events(&self) -> Vec<ProductUpdatedEvent> {
        self.events.read().unwrap().clone()
    }
}

#[async_trait]
impl ProductUpdatedNotifier for RecordingNotifier {
    async fn notify(&self, event: ProductUpdatedEvent) -> Result<(), NotificationError> {
        self.events.write().unwrap().push(event);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
