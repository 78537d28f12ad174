//! Error types for the catalog
//!
//! This module defines error types for each layer:
//! - `DomainError`: Entity construction/validation errors
//! - `StorageError`: Product repository errors
//! - `NotificationError`: Product update notifier errors
//! - `UpsertError`: Everything the upsert workflow can hit, before it is flattened

use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Repository errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Notifier errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("Notification delivery failed: {0}")]
    Delivery(String),

    #[error("Notification payload could not be serialized: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for NotificationError {
    fn from(e: serde_json::Error) -> Self {
        NotificationError::Serialization(e.to_string())
    }
}

/// Union of the failures an upsert can run into.
///
/// Only lives inside the workflow; callers see the flattened message.
#[derive(Debug, Error)]
pub enum UpsertError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Notification(#[from] NotificationError),
}

impl UpsertError {
    /// Short name of the failing stage, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            UpsertError::Validation(_) => "validation",
            UpsertError::Storage(_) => "storage",
            UpsertError::Notification(_) => "notification",
        }
    }
}
