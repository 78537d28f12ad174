//! Notifier adapters
//!
//! Implementations of the product update notifier port.

pub mod log_notifier;

use std::sync::Arc;

use crate::config::NotifierKind;
use crate::domain::ports::ProductUpdatedNotifier;

pub use log_notifier::{LogProductUpdatedNotifier, NoopProductUpdatedNotifier};

/// Build the notifier selected in configuration
pub fn notifier_for(kind: NotifierKind) -> Arc<dyn ProductUpdatedNotifier> {
    match kind {
        NotifierKind::Log => Arc::new(LogProductUpdatedNotifier),
        NotifierKind::Noop => Arc::new(NoopProductUpdatedNotifier),
    }
}
