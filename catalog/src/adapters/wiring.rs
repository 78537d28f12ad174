//! Default adapter wiring
//!
//! Builds the collaborator bundle once at process start. The same bundle is
//! then handed to every upsert.

use std::sync::Arc;

use super::{notifier_for, InMemoryProductRepository, SystemClock};
use crate::app::UpsertProductDeps;
use crate::config::Config;
use crate::domain::ports::{Clock, ProductRepository, ProductUpdatedNotifier};

/// Upsert dependencies behind trait objects, as built from configuration
pub type DefaultUpsertProductDeps =
    UpsertProductDeps<dyn ProductRepository, dyn ProductUpdatedNotifier, dyn Clock>;

impl DefaultUpsertProductDeps {
    /// In-memory repository, the configured notifier and the system clock
    pub fn from_config(config: &Config) -> Self {
        tracing::debug!(notifier = %config.notifier, "Wiring upsert dependencies");

        let repo: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::new());
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        UpsertProductDeps::new(repo, notifier_for(config.notifier), clock)
    }
}
