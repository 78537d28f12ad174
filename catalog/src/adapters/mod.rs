//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod clock;
pub mod memory;
pub mod notifier;
pub mod wiring;

pub use clock::SystemClock;
pub use memory::InMemoryProductRepository;
pub use notifier::{notifier_for, LogProductUpdatedNotifier, NoopProductUpdatedNotifier};
pub use wiring::DefaultUpsertProductDeps;
