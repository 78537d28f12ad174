//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod clock;
pub mod notifier;
pub mod repositories;

pub use clock::Clock;
pub use notifier::{ProductUpdatedEvent, ProductUpdatedNotifier};
pub use repositories::ProductRepository;

#[cfg(test)]
pub use notifier::MockProductUpdatedNotifier;
#[cfg(test)]
pub use repositories::MockProductRepository;
