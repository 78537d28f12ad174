//! Product catalog core
//!
//! Upserts products and notifies downstream consumers of every change.
//! Uses hexagonal (ports & adapters) architecture: the `upsert_product` use case
//! only talks to the repository, notifier and clock through port traits.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use app::{upsert_product, UpsertProductCommand, UpsertProductDeps, UpsertProductResult};
pub use domain::entities::{NewProduct, Product, ProductId};
pub use domain::ports::{Clock, ProductRepository, ProductUpdatedEvent, ProductUpdatedNotifier};
pub use error::{DomainError, NotificationError, StorageError};
