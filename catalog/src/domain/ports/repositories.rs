//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., in-memory).

use async_trait::async_trait;

use crate::domain::entities::Product;
use crate::error::StorageError;

/// Repository for Product entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Upsert a product keyed by its id
    ///
    /// An existing record with the same id is fully overwritten. Returns the
    /// stored value, which must keep every field of `product`.
    async fn save(&self, product: Product) -> Result<Product, StorageError>;
}
