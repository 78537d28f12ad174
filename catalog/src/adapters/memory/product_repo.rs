//! In-memory adapter for ProductRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::{Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::StorageError;

/// In-memory implementation of ProductRepository
///
/// Records are keyed by product id; the last write for an id wins.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a product
    pub fn with_product(self, product: Product) -> Result<Self, StorageError> {
        self.write_products()?.insert(product.id().clone(), product);
        Ok(self)
    }

    /// Look up a stored product
    pub fn get(&self, id: &ProductId) -> Result<Option<Product>, StorageError> {
        Ok(self.read_products()?.get(id).cloned())
    }

    /// Number of stored products
    pub fn count(&self) -> Result<usize, StorageError> {
        Ok(self.read_products()?.len())
    }

    fn read_products(
        &self,
    ) -> Result<RwLockReadGuard<'_, HashMap<ProductId, Product>>, StorageError> {
        self.products
            .read()
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }

    fn write_products(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<ProductId, Product>>, StorageError> {
        self.products
            .write()
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: Product) -> Result<Product, StorageError> {
        let mut products = self.write_products()?;

        let replaced = products.insert(product.id().clone(), product.clone());
        tracing::debug!(
            product_id = %product.id(),
            replaced = replaced.is_some(),
            "Stored product in memory"
        );

        Ok(product)
    }
}
