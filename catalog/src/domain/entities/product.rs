//! Product domain entity
//!
//! A catalog product. Instances are only produced by [`Product::create`], which
//! validates the raw fields, so every `Product` in the system is valid.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Caller-supplied product identifier (never generated internally)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw, unvalidated product fields
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    /// Price in pence; signed so that negative input can be rejected
    pub price_pence: i64,
    pub description: String,
}

/// A validated, immutable product
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    price_pence: u64,
    description: String,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Validate `fields` and build a product stamped with `updated_at`
    pub fn create(fields: NewProduct, updated_at: DateTime<Utc>) -> Result<Self, DomainError> {
        if fields.id.trim().is_empty() {
            return Err(DomainError::Validation(
                "Product id must not be empty".to_string(),
            ));
        }

        if fields.name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Product name must not be empty".to_string(),
            ));
        }

        let price_pence = u64::try_from(fields.price_pence).map_err(|_| {
            DomainError::Validation(format!(
                "Product price must be a non-negative number of pence, got {}",
                fields.price_pence
            ))
        })?;

        Ok(Self {
            id: ProductId(fields.id),
            name: fields.name,
            price_pence,
            description: fields.description,
            updated_at,
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price_pence(&self) -> u64 {
        self.price_pence
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
