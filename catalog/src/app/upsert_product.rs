//! Upsert product use case
//!
//! Creates a product or fully replaces an existing one, then tells downstream
//! consumers about it. Every failure comes back as an [`UpsertProductResult`];
//! nothing is returned as an `Err`.
//!
//! A notification failure after a successful save is reported as a failure,
//! but the saved record is not rolled back.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewProduct, Product};
use crate::domain::ports::{
    Clock, ProductRepository, ProductUpdatedEvent, ProductUpdatedNotifier,
};
use crate::error::UpsertError;

/// Collaborators the upsert needs, passed in on every call
pub struct UpsertProductDeps<R: ?Sized, N: ?Sized, C: ?Sized> {
    pub repo: Arc<R>,
    pub notifier: Arc<N>,
    pub clock: Arc<C>,
}

impl<R: ?Sized, N: ?Sized, C: ?Sized> UpsertProductDeps<R, N, C> {
    pub fn new(repo: Arc<R>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            repo,
            notifier,
            clock,
        }
    }
}

impl<R: ?Sized, N: ?Sized, C: ?Sized> Clone for UpsertProductDeps<R, N, C> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            notifier: self.notifier.clone(),
            clock: self.clock.clone(),
        }
    }
}

/// Raw request to create or replace a product
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProductCommand {
    pub id: String,
    pub name: String,
    pub price_pence: i64,
    #[serde(default)]
    pub description: String,
}

impl From<UpsertProductCommand> for NewProduct {
    fn from(command: UpsertProductCommand) -> Self {
        NewProduct {
            id: command.id,
            name: command.name,
            price_pence: command.price_pence,
            description: command.description,
        }
    }
}

/// Outcome of an upsert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpsertProductResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UpsertProductResult {
    pub fn ok(product: Product) -> Self {
        Self {
            success: true,
            data: Some(product),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Validate, persist and announce one product
#[tracing::instrument(name = "upsert_product", skip_all, fields(product_id = %command.id))]
pub async fn upsert_product<R, N, C>(
    deps: &UpsertProductDeps<R, N, C>,
    command: UpsertProductCommand,
) -> UpsertProductResult
where
    R: ProductRepository + ?Sized,
    N: ProductUpdatedNotifier + ?Sized,
    C: Clock + ?Sized,
{
    match try_upsert(deps, command).await {
        Ok(product) => {
            tracing::info!(price_pence = product.price_pence(), "Product upserted");
            UpsertProductResult::ok(product)
        }
        Err(e) => {
            tracing::warn!(kind = e.kind(), error = %e, "Product upsert failed");
            UpsertProductResult::failed(e.to_string())
        }
    }
}

async fn try_upsert<R, N, C>(
    deps: &UpsertProductDeps<R, N, C>,
    command: UpsertProductCommand,
) -> Result<Product, UpsertError>
where
    R: ProductRepository + ?Sized,
    N: ProductUpdatedNotifier + ?Sized,
    C: Clock + ?Sized,
{
    let product = Product::create(command.into(), deps.clock.now())?;

    let saved = deps.repo.save(product).await?;
    tracing::debug!("Product saved");

    deps.notifier
        .notify(ProductUpdatedEvent::from(&saved))
        .await?;

    Ok(saved)
}
