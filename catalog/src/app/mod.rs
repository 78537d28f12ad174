//! Application layer
//!
//! Contains use cases and service orchestration.
//! Use cases coordinate between domain entities and ports.

pub mod upsert_product;

pub use upsert_product::{
    upsert_product, UpsertProductCommand, UpsertProductDeps, UpsertProductResult,
};
