//! In-memory adapters
//!
//! Process-local implementations of repository traits.

pub mod product_repo;

pub use product_repo::InMemoryProductRepository;
