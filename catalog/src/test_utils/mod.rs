//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks record what they were given and can be switched into a failing
//! mode. Call-count assertions that need no recorded state use the `mockall`
//! mocks generated on the port traits instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
