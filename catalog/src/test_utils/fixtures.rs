//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, TimeZone, Utc};

use crate::app::UpsertProductCommand;

/// 2024-01-01T00:00:00Z
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// A clock that always returns [`fixed_time`]
pub fn fixed_clock() -> impl Fn() -> DateTime<Utc> + Send + Sync + 'static {
    fixed_time
}

/// The widget command used across the workflow tests
pub fn test_command() -> UpsertProductCommand {
    UpsertProductCommand {
        id: "p1".to_string(),
        name: "Widget".to_string(),
        price_pence: 999,
        description: "d".to_string(),
    }
}

/// A command with specific id, name and price
pub fn test_command_with(id: &str, name: &str, price_pence: i64) -> UpsertProductCommand {
    UpsertProductCommand {
        id: id.to_string(),
        name: name.to_string(),
        price_pence,
        description: format!("{} description", name),
    }
}
