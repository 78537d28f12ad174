//! Clock port

use chrono::{DateTime, Utc};

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync + ?Sized,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}
