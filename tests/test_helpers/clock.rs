//! Frozen clock shared by integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Returns a clock frozen at 2026-10-17 19:45 UTC (03:45PM in New York).
#[must_use]
pub fn saturday_afternoon() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2026, 10, 17, 19, 45, 0)
            .single()
            .unwrap_or_default(),
    )
}
