//! Deterministic clock shared by task unit tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

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

/// 19:45 UTC on a Saturday, 03:45PM in New York.
#[fixture]
pub fn fixed_clock() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2026, 10, 17, 19, 45, 0)
            .single()
            .expect("valid fixed instant"),
    )
}
