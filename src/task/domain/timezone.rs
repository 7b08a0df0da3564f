//! Reference timezone used to stamp and format completion times.

use super::TaskDomainError;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use mockable::Clock;
use std::fmt;

/// Fixed timezone in which completion timestamps are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceTimezone(Tz);

impl ReferenceTimezone {
    /// Wraps a timezone.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Resolves an IANA timezone name such as `America/New_York`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::UnknownTimezone`] when the name is not
    /// recognised.
    pub fn parse(name: &str) -> Result<Self, TaskDomainError> {
        name.trim()
            .parse::<Tz>()
            .map(Self)
            .map_err(|_| TaskDomainError::UnknownTimezone(name.to_owned()))
    }

    /// Returns the wrapped timezone.
    #[must_use]
    pub const fn tz(self) -> Tz {
        self.0
    }

    /// Returns the clock's current instant expressed in this timezone.
    #[must_use]
    pub fn now(self, clock: &(impl Clock + ?Sized)) -> DateTime<Tz> {
        self.localize(clock.utc())
    }

    /// Expresses a UTC instant in this timezone.
    #[must_use]
    pub fn localize(self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.0)
    }
}

impl Default for ReferenceTimezone {
    fn default() -> Self {
        Self(chrono_tz::America::New_York)
    }
}

impl fmt::Display for ReferenceTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.name())
    }
}
