//! Source of "today" for the service layer.
//!
//! Engine operations take the date as an argument and never read the clock.

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::time_utils::{valuation_date_today, DEFAULT_VALUATION_TZ};

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock, resolved to a calendar date in a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(DEFAULT_VALUATION_TZ)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        valuation_date_today(self.tz)
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
