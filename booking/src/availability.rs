//! Availability window computation.
//!
//! Two window shapes exist because the backend's two consumers historically
//! computed the range differently: a fixed day count and a calendar-month
//! jump. Both are kept as configuration; the reducer uses whichever the
//! client was configured with.

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};

/// Rolling request window for the availability lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityWindow {
    /// `[today, today + n days]`, inclusive.
    Days(u32),

    /// `[today, same day next month]`, clamped at month end
    /// (Jan 31 → Feb 28/29).
    CalendarMonth,
}

impl AvailabilityWindow {
    /// Compute the inclusive `(start, end)` ISO date pair for the window,
    /// anchored at `now`.
    #[must_use]
    pub fn range(&self, now: DateTime<Utc>) -> (String, String) {
        let start = now.date_naive();
        let end = match self {
            Self::Days(n) => start + Duration::days(i64::from(*n)),
            Self::CalendarMonth => add_calendar_month(start),
        };
        (
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        )
    }
}

impl Default for AvailabilityWindow {
    fn default() -> Self {
        Self::Days(30)
    }
}

fn add_calendar_month(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1)).unwrap_or(date)
}
