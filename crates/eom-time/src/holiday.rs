//! Holiday intervals supplied by an external calendar source.
//!
//! A holiday is either an all-day entry (a bare calendar date) or a timed
//! entry (an instant, optionally with an exclusive end). Matching a date
//! against an interval is always done at day granularity in the business
//! zone.

use chrono::{DateTime, TimeZone, Utc};

use crate::date::Date;
use crate::zone::{self, HolidayWindow};
use eom_core::ensure;
use eom_core::errors::Result;

/// One holiday as delivered by a holiday source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayInterval {
    /// Covers the whole of `date`.
    AllDay {
        /// The holiday's calendar date.
        date: Date,
    },
    /// Covers every business-zone day touched by `[start, end)` when `end`
    /// is known, otherwise the single day containing `start`.
    Timed {
        /// Inclusive start instant.
        start: DateTime<Utc>,
        /// Exclusive end instant; always later than `start` when present.
        end: Option<DateTime<Utc>>,
    },
}

impl HolidayInterval {
    /// An all-day holiday on `date`.
    pub fn all_day(date: Date) -> Self {
        HolidayInterval::AllDay { date }
    }

    /// A timed holiday with no end: covers the day containing `start`.
    pub fn starting_at<Z: TimeZone>(start: &DateTime<Z>) -> Self {
        HolidayInterval::Timed {
            start: start.with_timezone(&Utc),
            end: None,
        }
    }

    /// A timed holiday covering `[start, end)`.
    ///
    /// # Errors
    /// Returns [`eom_core::Error::Precondition`] unless `end > start`.
    pub fn timed<Z1: TimeZone, Z2: TimeZone>(
        start: &DateTime<Z1>,
        end: &DateTime<Z2>,
    ) -> Result<Self> {
        let start = start.with_timezone(&Utc);
        let end = end.with_timezone(&Utc);
        ensure!(
            end > start,
            "holiday end {end} must be after its start {start}"
        );
        Ok(HolidayInterval::Timed {
            start,
            end: Some(end),
        })
    }

    /// Return `true` if this holiday applies to `date`.
    ///
    /// * all-day: the holiday's date equals `date`;
    /// * timed with an end: `[start, end)` shares at least one instant with
    ///   the business-zone day `date`;
    /// * timed without an end: `start` falls on `date` (business zone).
    pub fn covers(&self, date: Date) -> bool {
        match *self {
            HolidayInterval::AllDay { date: day } => day == date,
            HolidayInterval::Timed {
                start,
                end: Some(end),
            } => {
                let day_start = zone::start_of_day_utc(date);
                let day_end = zone::start_of_day_utc(date + 1);
                start < day_end && end > day_start
            }
            HolidayInterval::Timed { start, end: None } => zone::date_of(&start) == date,
        }
    }

    /// Return `true` if the holiday touches any instant of `window`.
    pub fn intersects(&self, window: &HolidayWindow) -> bool {
        match *self {
            HolidayInterval::Timed {
                start,
                end: Some(end),
            } => window.overlaps(start, end),
            _ => {
                let day = self.first_day();
                window.first_day() <= day && day <= window.last_day()
            }
        }
    }

    /// Business-zone day on which the holiday begins.
    pub fn first_day(&self) -> Date {
        match *self {
            HolidayInterval::AllDay { date } => date,
            HolidayInterval::Timed { start, .. } => zone::date_of(&start),
        }
    }
}

impl std::fmt::Display for HolidayInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayInterval::AllDay { date } => write!(f, "{date} (all day)"),
            HolidayInterval::Timed { start, end: None } => write!(f, "{}", start.to_rfc3339()),
            HolidayInterval::Timed {
                start,
                end: Some(end),
            } => write!(f, "[{}, {})", start.to_rfc3339(), end.to_rfc3339()),
        }
    }
}
