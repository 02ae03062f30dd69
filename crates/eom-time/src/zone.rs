//! The business time zone.
//!
//! Every day-boundary decision in the workspace (which calendar day an
//! instant belongs to, where a day starts, which instants a month spans) is
//! made in one fixed zone, Asia/Tokyo. Mixing local dates with UTC instants
//! otherwise shifts holidays by a day around midnight.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::date::Date;

/// The zone used for all day-granularity comparisons.
pub const BUSINESS_TZ: Tz = chrono_tz::Asia::Tokyo;

/// Calendar day (in the business zone) containing `instant`.
pub fn date_of<Z: TimeZone>(instant: &DateTime<Z>) -> Date {
    Date::from_naive(instant.with_timezone(&BUSINESS_TZ).date_naive())
}

/// Local wall-clock `time` on `date` in the business zone.
pub fn local_datetime(date: Date, time: NaiveTime) -> DateTime<Tz> {
    let naive = date.naive().and_time(time);
    BUSINESS_TZ
        .from_local_datetime(&naive)
        .earliest()
        // A skipped local time (historic DST gap) is read as UTC instead.
        .unwrap_or_else(|| BUSINESS_TZ.from_utc_datetime(&naive))
}

/// 00:00 on `date` in the business zone.
pub fn start_of_day(date: Date) -> DateTime<Tz> {
    local_datetime(date, NaiveTime::MIN)
}

/// [`start_of_day`] expressed in UTC.
pub fn start_of_day_utc(date: Date) -> DateTime<Utc> {
    start_of_day(date).with_timezone(&Utc)
}

/// A half-open span of instants `[time_min, time_max)`.
///
/// Holiday providers are queried with a window; [`month_window`] builds the
/// one covering a whole calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayWindow {
    /// Inclusive lower bound.
    pub time_min: DateTime<Tz>,
    /// Exclusive upper bound.
    pub time_max: DateTime<Tz>,
}

impl HolidayWindow {
    /// Return `true` if `instant` lies inside the window.
    pub fn contains<Z: TimeZone>(&self, instant: &DateTime<Z>) -> bool {
        let t = instant.with_timezone(&Utc);
        self.time_min.with_timezone(&Utc) <= t && t < self.time_max.with_timezone(&Utc)
    }

    /// Return `true` if the half-open span `[start, end)` shares at least one
    /// instant with the window.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start < self.time_max.with_timezone(&Utc) && end > self.time_min.with_timezone(&Utc)
    }

    /// First calendar day of the window.
    pub fn first_day(&self) -> Date {
        date_of(&self.time_min)
    }

    /// Last calendar day touched by the window.
    pub fn last_day(&self) -> Date {
        date_of(&self.time_max) - 1
    }
}

/// Window spanning the month of `date`: from 00:00 on the first day to
/// 00:00 on the first day of the following month, business zone.
pub fn month_window(date: Date) -> HolidayWindow {
    let first = date.start_of_month();
    let next = date.end_of_month() + 1;
    HolidayWindow {
        time_min: start_of_day(first),
        time_max: start_of_day(next),
    }
}
