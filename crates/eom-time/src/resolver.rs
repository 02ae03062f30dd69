//! Last-business-day resolution against fetched holidays.

use chrono::{DateTime, TimeZone};

use crate::calendar::Calendar;
use crate::date::Date;
use crate::holiday::HolidayInterval;
use crate::zone;

/// A calendar made of the weekend rule plus a fixed list of holidays.
///
/// Built once per check from whatever the holiday source returned for the
/// month and never modified afterwards, so it can be shared read-only across
/// threads. The list is scanned in full for every query; order and
/// duplicates do not matter.
#[derive(Debug, Clone, Default)]
pub struct BusinessDayResolver {
    holidays: Vec<HolidayInterval>,
}

impl BusinessDayResolver {
    /// Create a resolver. An empty list means "weekends only".
    pub fn new(holidays: impl IntoIterator<Item = HolidayInterval>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// The holidays this resolver was built with.
    pub fn holidays(&self) -> &[HolidayInterval] {
        &self.holidays
    }

    /// Last business day of the month containing `date`.
    pub fn last_business_day_of_month(&self, date: Date) -> Date {
        self.end_of_month(date)
    }

    /// Return `true` iff `date` is the last business day of its month.
    pub fn is_last_business_day(&self, date: Date) -> bool {
        self.is_end_of_month(date)
    }

    /// [`is_last_business_day`](Self::is_last_business_day) for the
    /// business-zone day containing `instant`; the time of day is ignored.
    pub fn is_last_business_day_at<Z: TimeZone>(&self, instant: &DateTime<Z>) -> bool {
        self.is_last_business_day(zone::date_of(instant))
    }

    fn is_listed_holiday(&self, date: Date) -> bool {
        self.holidays.iter().any(|h| h.covers(date))
    }
}

impl Calendar for BusinessDayResolver {
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_listed_holiday(date)
    }
}
