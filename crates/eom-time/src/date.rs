//! `Date` type.
//!
//! A calendar date with no time-of-day. Comparisons between dates are always
//! made at day granularity; converting an instant into a `Date` goes through
//! the business time zone (see [`crate::zone`]).
//!
//! The value wraps a [`chrono::NaiveDate`], so the valid range is chrono's
//! (roughly ±262 000 years). Arithmetic that leaves that range is reported as
//! [`Error::Date`].

use std::str::FromStr;

use chrono::{Datelike, Days, Duration, NaiveDate, Weekday};
use eom_core::errors::{Error, Result};
use eom_core::Integer;

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| Error::Date(format!("year {year} out of range")))
    }

    /// Wrap a chrono date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Date(date)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The underlying chrono date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u32 {
        self.0.day()
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` steps back).
    pub fn add_days(self, n: Integer) -> Result<Self> {
        self.0
            .checked_add_signed(Duration::days(i64::from(n)))
            .map(Date)
            .ok_or_else(|| Error::Date(format!("{self} + {n} days is out of range")))
    }

    /// Return the first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        Date(self.0 - Days::new(u64::from(self.0.day() - 1)))
    }

    /// Return the last day of the month containing this date, whatever the
    /// month's length (leap Februaries included).
    pub fn end_of_month(self) -> Self {
        let last = days_in_month(self.year(), self.month());
        Date(self.0 + Days::new(u64::from(last - self.0.day())))
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<Integer> for Date {
    type Output = Self;
    fn add(self, rhs: Integer) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<Integer> for Date {
    type Output = Self;
    fn sub(self, rhs: Integer) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = Integer;
    fn sub(self, rhs: Date) -> Integer {
        // Both ends lie within chrono's range, so the span fits in an i32.
        (self.0 - rhs.0).num_days() as Integer
    }
}

impl std::ops::AddAssign<Integer> for Date {
    fn add_assign(&mut self, rhs: Integer) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<Integer> for Date {
    fn sub_assign(&mut self, rhs: Integer) {
        *self = *self - rhs;
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

/// Parses `YYYY-MM-DD`.
impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::parse(s, "expected YYYY-MM-DD"));
        };
        let year = y.parse::<i32>().map_err(|e| Error::parse(s, e))?;
        let month = m.parse::<u32>().map_err(|e| Error::parse(s, e))?;
        let day = d.parse::<u32>().map_err(|e| Error::parse(s, e))?;
        Date::from_ymd(year, month, day).map_err(|e| Error::parse(s, e))
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Whether a given year is a leap year (proleptic Gregorian).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year. `month` must be in 1–12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month));
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
