//! # eom-time
//!
//! Date, calendar, and holiday types, and the resolver that decides whether
//! a date is the last business day of its month.
//!
//! ```
//! use eom_time::{BusinessDayResolver, Date, HolidayInterval};
//!
//! // 2024-07-31 is a Wednesday; declare it a holiday.
//! let eom = Date::from_ymd(2024, 7, 31).unwrap();
//! let resolver = BusinessDayResolver::new([HolidayInterval::all_day(eom)]);
//!
//! assert!(resolver.is_last_business_day(Date::from_ymd(2024, 7, 30).unwrap()));
//! assert!(!resolver.is_last_business_day(eom));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait.
pub mod calendar;

/// `Date` type.
pub mod date;

/// Holiday intervals.
pub mod holiday;

/// Last business day of the month against fetched holidays.
pub mod resolver;

/// Business time zone and holiday query windows.
pub mod zone;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use date::Date;
pub use holiday::HolidayInterval;
pub use resolver::BusinessDayResolver;
pub use zone::{month_window, HolidayWindow, BUSINESS_TZ};
