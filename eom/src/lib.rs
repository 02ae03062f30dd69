//! # eom
//!
//! Decide whether a date is the last business day of its month, given the
//! holidays an external calendar reports, and run the month-end actions
//! when it is.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `eom-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use eom::time::{BusinessDayResolver, Date};
//!
//! // 2024-08-31 is a Saturday, so Friday the 30th closes the month.
//! let resolver = BusinessDayResolver::new([]);
//! assert!(resolver.is_last_business_day(Date::from_ymd(2024, 8, 30).unwrap()));
//! assert!(!resolver.is_last_business_day(Date::from_ymd(2024, 8, 31).unwrap()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases and error definitions.
pub use eom_core as core;

/// Dates, calendars, holiday intervals and the business-day resolver.
pub use eom_time as time;

/// Collaborator ports, adapters, month-end actions and the check pipeline.
pub use eom_actions as actions;
