//! # eom-actions
//!
//! Everything around the business-day decision: the collaborator ports
//! (holiday source, notifier, event creator), adapters for them, the
//! month-end actions, the check pipeline, and environment configuration.
//!
//! ```no_run
//! use std::sync::Arc;
//! use eom_actions::adapters::{JsonFileHolidaySource, LogEventCreator, LogNotifier};
//! use eom_actions::{ActionExecutor, MonthlyEndCheck};
//!
//! # async fn run() -> eom_actions::Result<()> {
//! let executor = ActionExecutor::new(Arc::new(LogNotifier), Arc::new(LogEventCreator), "primary");
//! let check = MonthlyEndCheck::new(
//!     Arc::new(JsonFileHolidaySource::new("holidays.json")),
//!     executor,
//! );
//! let outcome = check.run(chrono::Utc::now()).await?;
//! println!("last business day: {}", outcome.last_business_day);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod adapters;
pub mod calendar_event;
pub mod check;
pub mod config;
pub mod error;
pub mod event;
pub mod executor;
pub mod ports;

pub use calendar_event::{CalendarEvent, EventTime};
pub use check::{CheckOutcome, MonthlyEndCheck};
pub use config::{ActionSettings, Config, ConfigError};
pub use error::{ActionError, Result};
pub use event::{CreatedEvent, EventRequest};
pub use executor::ActionExecutor;
#[allow(deprecated)]
pub use ports::CalendarAdapter;
pub use ports::{EventCreator, HolidaySource, Notifier};
