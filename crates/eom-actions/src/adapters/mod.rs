//! Ready-made collaborator implementations.
//!
//! None of these talk to a provider over the network: holidays come from
//! memory or a JSON file, and actions are written to the log.

mod dry_run;
mod json_file;
mod memory;

pub use dry_run::{LogEventCreator, LogNotifier};
pub use json_file::JsonFileHolidaySource;
pub use memory::StaticHolidaySource;
