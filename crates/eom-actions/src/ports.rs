//! Collaborator interfaces.
//!
//! The month-end check talks to the outside world through three narrow
//! capabilities. Provider clients (HTTP, credentials) live behind these
//! traits and are composed, never inherited.

use std::sync::Arc;

use async_trait::async_trait;

use eom_time::{HolidayInterval, HolidayWindow};

use crate::error::Result;
use crate::event::{CreatedEvent, EventRequest};

/// Supplies the holidays falling inside a time window.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Zero or more holidays; order and duplicates are irrelevant.
    async fn fetch_holidays(&self, window: &HolidayWindow) -> Result<Vec<HolidayInterval>>;
}

/// Delivers a text message to the configured recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `message`; an error means it was not delivered.
    async fn send_message(&self, message: &str) -> Result<()>;
}

/// Writes events into a calendar.
#[async_trait]
pub trait EventCreator: Send + Sync {
    /// Create `event` in the calendar identified by `calendar_id`.
    async fn add_event(&self, event: &EventRequest, calendar_id: &str) -> Result<CreatedEvent>;
}

/// One object offering both calendar capabilities.
///
/// Kept for callers that were written against a single calendar client;
/// it only delegates to the two dedicated implementations.
#[deprecated(note = "use a `HolidaySource` and an `EventCreator` directly")]
pub struct CalendarAdapter {
    holidays: Arc<dyn HolidaySource>,
    events: Arc<dyn EventCreator>,
}

#[allow(deprecated)]
impl CalendarAdapter {
    /// Combine a holiday source and an event creator.
    pub fn new(holidays: Arc<dyn HolidaySource>, events: Arc<dyn EventCreator>) -> Self {
        Self { holidays, events }
    }
}

#[allow(deprecated)]
#[async_trait]
impl HolidaySource for CalendarAdapter {
    async fn fetch_holidays(&self, window: &HolidayWindow) -> Result<Vec<HolidayInterval>> {
        self.holidays.fetch_holidays(window).await
    }
}

#[allow(deprecated)]
#[async_trait]
impl EventCreator for CalendarAdapter {
    async fn add_event(&self, event: &EventRequest, calendar_id: &str) -> Result<CreatedEvent> {
        self.events.add_event(event, calendar_id).await
    }
}
