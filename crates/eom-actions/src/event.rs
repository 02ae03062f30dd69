//! Calendar events created by the month-end action.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use serde::Serialize;

use eom_core::Natural;
use eom_time::{zone, Date, BUSINESS_TZ};

use crate::config::ActionSettings;

/// A request to create one calendar event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRequest {
    /// Event title.
    pub summary: String,
    /// Start, business zone.
    pub start: DateTime<Tz>,
    /// End, business zone; after `start`.
    pub end: DateTime<Tz>,
    /// Optional free text.
    pub description: Option<String>,
    /// Optional place.
    pub location: Option<String>,
    /// Popup reminders, minutes before `start`. Empty keeps the calendar's
    /// default reminders.
    pub reminders: Vec<Natural>,
}

impl EventRequest {
    /// The month-end reminder event on `date`, local times per `settings`.
    pub fn monthly_end(date: Date, settings: &ActionSettings) -> Self {
        let start = zone::local_datetime(date, settings.event_start);
        let end = start + Duration::minutes(i64::from(settings.event_duration_minutes));
        Self {
            summary: settings.event_summary.clone(),
            start,
            end,
            description: None,
            location: None,
            reminders: settings.reminders.clone(),
        }
    }

    /// Request body in the provider's event format.
    pub fn to_body(&self) -> EventBody {
        EventBody {
            summary: self.summary.clone(),
            start: EventBoundary::at(&self.start),
            end: EventBoundary::at(&self.end),
            description: self.description.clone(),
            location: self.location.clone(),
            reminders: (!self.reminders.is_empty()).then(|| Reminders {
                use_default: false,
                overrides: self
                    .reminders
                    .iter()
                    .map(|&minutes| ReminderOverride {
                        method: "popup",
                        minutes,
                    })
                    .collect(),
            }),
        }
    }
}

/// Serialized form of an [`EventRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBody {
    /// Event title.
    pub summary: String,
    /// Start instant.
    pub start: EventBoundary,
    /// End instant.
    pub end: EventBoundary,
    /// Optional free text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Popup overrides; absent keeps the calendar defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Reminders>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// `start` / `end` of an [`EventBody`].
pub struct EventBoundary {
    /// RFC 3339 instant with the business-zone offset.
    pub date_time: String,
    /// IANA zone name.
    pub time_zone: &'static str,
}

impl EventBoundary {
    fn at(instant: &DateTime<Tz>) -> Self {
        Self {
            date_time: instant.with_timezone(&BUSINESS_TZ).to_rfc3339(),
            time_zone: BUSINESS_TZ.name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Reminder block of an [`EventBody`].
pub struct Reminders {
    /// Always `false` when overrides are sent.
    pub use_default: bool,
    /// One entry per reminder.
    pub overrides: Vec<ReminderOverride>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A single reminder.
pub struct ReminderOverride {
    /// Delivery method, `popup`.
    pub method: &'static str,
    /// Minutes before the start.
    pub minutes: Natural,
}

/// What the calendar returned for a created event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedEvent {
    /// Provider-assigned event id.
    pub id: String,
}
