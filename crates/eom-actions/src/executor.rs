//! The month-end actions: one notification, one calendar event.

use std::sync::Arc;

use eom_time::Date;

use crate::config::ActionSettings;
use crate::error::Result;
use crate::event::{CreatedEvent, EventRequest};
use crate::ports::{EventCreator, Notifier};

/// Runs the side effects for a last business day.
pub struct ActionExecutor {
    notifier: Arc<dyn Notifier>,
    events: Arc<dyn EventCreator>,
    calendar_id: String,
    settings: ActionSettings,
}

impl ActionExecutor {
    /// Executor with the default message, event and reminders.
    pub fn new(
        notifier: Arc<dyn Notifier>,
        events: Arc<dyn EventCreator>,
        calendar_id: impl Into<String>,
    ) -> Self {
        Self::with_settings(notifier, events, calendar_id, ActionSettings::default())
    }

    /// Executor with explicit settings.
    pub fn with_settings(
        notifier: Arc<dyn Notifier>,
        events: Arc<dyn EventCreator>,
        calendar_id: impl Into<String>,
        settings: ActionSettings,
    ) -> Self {
        Self {
            notifier,
            events,
            calendar_id: calendar_id.into(),
            settings,
        }
    }

    /// Settings used for the actions.
    pub fn settings(&self) -> &ActionSettings {
        &self.settings
    }

    /// Notify, then add the reminder event on `date`.
    ///
    /// A failed notification stops the run before the event is created.
    pub async fn execute_monthly_end_actions(&self, date: Date) -> Result<CreatedEvent> {
        self.send_notification().await?;
        self.add_calendar_event(date).await
    }

    async fn send_notification(&self) -> Result<()> {
        self.notifier.send_message(&self.settings.message).await?;
        tracing::info!("month-end notification sent");
        Ok(())
    }

    async fn add_calendar_event(&self, date: Date) -> Result<CreatedEvent> {
        let request = EventRequest::monthly_end(date, &self.settings);
        let created = self.events.add_event(&request, &self.calendar_id).await?;
        tracing::info!(
            event_id = %created.id,
            calendar_id = %self.calendar_id,
            start = %request.start.to_rfc3339(),
            "month-end calendar event created"
        );
        Ok(created)
    }
}

impl std::fmt::Debug for ActionExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionExecutor")
            .field("calendar_id", &self.calendar_id)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
