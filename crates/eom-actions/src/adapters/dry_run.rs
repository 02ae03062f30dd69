use async_trait::async_trait;

use crate::error::Result;
use crate::event::{CreatedEvent, EventRequest};
use crate::ports::{EventCreator, Notifier};

/// Writes the notification to the log instead of delivering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_message(&self, message: &str) -> Result<()> {
        tracing::info!(message, "notification (dry run)");
        Ok(())
    }
}

/// Writes the event request body to the log instead of creating it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEventCreator;

#[async_trait]
impl EventCreator for LogEventCreator {
    async fn add_event(&self, event: &EventRequest, calendar_id: &str) -> Result<CreatedEvent> {
        let body = serde_json::to_string(&event.to_body())?;
        tracing::info!(calendar_id, %body, "calendar event (dry run)");
        Ok(CreatedEvent {
            id: format!("dry-run-{}", event.start.format("%Y-%m-%dT%H:%M")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActionSettings;
    use eom_time::Date;

    #[tokio::test]
    async fn dry_run_sinks_succeed() {
        LogNotifier.send_message("hello").await.unwrap();

        let day = Date::from_ymd(2024, 8, 30).unwrap();
        let request = EventRequest::monthly_end(day, &ActionSettings::default());
        let created = LogEventCreator.add_event(&request, "primary").await.unwrap();
        assert_eq!(created.id, "dry-run-2024-08-30T17:00");
    }
}
