use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use eom_time::{HolidayInterval, HolidayWindow};

use crate::calendar_event::CalendarEvent;
use crate::error::{ActionError, Result};
use crate::ports::HolidaySource;

/// Holidays read from a JSON file of calendar events.
///
/// The file holds either a bare array of events or an events-list response
/// (`{"items": [...]}`). It is re-read on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileHolidaySource {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EventDocument {
    List(Vec<CalendarEvent>),
    Response {
        #[serde(default)]
        items: Vec<CalendarEvent>,
    },
}

impl JsonFileHolidaySource {
    /// Source backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Events in the file, regardless of window.
    pub async fn load_events(&self) -> Result<Vec<CalendarEvent>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| ActionError::Io {
                path: self.path.clone(),
                source,
            })?;
        let events = match serde_json::from_slice::<EventDocument>(&bytes)? {
            EventDocument::List(items) | EventDocument::Response { items } => items,
        };
        Ok(events)
    }
}

#[async_trait]
impl HolidaySource for JsonFileHolidaySource {
    async fn fetch_holidays(&self, window: &HolidayWindow) -> Result<Vec<HolidayInterval>> {
        let events = self.load_events().await?;
        let total = events.len();

        let mut holidays = Vec::new();
        for event in events.iter().filter(|e| e.intersects(window)) {
            match event.to_interval() {
                Some(interval) => holidays.push(interval),
                None => tracing::warn!(
                    id = ?event.id,
                    summary = ?event.summary,
                    "ignoring holiday event without a usable start/end"
                ),
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            total,
            matched = holidays.len(),
            "holidays loaded from file"
        );
        Ok(holidays)
    }
}
