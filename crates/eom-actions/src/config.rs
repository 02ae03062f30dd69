//! Environment-driven configuration.
//!
//! Values come from process environment variables (a `.env` file is loaded
//! first when present). Every setting has a default matching the production
//! deployment, so an empty environment yields a usable configuration.

use std::env;
use std::path::PathBuf;

use chrono::NaiveTime;
use eom_core::Natural;

/// Message pushed on the last business day.
pub const DEFAULT_MESSAGE: &str = "‼️今日は本人確認をする日‼️";

/// Title of the calendar event created on the last business day.
pub const DEFAULT_EVENT_SUMMARY: &str = "月末の最終営業日";

/// Reminder offsets, in minutes before the event.
pub const DEFAULT_REMINDERS: [Natural; 3] = [180, 120, 60];

/// Calendar the event is written to when none is configured.
pub const DEFAULT_CALENDAR_ID: &str = "primary";

const DEFAULT_EVENT_START: &str = "17:00";
const DEFAULT_EVENT_DURATION_MINUTES: Natural = 15;

/// What to do on the last business day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionSettings {
    /// Notification text.
    pub message: String,
    /// Event title.
    pub event_summary: String,
    /// Local (Asia/Tokyo) start time of the event.
    pub event_start: NaiveTime,
    /// Event length.
    pub event_duration_minutes: Natural,
    /// Popup reminders, minutes before the start.
    pub reminders: Vec<Natural>,
}

impl Default for ActionSettings {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            event_summary: DEFAULT_EVENT_SUMMARY.to_string(),
            event_start: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
            event_duration_minutes: DEFAULT_EVENT_DURATION_MINUTES,
            reminders: DEFAULT_REMINDERS.to_vec(),
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Calendar receiving the month-end event.
    pub calendar_id: String,
    /// JSON file of holiday events, if holidays are read from disk.
    pub holidays_path: Option<PathBuf>,
    /// Notification and event settings.
    pub actions: ActionSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calendar_id: DEFAULT_CALENDAR_ID.to_string(),
            holidays_path: None,
            actions: ActionSettings::default(),
        }
    }
}

impl Config {
    /// Load from the process environment (and `.env`, if any).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ActionSettings::default();

        let calendar_id =
            non_empty(&lookup, "EOM_CALENDAR_ID")?.unwrap_or_else(|| DEFAULT_CALENDAR_ID.into());

        let holidays_path = non_empty(&lookup, "EOM_HOLIDAYS_PATH")?.map(PathBuf::from);

        let message = non_empty(&lookup, "EOM_NOTIFY_MESSAGE")?.unwrap_or(defaults.message);

        let event_summary =
            non_empty(&lookup, "EOM_EVENT_SUMMARY")?.unwrap_or(defaults.event_summary);

        let start_raw =
            lookup("EOM_EVENT_START").unwrap_or_else(|| DEFAULT_EVENT_START.to_string());
        let event_start = NaiveTime::parse_from_str(start_raw.trim(), "%H:%M").map_err(|_| {
            ConfigError::InvalidTime {
                var: "EOM_EVENT_START",
                value: start_raw.clone(),
            }
        })?;

        let event_duration_minutes = match lookup("EOM_EVENT_DURATION_MINUTES") {
            Some(raw) => parse_minutes("EOM_EVENT_DURATION_MINUTES", &raw)?,
            None => defaults.event_duration_minutes,
        };
        if event_duration_minutes == 0 {
            return Err(ConfigError::InvalidNumber {
                var: "EOM_EVENT_DURATION_MINUTES",
                value: "0".into(),
            });
        }

        let reminders = match lookup("EOM_REMINDERS") {
            Some(raw) if raw.trim().is_empty() => Vec::new(),
            Some(raw) => raw
                .split(',')
                .map(|part| parse_minutes("EOM_REMINDERS", part))
                .collect::<Result<Vec<_>, _>>()?,
            None => defaults.reminders,
        };

        Ok(Config {
            calendar_id,
            holidays_path,
            actions: ActionSettings {
                message,
                event_summary,
                event_start,
                event_duration_minutes,
                reminders,
            },
        })
    }
}

fn non_empty<F>(lookup: &F, var: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(v) if v.trim().is_empty() => Err(ConfigError::Empty(var)),
        other => Ok(other),
    }
}

fn parse_minutes(var: &'static str, raw: &str) -> Result<Natural, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: raw.to_string(),
        })
}

/// Invalid value in the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The variable is present but blank.
    #[error("{0} is set but empty")]
    Empty(&'static str),

    /// Not a `HH:MM` time.
    #[error("{var} must be HH:MM, got {value:?}")]
    InvalidTime {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },

    /// Not a positive whole number of minutes.
    #[error("{var} must be a positive number of minutes, got {value:?}")]
    InvalidNumber {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },
}
