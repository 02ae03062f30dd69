//! Holiday events as calendar providers deliver them.
//!
//! The shape follows the Google Calendar `Event` resource: an all-day event
//! carries `start.date`, a timed one `start.dateTime` (RFC 3339). Conversion
//! to [`HolidayInterval`] is lenient: an event with no usable start, an
//! unparsable timestamp or an end that does not follow its start is dropped
//! and therefore never matches any day.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use eom_time::{Date, HolidayInterval, HolidayWindow};

/// One entry of a holiday calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Provider id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Title, e.g. the holiday's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Start; required for the event to count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<EventTime>,
    /// Exclusive end, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EventTime>,
}

/// Start or end of a [`CalendarEvent`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    /// `YYYY-MM-DD`, all-day events only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// RFC 3339 instant, timed events only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    /// IANA zone the provider reported; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl EventTime {
    /// All-day boundary on `date`.
    pub fn all_day(date: Date) -> Self {
        Self {
            date: Some(date.to_string()),
            ..Self::default()
        }
    }

    /// Timed boundary at `at`.
    pub fn instant(at: DateTime<Utc>) -> Self {
        Self {
            date_time: Some(at.to_rfc3339()),
            ..Self::default()
        }
    }

    fn parse_date(&self) -> Option<Date> {
        let raw = self.date.as_deref()?;
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .ok()
            .map(Date::from)
    }

    fn parse_instant(&self) -> Option<DateTime<Utc>> {
        let raw = self.date_time.as_deref()?;
        DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

impl CalendarEvent {
    /// Holiday interval described by this event, or `None` when malformed.
    pub fn to_interval(&self) -> Option<HolidayInterval> {
        let start = self.start.as_ref()?;
        if start.date.is_some() {
            return start.parse_date().map(HolidayInterval::all_day);
        }
        let begins = start.parse_instant()?;
        match &self.end {
            Some(end) if end.date_time.is_some() => {
                let ends = end.parse_instant()?;
                HolidayInterval::timed(&begins, &ends).ok()
            }
            _ => Some(HolidayInterval::starting_at(&begins)),
        }
    }

    /// Return `true` if any part of the event lies within `window`.
    ///
    /// Malformed events are kept so that [`CalendarEvent::to_interval`] can
    /// report them.
    pub fn intersects(&self, window: &HolidayWindow) -> bool {
        self.to_interval()
            .map_or(true, |interval| interval.intersects(window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eom_time::month_window;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn parse(json: &str) -> CalendarEvent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn all_day_event() {
        let ev = parse(r#"{"summary":"山の日","start":{"date":"2024-08-12"},"end":{"date":"2024-08-13"}}"#);
        assert_eq!(
            ev.to_interval(),
            Some(HolidayInterval::all_day(date(2024, 8, 12)))
        );
    }

    #[test]
    fn timed_event_without_end() {
        let ev = parse(r#"{"start":{"dateTime":"2024-08-30T00:00:00.000Z"}}"#);
        let interval = ev.to_interval().unwrap();
        assert!(interval.covers(date(2024, 8, 30)));
    }

    #[test]
    fn timed_event_with_end() {
        let ev = parse(
            r#"{"start":{"dateTime":"2024-08-30T00:00:00+09:00","timeZone":"Asia/Tokyo"},
                "end":{"dateTime":"2024-08-31T00:00:00+09:00","timeZone":"Asia/Tokyo"}}"#,
        );
        let interval = ev.to_interval().unwrap();
        assert!(interval.covers(date(2024, 8, 30)));
        assert!(!interval.covers(date(2024, 8, 31)));
    }

    #[test]
    fn timed_event_within_one_day() {
        let ev = parse(
            r#"{"summary":"office closed",
                "start":{"dateTime":"2024-08-30T10:00:00+09:00","timeZone":"Asia/Tokyo"},
                "end":{"dateTime":"2024-08-30T18:00:00+09:00","timeZone":"Asia/Tokyo"}}"#,
        );
        let interval = ev.to_interval().unwrap();
        assert!(interval.covers(date(2024, 8, 30)));
        assert!(!interval.covers(date(2024, 8, 29)));
        assert!(!interval.covers(date(2024, 8, 31)));
    }

    #[test]
    fn malformed_events_are_dropped() {
        assert_eq!(parse(r#"{}"#).to_interval(), None);
        assert_eq!(parse(r#"{"start":{}}"#).to_interval(), None);
        assert_eq!(parse(r#"{"start":{"date":"2024-02-30"}}"#).to_interval(), None);
        assert_eq!(parse(r#"{"start":{"dateTime":"yesterday"}}"#).to_interval(), None);
        assert_eq!(
            parse(
                r#"{"start":{"dateTime":"2024-08-30T10:00:00Z"},"end":{"dateTime":"2024-08-30T09:00:00Z"}}"#
            )
            .to_interval(),
            None
        );
        assert_eq!(
            parse(r#"{"start":{"dateTime":"2024-08-30T10:00:00Z"},"end":{"dateTime":"soon"}}"#)
                .to_interval(),
            None
        );
    }

    #[test]
    fn window_intersection() {
        let august = month_window(date(2024, 8, 15));
        assert!(parse(r#"{"start":{"date":"2024-08-31"}}"#).intersects(&august));
        assert!(!parse(r#"{"start":{"date":"2024-09-01"}}"#).intersects(&august));
        // 2024-07-31T16:00Z is 1 August in Tokyo.
        assert!(parse(r#"{"start":{"dateTime":"2024-07-31T16:00:00Z"}}"#).intersects(&august));
        assert!(!parse(r#"{"start":{"dateTime":"2024-07-31T14:00:00Z"}}"#).intersects(&august));
    }

    #[test]
    fn serializes_in_provider_shape() {
        let ev = CalendarEvent {
            start: Some(EventTime::all_day(date(2024, 7, 31))),
            ..CalendarEvent::default()
        };
        assert_eq!(
            serde_json::to_string(&ev).unwrap(),
            r#"{"start":{"date":"2024-07-31"}}"#
        );
    }
}
