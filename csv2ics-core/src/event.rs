//! All-day calendar events built from CSV rows.

use chrono::NaiveDate;
use tracing::debug;

use crate::date::parse_date;
use crate::error::ConvertResult;
use crate::reader::Row;

/// Domain part appended to every generated UID.
const UID_DOMAIN: &str = "csv2ics";

/// A single-day, all-day calendar event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub uid: String,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    all_day: bool,
}

impl CalendarEvent {
    /// Create an all-day event with a fresh, random UID.
    pub fn new(title: impl Into<String>, date: NaiveDate, description: impl Into<String>) -> Self {
        Self::with_uid(generate_uid(), title, date, description)
    }

    /// Create an all-day event with a caller-chosen UID.
    pub fn with_uid(
        uid: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        CalendarEvent {
            uid: uid.into(),
            title: title.into(),
            date,
            description: description.into(),
            all_day: true,
        }
    }

    pub fn is_all_day(&self) -> bool {
        self.all_day
    }
}

/// Generate a UID that is unique per event and independent of row content
pub fn generate_uid() -> String {
    format!("{}@{}", uuid::Uuid::new_v4(), UID_DOMAIN)
}

/// Build an event from one CSV row.
pub fn build_event(row: Row) -> ConvertResult<CalendarEvent> {
    let date = parse_date(&row.date)?;
    debug!(line = row.line, %date, title = %row.title, "built event");

    Ok(CalendarEvent::new(row.title, date, row.description))
}

/// Build events from a row sequence, stopping at the first bad row.
pub fn build_events<I>(rows: I) -> ConvertResult<Vec<CalendarEvent>>
where
    I: IntoIterator<Item = ConvertResult<Row>>,
{
    rows.into_iter().map(|row| row.and_then(build_event)).collect()
}
