//! ICS generation.

use chrono::{DateTime, NaiveDate, Utc};
use icalendar::{Component, Property, ValueType};

use crate::calendar::Calendar;

pub const DEFAULT_PRODUCT_ID: &str = "-//csv2ics//EN";

/// Document-level values that don't come from the events themselves
#[derive(Debug, Clone)]
pub struct CalendarMetadata {
    pub product_id: String,
    /// DTSTAMP shared by every event in the document
    pub dtstamp: DateTime<Utc>,
}

impl CalendarMetadata {
    pub fn now(product_id: impl Into<String>) -> Self {
        CalendarMetadata {
            product_id: product_id.into(),
            dtstamp: Utc::now(),
        }
    }
}

/// Generate .ics content with one all-day VEVENT per calendar event
pub fn generate_ics(calendar: &Calendar, metadata: &CalendarMetadata) -> String {
    let mut cal = icalendar::Calendar::new();

    if let Some(name) = calendar.name() {
        cal.name(name);
    }

    let dtstamp = metadata.dtstamp.format("%Y%m%dT%H%M%SZ").to_string();

    for event in calendar.events() {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event.uid);
        ics_event.add_property("DTSTAMP", &dtstamp);
        ics_event.summary(&event.title);
        ics_event.description(&event.description);

        // All-day: DTEND is the exclusive next day. Parsed dates stop at year
        // 9999, so only a hand-built NaiveDate::MAX falls back to DTSTART.
        let end = event.date.succ_opt().unwrap_or(event.date);
        add_date_property(&mut ics_event, "DTSTART", event.date);
        add_date_property(&mut ics_event, "DTEND", end);

        cal.push(ics_event.done());
    }

    let cal = cal.done();

    strip_ics_bloat(&cal.to_string(), &metadata.product_id)
}

/// Clean up ICS output from the icalendar crate
/// - Replace PRODID with our own product id
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str, product_id: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(product_id);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}
