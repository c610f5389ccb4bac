//! ICS file generation and output.
//!
//! This module serializes a `Calendar` according to RFC 5545 and writes it
//! next to the other generated calendars.

mod generate;
mod write;

pub use generate::{generate_ics, CalendarMetadata, DEFAULT_PRODUCT_ID};
pub use write::{output_path, write_calendar};
