//! Core types for csv2ics.
//!
//! This crate turns a CSV file of dated rows into an iCalendar document:
//! - `reader` yields rows lazily from the input file
//! - `event` builds all-day events from rows
//! - `ics` serializes a `Calendar` and writes it to disk
//! - `convert` runs the whole pipeline

pub mod calendar;
pub mod convert;
pub mod date;
pub mod error;
pub mod event;
pub mod ics;
pub mod reader;

pub use calendar::Calendar;
pub use convert::{convert, ConvertOptions, ConvertSummary};
pub use error::{ConvertError, ConvertResult};
pub use event::CalendarEvent;
pub use reader::{Row, RowReader};
