//! CSV to ICS conversion pipeline.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::calendar::Calendar;
use crate::error::ConvertResult;
use crate::event::build_events;
use crate::ics::{output_path, write_calendar, CalendarMetadata, DEFAULT_PRODUCT_ID};
use crate::reader::RowReader;

pub const DEFAULT_OUTPUT_DIR: &str = "calendars";

/// Settings for a single conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Directory the .ics file is written to
    pub output_dir: PathBuf,
    /// X-WR-CALNAME; the input basename when unset
    pub calendar_name: Option<String>,
    pub product_id: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            calendar_name: None,
            product_id: DEFAULT_PRODUCT_ID.to_string(),
        }
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub output_path: PathBuf,
    pub event_count: usize,
}

/// Convert `input` into an .ics file under `options.output_dir`.
///
/// Every row is read and converted before the output file is touched, so a
/// bad row leaves no output behind.
pub fn convert(input: &Path, options: &ConvertOptions) -> ConvertResult<ConvertSummary> {
    let target = output_path(input, &options.output_dir);

    let events = {
        let rows = RowReader::open(input)?;
        build_events(rows)?
    };
    debug!(input = %input.display(), events = events.len(), "read input");

    let name = options.calendar_name.clone().or_else(|| {
        input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
    });

    let mut calendar = match name {
        Some(name) => Calendar::with_name(name),
        None => Calendar::new(),
    };
    calendar.extend(events);

    let metadata = CalendarMetadata::now(options.product_id.clone());
    write_calendar(&calendar, &target, &metadata)?;

    Ok(ConvertSummary {
        output_path: target,
        event_count: calendar.len(),
    })
}
