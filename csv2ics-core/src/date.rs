//! Day/month/year date parsing.

use chrono::NaiveDate;

use crate::error::{ConvertError, ConvertResult};

/// Input date format, e.g. `25/12/2024`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `D/M/Y` date string into a calendar date.
///
/// Day and month take one or two digits, the year exactly four. Signs and
/// whitespace are rejected.
pub fn parse_date(input: &str) -> ConvertResult<NaiveDate> {
    let error = |reason: String| ConvertError::DateParse {
        input: input.to_string(),
        reason,
    };

    if !has_date_shape(input) {
        return Err(error(format!("does not match format '{DATE_FORMAT}'")));
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|e| error(e.to_string()))
}

// chrono's %Y alone would take "24" or "+2024" as a year
fn has_date_shape(input: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };

    let parts: Vec<&str> = input.split('/').collect();
    matches!(
        parts.as_slice(),
        [day, month, year] if digits(*day, 1, 2) && digits(*month, 1, 2) && digits(*year, 4, 4)
    )
}
