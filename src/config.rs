//! Run configuration assembled from command-line flags.

use std::path::PathBuf;

use csv2ics_core::ConvertOptions;

/// Build conversion options, keeping library defaults for anything not set
pub fn convert_options(output_dir: PathBuf, calendar_name: Option<String>) -> ConvertOptions {
    ConvertOptions {
        output_dir,
        calendar_name: calendar_name.filter(|name| !name.trim().is_empty()),
        ..ConvertOptions::default()
    }
}
