//! Writing generated calendars to disk.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::info;

use super::generate::{generate_ics, CalendarMetadata};
use crate::calendar::Calendar;
use crate::error::ConvertResult;

/// Path of the .ics file for an input: `<output_dir>/<input stem>.ics`
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(OsStr::new("calendar"));

    // Only the last extension is replaced, "my.events.csv" -> "my.events.ics"
    let mut file_name = stem.to_os_string();
    file_name.push(".ics");

    output_dir.join(file_name)
}

/// Serialize a calendar and write it to `path`, replacing any existing file.
///
/// The parent directory is created if needed. The file is written in place,
/// so an interrupted write can leave a truncated file behind.
pub fn write_calendar(
    calendar: &Calendar,
    path: &Path,
    metadata: &CalendarMetadata,
) -> ConvertResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let content = generate_ics(calendar, metadata);
    std::fs::write(path, content)?;

    info!(path = %path.display(), events = calendar.len(), "wrote calendar");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::CalendarEvent;
    use chrono::NaiveDate;

    #[test]
    fn output_path_uses_input_basename() {
        assert_eq!(
            output_path(Path::new("data/2025/events.csv"), Path::new("calendars")),
            PathBuf::from("calendars/events.ics")
        );
    }

    #[test]
    fn output_path_replaces_only_last_extension() {
        assert_eq!(
            output_path(Path::new("my.events.csv"), Path::new("out")),
            PathBuf::from("out/my.events.ics")
        );
        assert_eq!(
            output_path(Path::new("no_extension"), Path::new("out")),
            PathBuf::from("out/no_extension.ics")
        );
    }

    #[test]
    fn write_calendar_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("events.ics");
        let metadata = CalendarMetadata::now("-//test//EN");

        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale content").unwrap();

        let mut calendar = Calendar::new();
        calendar.push(CalendarEvent::new(
            "New Year",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            "Celebrate",
        ));
        write_calendar(&calendar, &path, &metadata).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale content"));
        assert!(written.contains("SUMMARY:New Year"));
    }

    #[test]
    fn write_calendar_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendars").join("empty.ics");

        write_calendar(&Calendar::new(), &path, &CalendarMetadata::now("-//test//EN")).unwrap();

        assert!(path.exists());
    }
}
