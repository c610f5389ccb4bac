//! Lazy CSV row reading.
//!
//! The first line is always treated as a header and discarded without
//! looking at its contents. Every following line must hold a record with
//! exactly three fields: `date,name,description`. A blank line is a record
//! with no fields, so it is rejected like any other short row.

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::error::{ConvertError, ConvertResult};

/// Number of fields in a data row.
pub const FIELDS_PER_ROW: usize = 3;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// One data row, as read from the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number in the source file
    pub line: u64,
    /// Date text in `D/M/Y` form
    pub date: String,
    pub title: String,
    pub description: String,
}

impl Row {
    fn from_record(line: u64, record: &StringRecord) -> ConvertResult<Self> {
        if record.len() != FIELDS_PER_ROW {
            return Err(ConvertError::Structure {
                line,
                found: record.len(),
            });
        }

        Ok(Row {
            line,
            date: record[0].to_string(),
            title: record[1].to_string(),
            description: record[2].to_string(),
        })
    }
}

/// Blank lines found where the next record would start
struct Gap {
    /// Line of the first blank line, or of the record when there are none
    line: u64,
    blank_lines: u64,
}

/// Count the blank lines at `offset`, the reader position after a record.
///
/// The csv reader skips these silently, so they are found by looking at the
/// raw bytes. `line` is the reader's line count at `offset`.
fn gap_at(data: &[u8], mut offset: usize, mut line: u64) -> Gap {
    if offset == 0 && data.starts_with(UTF8_BOM) {
        offset = UTF8_BOM.len();
    }

    // The `\n` of a CRLF terminator may be left over from the previous read
    if offset > 0 && data.get(offset - 1) == Some(&b'\r') && data.get(offset) == Some(&b'\n') {
        offset += 1;
        line += 1;
    }

    let mut blank_lines = 0;
    while let Some(&byte) = data.get(offset) {
        match byte {
            b'\n' => offset += 1,
            b'\r' if data.get(offset + 1) == Some(&b'\n') => offset += 2,
            b'\r' => offset += 1,
            _ => break,
        }
        blank_lines += 1;
    }

    Gap { line, blank_lines }
}

/// Iterator over the data rows of a CSV source.
///
/// The source is read into memory up front, so a file is closed before the
/// first row is parsed. Iteration stops after the first error.
pub struct RowReader {
    reader: Reader<Cursor<Vec<u8>>>,
    record: StringRecord,
    header_read: bool,
    finished: bool,
}

impl RowReader {
    /// Open a CSV file; its first line is skipped as the header.
    pub fn open(path: &Path) -> ConvertResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(mut source: R) -> ConvertResult<Self> {
        let mut data = Vec::new();
        source.read_to_end(&mut data)?;

        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(Cursor::new(data));

        Ok(RowReader {
            reader,
            record: StringRecord::new(),
            header_read: false,
            finished: false,
        })
    }

    fn read_row(&mut self) -> Option<ConvertResult<Row>> {
        loop {
            let position = self.reader.position();
            let offset = position.byte() as usize;
            let mut gap = gap_at(self.reader.get_ref().get_ref(), offset, position.line());

            // A blank first line is the header
            if !self.header_read && gap.blank_lines > 0 {
                self.header_read = true;
                gap.blank_lines -= 1;
                gap.line += 1;
            }

            if gap.blank_lines > 0 {
                return Some(Err(ConvertError::Structure {
                    line: gap.line,
                    found: 0,
                }));
            }

            match self.reader.read_record(&mut self.record) {
                Ok(true) => {}
                Ok(false) if self.header_read => return None,
                Ok(false) => return Some(Err(ConvertError::MissingHeader)),
                Err(e) => return Some(Err(e.into())),
            }

            if !self.header_read {
                self.header_read = true;
                continue;
            }

            return Some(Row::from_record(gap.line, &self.record));
        }
    }
}

impl Iterator for RowReader {
    type Item = ConvertResult<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let row = self.read_row();
        if !matches!(row, Some(Ok(_))) {
            self.finished = true;
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_rows(input: &str) -> ConvertResult<Vec<Row>> {
        RowReader::from_reader(input.as_bytes())?.collect()
    }

    #[test]
    fn skips_header_row() {
        let rows = read_rows("date,name,description\n01/01/2025,New Year,Celebrate\n").unwrap();

        assert_eq!(
            rows,
            vec![Row {
                line: 2,
                date: "01/01/2025".to_string(),
                title: "New Year".to_string(),
                description: "Celebrate".to_string(),
            }]
        );
    }

    #[test]
    fn header_is_not_validated() {
        // A header that looks like data (or has the wrong shape) is still dropped
        let rows = read_rows("01/01/2025,New Year,Celebrate\n02/01/2025,Back to work,Sigh\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Back to work");

        let rows = read_rows("just one column\n02/01/2025,Back to work,Sigh\n").unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn header_only_yields_no_rows() {
        assert!(read_rows("date,name,description\n").unwrap().is_empty());
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(read_rows(""), Err(ConvertError::MissingHeader)));
    }

    #[test]
    fn fields_are_kept_verbatim() {
        let rows = read_rows("h,h,h\n05/06/2025, Padded title ,\"Quoted, with comma\"\n").unwrap();

        assert_eq!(rows[0].title, " Padded title ");
        assert_eq!(rows[0].description, "Quoted, with comma");
    }

    #[test]
    fn two_fields_is_a_structural_error() {
        let err = read_rows("date,name,description\n01/01/2025,New Year\n").unwrap_err();

        match err {
            ConvertError::Structure { line, found } => {
                assert_eq!(line, 2);
                assert_eq!(found, 2);
            }
            other => panic!("expected Structure error, got {other:?}"),
        }
    }

    #[test]
    fn four_fields_is_a_structural_error() {
        let err = read_rows("h,h,h\n01/01/2025,a,b,c\n").unwrap_err();
        assert!(matches!(err, ConvertError::Structure { found: 4, .. }));
    }

    #[test]
    fn blank_line_between_rows_is_a_structural_error() {
        let err = read_rows("h,h,h\n01/01/2025,a,b\n\n02/01/2025,c,d\n").unwrap_err();
        assert!(matches!(err, ConvertError::Structure { line: 3, found: 0 }), "got {err:?}");
    }

    #[test]
    fn trailing_blank_line_is_a_structural_error() {
        let err = read_rows("h,h,h\n01/01/2025,a,b\n\n").unwrap_err();
        assert!(matches!(err, ConvertError::Structure { line: 3, found: 0 }), "got {err:?}");
    }

    #[test]
    fn leading_blank_line_is_the_header() {
        // The blank first line is dropped, so "h,h,h" becomes a data row
        let rows = read_rows("\nh,h,h\n01/01/2025,a,b\n").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[0].date, "h");
        assert_eq!(rows[1].line, 3);
    }

    #[test]
    fn second_leading_blank_line_is_a_structural_error() {
        let err = read_rows("\n\nh,h,h\n").unwrap_err();
        assert!(matches!(err, ConvertError::Structure { line: 2, found: 0 }), "got {err:?}");
    }

    #[test]
    fn single_blank_line_is_only_a_header() {
        assert!(read_rows("\n").unwrap().is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let rows = read_rows("h,h,h\r\n01/01/2025,a,b\r\n02/01/2025,c,d\r\n").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].line, 3);
        assert_eq!(rows[1].description, "d");
    }

    #[test]
    fn crlf_blank_line_is_a_structural_error() {
        let err = read_rows("h,h,h\r\n01/01/2025,a,b\r\n\r\n02/01/2025,c,d\r\n").unwrap_err();
        assert!(matches!(err, ConvertError::Structure { line: 3, found: 0 }), "got {err:?}");
    }

    #[test]
    fn last_row_without_newline() {
        let rows = read_rows("h,h,h\n01/01/2025,a,b").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "b");
    }

    #[test]
    fn utf8_bom_is_part_of_the_header() {
        let rows = read_rows("\u{feff}date,name,description\n01/01/2025,a,b\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].line, 2);
    }

    #[test]
    fn rows_are_read_lazily() {
        // The bad row is only reported once iteration reaches it
        let mut reader =
            RowReader::from_reader("h,h,h\n01/01/2025,a,b\nbroken\n".as_bytes()).unwrap();

        assert!(reader.next().unwrap().is_ok());
        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
    }
}
