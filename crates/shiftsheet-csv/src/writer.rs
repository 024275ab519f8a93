//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use shiftsheet_core::Worksheet;

/// CSV sheet writer
///
/// Writes the worksheet's used range from A1, so untouched leading rows
/// and columns come out as empty fields and a round-trip preserves cell
/// positions. Merged regions and styles have no CSV representation and
/// are not written.
pub struct CsvWriter;

impl CsvWriter {
    /// Write a worksheet to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        worksheet: &Worksheet,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(worksheet, file, options)
    }

    /// Write a worksheet to a writer
    pub fn write<W: Write>(
        worksheet: &Worksheet,
        writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .from_writer(writer);

        if let Some(range) = worksheet.used_range() {
            for row in 0..=range.end.row {
                let record: Vec<&str> = (0..=range.end.col)
                    .map(|col| worksheet.value_at(row, col))
                    .collect();
                csv_writer.write_record(&record)?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CsvReadOptions;
    use crate::reader::CsvReader;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_from_a1() {
        let mut ws = Worksheet::new("Test");
        ws.set_value_at(1, 1, "x").unwrap();

        let mut out = Vec::new();
        CsvWriter::write(&ws, &mut out, &CsvWriteOptions::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ",\n,x\n");
    }

    #[test]
    fn test_empty_sheet_writes_nothing() {
        let ws = Worksheet::new("Empty");
        let mut out = Vec::new();
        CsvWriter::write(&ws, &mut out, &CsvWriteOptions::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.csv");

        let mut ws = Worksheet::new("roster");
        ws.set_value_at(0, 3, "Alice").unwrap();
        ws.set_value_at(0, 4, "Cook").unwrap();
        ws.set_value_at(2, 3, "Bob").unwrap();

        CsvWriter::write_file(&ws, &path, &CsvWriteOptions::default()).unwrap();
        let back = CsvReader::read_file(&path, &CsvReadOptions::default()).unwrap();

        assert_eq!(back.value_at(0, 3), "Alice");
        assert_eq!(back.value_at(0, 4), "Cook");
        assert_eq!(back.value_at(2, 3), "Bob");
        assert_eq!(back.cell_count(), ws.cell_count());
    }
}
