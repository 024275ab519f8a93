//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use shiftsheet_core::Worksheet;

/// CSV sheet reader
///
/// Every field is taken verbatim as a string; empty fields stay unset so
/// the worksheet reads back exactly like a sheet range would.
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a worksheet named after the file stem
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Sheet1".to_string());

        let file = File::open(path)?;
        let mut worksheet = Self::read(file, options)?;
        worksheet.set_name(name);
        Ok(worksheet)
    }

    /// Read CSV from a reader into a worksheet
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .flexible(true)
            .from_reader(reader);

        let mut worksheet = Worksheet::new("Sheet1");

        for (row, result) in csv_reader.records().enumerate() {
            let record = result?;
            for (col, field) in record.iter().enumerate() {
                if field.is_empty() {
                    continue;
                }
                worksheet.set_value_at(row as u32, col as u16, field)?;
            }
        }

        log::debug!("read {} cell(s) from CSV", worksheet.cell_count());
        Ok(worksheet)
    }
}
