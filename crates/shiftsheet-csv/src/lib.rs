//! # shiftsheet-csv
//!
//! CSV persistence for shiftsheet worksheets. Sheets are stored as plain
//! rectangles of strings: no header row, no type detection, empty fields
//! for unset cells.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
