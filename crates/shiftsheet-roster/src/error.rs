//! Error types for shiftsheet-roster

use thiserror::Error;

/// Result type for roster operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a roster
///
/// The mapping and merging scans themselves never fail; everything here is
/// a shape or configuration violation detected up front.
#[derive(Debug, Error)]
pub enum Error {
    /// Layout configuration is internally inconsistent
    #[error("Invalid layout: {0}")]
    Layout(String),

    /// Job grid smaller than the layout requires
    #[error("Job grid is {rows}x{cols}, layout needs at least {need_rows}x{need_cols}")]
    JobGridShape {
        rows: u32,
        cols: u16,
        need_rows: u32,
        need_cols: u16,
    },

    /// Job name vector shorter than the job row count
    #[error("Job name list covers {names} rows, layout needs {need}")]
    JobNamesShape { names: usize, need: u32 },

    /// Individual grid smaller than the layout requires
    #[error("Individual grid is {rows}x{cols}, layout needs at least {need_cols} columns")]
    IndividualGridShape { rows: u32, cols: u16, need_cols: u16 },

    /// Merge scan bounds outside the grid
    #[error("Merge columns {col_start}..={col_end} invalid for grid with {cols} columns")]
    MergeBounds {
        col_start: u16,
        col_end: u16,
        cols: u16,
    },

    /// Core error (addressing, sheet limits, merged-region conflicts)
    #[error(transparent)]
    Core(#[from] shiftsheet_core::Error),
}
