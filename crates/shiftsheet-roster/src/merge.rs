//! Run merger
//!
//! Scans the mapped individual grid row by row and yields maximal runs of
//! consecutive identical non-empty cells. Each run becomes one merge
//! instruction for the renderer; a run of length 1 is legal and simply
//! means "no merge needed".

use shiftsheet_core::Grid;

use crate::error::{Error, Result};

/// One maximal run of identical non-empty cells within a grid row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSpan {
    /// Grid row the run lies in
    pub row: u32,
    /// Grid column the run starts at
    pub start_col: u16,
    /// Run length in columns (>= 1)
    pub len: u16,
    /// The shared cell value
    pub value: String,
}

impl MergeSpan {
    /// Grid column just past the end of the run
    pub fn end_col(&self) -> u16 {
        self.start_col + self.len
    }

    /// Whether the renderer should actually merge (length >= 2)
    pub fn needs_merge(&self) -> bool {
        self.len >= 2
    }
}

/// Scan `grid` for merge runs between `col_start` and `col_end` inclusive,
/// from `row_start` through the last grid row
///
/// Returns a lazy, finite, non-restartable iterator; spans within a row
/// are non-overlapping, ordered by start column, and together with the
/// empty-cell gaps cover the column window exactly once. Column bounds are
/// validated up front; rows past the end of the grid yield nothing.
pub fn merge_runs(
    grid: &Grid,
    row_start: u32,
    col_start: u16,
    col_end: u16,
) -> Result<MergeRuns<'_>> {
    if col_start > col_end || col_end >= grid.cols() {
        return Err(Error::MergeBounds {
            col_start,
            col_end,
            cols: grid.cols(),
        });
    }

    Ok(MergeRuns {
        grid,
        row: row_start,
        col: col_start,
        col_start,
        col_end,
    })
}

/// Lazy iterator over [`MergeSpan`]s, produced by [`merge_runs`]
#[derive(Debug)]
pub struct MergeRuns<'a> {
    grid: &'a Grid,
    row: u32,
    col: u16,
    col_start: u16,
    col_end: u16,
}

impl Iterator for MergeRuns<'_> {
    type Item = MergeSpan;

    fn next(&mut self) -> Option<MergeSpan> {
        loop {
            if self.row >= self.grid.rows() {
                return None;
            }
            if self.col > self.col_end {
                self.row += 1;
                self.col = self.col_start;
                continue;
            }

            let value = self.grid.get(self.row, self.col);
            if value.is_empty() {
                self.col += 1;
                continue;
            }

            let mut len: u16 = 1;
            while self.col + len <= self.col_end && self.grid.get(self.row, self.col + len) == value
            {
                len += 1;
            }

            let span = MergeSpan {
                row: self.row,
                start_col: self.col,
                len,
                value: value.to_string(),
            };
            self.col += len;
            return Some(span);
        }
    }
}
