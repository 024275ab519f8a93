//! Roster layout configuration
//!
//! Every fixed bound the roster sheets are built around (100 slot
//! columns, ten spare rows, key column D, slots starting at column E) is a
//! named field here, supplied by the caller instead of living as literals
//! inside the mapping code.

use shiftsheet_core::{CellAddress, CellRange};

use crate::error::{Error, Result};

/// Default number of time-slot columns
pub const SLOT_COLUMNS: u16 = 100;

/// Default number of spare individual rows beyond the job-row count
pub const EXTRA_ROWS: u32 = 10;

/// Default grid-relative column holding each individual's name
pub const KEY_COLUMN: u16 = 3;

/// Default grid-relative column where slot columns begin
pub const SLOT_OFFSET: u16 = 4;

/// Placement and shape parameters for one roster build
///
/// Grid-relative columns (`key_col`, `slot_offset`) index into the
/// individual [`Grid`](shiftsheet_core::Grid); sheet positions
/// (`job_origin`, `individual_origin`, `job_name_col`) locate the grids on
/// their worksheets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterLayout {
    /// Number of job rows (J)
    pub job_rows: u32,
    /// Number of time-slot columns (S)
    pub slot_cols: u16,
    /// Spare individual rows beyond the job-row count
    pub extra_rows: u32,
    /// Number of individual rows (I)
    pub individual_rows: u32,
    /// Top-left sheet cell of the job grid (slot 0 of job row 0)
    pub job_origin: CellAddress,
    /// Sheet column holding job display names, aligned with job rows
    pub job_name_col: u16,
    /// Top-left sheet cell of the individual grid (column 0 of the grid)
    pub individual_origin: CellAddress,
    /// Grid-relative column holding the individual's identifying name
    pub key_col: u16,
    /// Grid-relative column of the first slot
    pub slot_offset: u16,
}

impl RosterLayout {
    /// Create a layout for `job_rows` job types with the standard defaults:
    /// job grid at B4 with names in column A, individual grid at A1 with
    /// the key column in D and 100 slots from column E.
    pub fn new(job_rows: u32) -> Self {
        Self {
            job_rows,
            slot_cols: SLOT_COLUMNS,
            extra_rows: EXTRA_ROWS,
            individual_rows: job_rows + EXTRA_ROWS,
            job_origin: CellAddress::new(3, 1),
            job_name_col: 0,
            individual_origin: CellAddress::new(0, 0),
            key_col: KEY_COLUMN,
            slot_offset: SLOT_OFFSET,
        }
    }

    /// Total column count of the individual grid
    pub fn individual_cols(&self) -> u16 {
        self.slot_offset + self.slot_cols
    }

    /// Grid-relative column for a slot index
    pub fn slot_col(&self, slot: u16) -> u16 {
        self.slot_offset + slot
    }

    /// Sheet range of the job grid (J rows x S slot columns)
    pub fn job_range(&self) -> CellRange {
        CellRange::from_indices(
            self.job_origin.row,
            self.job_origin.col,
            self.job_origin.row + self.job_rows - 1,
            self.job_origin.col + self.slot_cols - 1,
        )
    }

    /// Sheet range of the job name column (J rows x 1)
    pub fn job_name_range(&self) -> CellRange {
        CellRange::from_indices(
            self.job_origin.row,
            self.job_name_col,
            self.job_origin.row + self.job_rows - 1,
            self.job_name_col,
        )
    }

    /// Sheet range of the whole individual grid (I rows, key + slot columns)
    pub fn individual_range(&self) -> CellRange {
        CellRange::from_indices(
            self.individual_origin.row,
            self.individual_origin.col,
            self.individual_origin.row + self.individual_rows - 1,
            self.individual_origin.col + self.individual_cols() - 1,
        )
    }

    /// Sheet range of just the slot columns of the individual grid
    ///
    /// This is the area unmerged and cleared before a rebuild; the key
    /// column is left untouched.
    pub fn individual_slot_range(&self) -> CellRange {
        CellRange::from_indices(
            self.individual_origin.row,
            self.individual_origin.col + self.slot_offset,
            self.individual_origin.row + self.individual_rows - 1,
            self.individual_origin.col + self.individual_cols() - 1,
        )
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.job_rows == 0 {
            return Err(Error::Layout("job_rows must be at least 1".into()));
        }
        if self.slot_cols == 0 {
            return Err(Error::Layout("slot_cols must be at least 1".into()));
        }
        if self.individual_rows == 0 {
            return Err(Error::Layout("individual_rows must be at least 1".into()));
        }
        if self.key_col >= self.slot_offset {
            return Err(Error::Layout(format!(
                "key column {} must sit left of the slot columns (offset {})",
                self.key_col, self.slot_offset
            )));
        }
        let job_end_col = self.job_origin.col + self.slot_cols - 1;
        if self.job_name_col >= self.job_origin.col && self.job_name_col <= job_end_col {
            return Err(Error::Layout(format!(
                "job name column {} falls inside the job grid columns {}..={}",
                self.job_name_col, self.job_origin.col, job_end_col
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_shapes() {
        let layout = RosterLayout::new(20);
        layout.validate().unwrap();

        assert_eq!(layout.individual_rows, 30);
        assert_eq!(layout.individual_cols(), 104);
        assert_eq!(layout.slot_col(0), 4);

        let job = layout.job_range();
        assert_eq!(job.start, CellAddress::new(3, 1));
        assert_eq!(job.row_count(), 20);
        assert_eq!(job.col_count(), 100);

        let names = layout.job_name_range();
        assert_eq!(names.col_count(), 1);
        assert_eq!(names.row_count(), 20);

        let idv = layout.individual_range();
        assert_eq!(idv.row_count(), 30);
        assert_eq!(idv.col_count(), 104);

        let slots = layout.individual_slot_range();
        assert_eq!(slots.start.col, 4);
        assert_eq!(slots.col_count(), 100);
    }

    #[test]
    fn test_validate_rejects_bad_layouts() {
        let mut layout = RosterLayout::new(0);
        assert!(layout.validate().is_err());

        layout = RosterLayout::new(5);
        layout.key_col = 4;
        assert!(layout.validate().is_err());

        layout = RosterLayout::new(5);
        layout.job_name_col = layout.job_origin.col;
        assert!(layout.validate().is_err());

        layout = RosterLayout::new(5);
        layout.slot_cols = 0;
        assert!(layout.validate().is_err());
    }
}
