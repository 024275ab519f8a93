//! Worksheet type

use std::collections::HashMap;

use crate::address::{CellAddress, CellRange};
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::style::{Style, StylePool};
use crate::{MAX_COLS, MAX_ROWS};

/// A single sheet of string cells
///
/// Storage is sparse: unset cells read back as the empty string. The sheet
/// also tracks merged regions and per-cell styles, which is the state the
/// roster renderer manipulates.
#[derive(Debug)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Sparse cell contents (keyed by (row, col), empty cells absent)
    cells: HashMap<(u32, u16), String>,
    /// Per-cell style indices into the pool (default style absent)
    cell_styles: HashMap<(u32, u16), u32>,
    /// Deduplicated styles
    style_pool: StylePool,
    /// Merged regions (non-overlapping)
    merged: Vec<CellRange>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: HashMap::new(),
            cell_styles: HashMap::new(),
            style_pool: StylePool::new(),
            merged: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Cell Access ===

    /// Get a cell value by row and column indices ("" if unset)
    pub fn value_at(&self, row: u32, col: u16) -> &str {
        self.cells
            .get(&(row, col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Check if a cell is empty
    pub fn is_empty_at(&self, row: u32, col: u16) -> bool {
        self.value_at(row, col).is_empty()
    }

    /// Set a cell value; setting the empty string clears the cell
    pub fn set_value_at<S: Into<String>>(&mut self, row: u32, col: u16, value: S) -> Result<()> {
        self.validate_cell_position(row, col)?;
        let value = value.into();
        if value.is_empty() {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value);
        }
        Ok(())
    }

    /// Clear a cell's value (style is kept)
    pub fn clear_cell_at(&mut self, row: u32, col: u16) {
        self.cells.remove(&(row, col));
    }

    /// Get the number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the worksheet has no values
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all non-empty cells as (row, col, value)
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &str)> {
        self.cells
            .iter()
            .map(|(&(row, col), v)| (row, col, v.as_str()))
    }

    /// Get the used range (bounds of all non-empty cells)
    pub fn used_range(&self) -> Option<CellRange> {
        let mut bounds: Option<(u32, u16, u32, u16)> = None;

        for &(row, col) in self.cells.keys() {
            bounds = Some(match bounds {
                None => (row, col, row, col),
                Some((min_r, min_c, max_r, max_c)) => (
                    min_r.min(row),
                    min_c.min(col),
                    max_r.max(row),
                    max_c.max(col),
                ),
            });
        }

        bounds.map(|(min_r, min_c, max_r, max_c)| {
            CellRange::from_indices(min_r, min_c, max_r, max_c)
        })
    }

    // === Range Operations ===

    /// Read a rectangular range into a dense [`Grid`], unset cells empty
    pub fn read_grid(&self, range: &CellRange) -> Grid {
        let mut grid = Grid::with_shape_of(range);
        for addr in range.cells() {
            let value = self.value_at(addr.row, addr.col);
            if !value.is_empty() {
                grid.set(addr.row - range.start.row, addr.col - range.start.col, value);
            }
        }
        grid
    }

    /// Write a dense [`Grid`] into the sheet with its top-left cell at `origin`
    ///
    /// Empty grid cells clear the corresponding sheet cells, so the write
    /// replaces the whole rectangle, like a bulk range assignment.
    pub fn write_grid(&mut self, origin: CellAddress, grid: &Grid) -> Result<()> {
        for (row, col, value) in grid.iter() {
            self.set_value_at(origin.row + row, origin.col + col, value)?;
        }
        Ok(())
    }

    /// Clear all cell values in a range
    pub fn clear_range(&mut self, range: &CellRange) {
        for addr in range.cells() {
            self.cells.remove(&(addr.row, addr.col));
        }
    }

    // === Styles ===

    /// Set a cell style by row and column indices
    pub fn set_style_at(&mut self, row: u32, col: u16, style: &Style) -> Result<()> {
        self.validate_cell_position(row, col)?;
        let idx = self.style_pool.get_or_insert(*style);
        if idx == 0 {
            self.cell_styles.remove(&(row, col));
        } else {
            self.cell_styles.insert((row, col), idx);
        }
        Ok(())
    }

    /// Set the same style for every cell in a range
    pub fn set_range_style(&mut self, range: &CellRange, style: &Style) -> Result<()> {
        for addr in range.cells() {
            self.set_style_at(addr.row, addr.col, style)?;
        }
        Ok(())
    }

    /// Get a cell's style index (0 = default)
    pub fn style_index_at(&self, row: u32, col: u16) -> u32 {
        self.cell_styles.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Get the non-default style applied to a cell, if any
    pub fn style_at(&self, row: u32, col: u16) -> Option<&Style> {
        match self.style_index_at(row, col) {
            0 => None,
            idx => self.style_pool.get(idx),
        }
    }

    /// Get the style pool
    pub fn style_pool(&self) -> &StylePool {
        &self.style_pool
    }

    // === Merged Cells ===

    /// Get merged regions
    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged
    }

    /// Merge cells; fails if the range overlaps an existing merged region
    pub fn merge_cells(&mut self, range: &CellRange) -> Result<()> {
        for existing in &self.merged {
            if range.overlaps(existing) {
                return Err(Error::MergedRegionOverlap(range.to_string()));
            }
        }
        self.merged.push(*range);
        Ok(())
    }

    /// Unmerge an exact merged region; returns whether it existed
    pub fn unmerge_cells(&mut self, range: &CellRange) -> bool {
        match self.merged.iter().position(|r| r == range) {
            Some(i) => {
                self.merged.remove(i);
                true
            }
            None => false,
        }
    }

    /// Remove every merged region overlapping `range`; returns how many
    ///
    /// This is the sheet-level UnMerge used before rewriting a roster area.
    pub fn unmerge_range(&mut self, range: &CellRange) -> usize {
        let before = self.merged.len();
        self.merged.retain(|r| !r.overlaps(range));
        before - self.merged.len()
    }

    // === Internal ===

    fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BorderLineStyle, Color};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_worksheet() {
        let ws = Worksheet::new("Jobs");
        assert_eq!(ws.name(), "Jobs");
        assert!(ws.is_empty());
        assert!(ws.used_range().is_none());
    }

    #[test]
    fn test_set_and_clear_values() {
        let mut ws = Worksheet::new("Test");
        ws.set_value_at(0, 0, "Alice").unwrap();
        ws.set_value_at(2, 3, "Bob").unwrap();

        assert_eq!(ws.value_at(0, 0), "Alice");
        assert_eq!(ws.value_at(1, 1), "");
        assert_eq!(ws.cell_count(), 2);

        // Setting "" clears
        ws.set_value_at(0, 0, "").unwrap();
        assert!(ws.is_empty_at(0, 0));
        assert_eq!(ws.cell_count(), 1);
    }

    #[test]
    fn test_used_range() {
        let mut ws = Worksheet::new("Test");
        ws.set_value_at(5, 3, "A").unwrap();
        ws.set_value_at(10, 7, "B").unwrap();

        let range = ws.used_range().unwrap();
        assert_eq!(range.start.row, 5);
        assert_eq!(range.start.col, 3);
        assert_eq!(range.end.row, 10);
        assert_eq!(range.end.col, 7);
    }

    #[test]
    fn test_read_grid_treats_unset_as_empty() {
        let mut ws = Worksheet::new("Test");
        ws.set_value_at(3, 1, "Cook").unwrap();
        ws.set_value_at(4, 2, "Clean").unwrap();

        let grid = ws.read_grid(&CellRange::from_indices(3, 1, 4, 2));
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.get(0, 0), "Cook");
        assert_eq!(grid.get(0, 1), "");
        assert_eq!(grid.get(1, 1), "Clean");
    }

    #[test]
    fn test_write_grid_replaces_rectangle() {
        let mut ws = Worksheet::new("Test");
        ws.set_value_at(1, 1, "stale").unwrap();

        let grid = Grid::from_rows([["a", ""], ["", "b"]]);
        ws.write_grid(CellAddress::new(1, 1), &grid).unwrap();

        assert_eq!(ws.value_at(1, 1), "a");
        assert_eq!(ws.value_at(1, 2), "");
        assert_eq!(ws.value_at(2, 2), "b");
    }

    #[test]
    fn test_grid_round_trip() {
        let mut ws = Worksheet::new("Test");
        let grid = Grid::from_rows([["x", "y"], ["z", ""]]);
        let origin = CellAddress::new(4, 2);
        ws.write_grid(origin, &grid).unwrap();

        let back = ws.read_grid(&CellRange::from_indices(4, 2, 5, 3));
        assert_eq!(back, grid);
    }

    #[test]
    fn test_merge_cells_rejects_overlap() {
        let mut ws = Worksheet::new("Test");
        ws.merge_cells(&CellRange::parse("A1:C1").unwrap()).unwrap();
        assert_eq!(ws.merged_regions().len(), 1);

        assert!(ws.merge_cells(&CellRange::parse("C1:D1").unwrap()).is_err());
        assert!(ws.merge_cells(&CellRange::parse("D1:E1").unwrap()).is_ok());
    }

    #[test]
    fn test_unmerge_range_drops_overlapping_regions() {
        let mut ws = Worksheet::new("Test");
        ws.merge_cells(&CellRange::parse("A1:B1").unwrap()).unwrap();
        ws.merge_cells(&CellRange::parse("A2:B2").unwrap()).unwrap();
        ws.merge_cells(&CellRange::parse("E5:F5").unwrap()).unwrap();

        let removed = ws.unmerge_range(&CellRange::parse("A1:C3").unwrap());
        assert_eq!(removed, 2);
        assert_eq!(ws.merged_regions(), &[CellRange::parse("E5:F5").unwrap()]);

        assert!(!ws.unmerge_cells(&CellRange::parse("A1:B1").unwrap()));
        assert!(ws.unmerge_cells(&CellRange::parse("E5:F5").unwrap()));
    }

    #[test]
    fn test_styles_deduplicate_through_pool() {
        let mut ws = Worksheet::new("Test");
        let style = Style::new()
            .fill_color(Color::rgb(204, 255, 204))
            .outline(BorderLineStyle::Thin, Color::BLACK);

        ws.set_style_at(0, 0, &style).unwrap();
        ws.set_style_at(0, 1, &style).unwrap();

        assert_eq!(ws.style_index_at(0, 0), ws.style_index_at(0, 1));
        assert_eq!(ws.style_at(0, 0), Some(&style));
        assert_eq!(ws.style_at(5, 5), None);
        assert_eq!(ws.style_pool().len(), 2);

        // Re-applying the default style clears the mapping
        ws.set_style_at(0, 0, &Style::default()).unwrap();
        assert_eq!(ws.style_index_at(0, 0), 0);
    }
}
