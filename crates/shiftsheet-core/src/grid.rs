//! Dense rectangular grid of string cells
//!
//! [`Grid`] is the in-memory form of the job and individual rosters: a
//! fixed-shape 2D block of strings where the empty string means "unset",
//! matching how ranges come back from a sheet read.

use crate::address::CellRange;

/// A dense rectangular grid of string cells
///
/// The shape is fixed at construction. Out-of-bounds access is a
/// programming error and panics; callers validate shapes up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u16,
    cells: Vec<String>,
}

impl Grid {
    /// Create a grid of the given shape with every cell empty
    pub fn new(rows: u32, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![String::new(); rows as usize * cols as usize],
        }
    }

    /// Create a grid with the shape of a cell range
    pub fn with_shape_of(range: &CellRange) -> Self {
        Self::new(range.row_count(), range.col_count())
    }

    /// Build a grid from rows of string slices
    ///
    /// Short rows are padded with empty cells; the column count is the
    /// longest row's length.
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|r| r.into_iter().map(|s| s.as_ref().to_string()).collect())
            .collect();

        let cols = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u16;
        let mut grid = Self::new(rows.len() as u32, cols);

        for (r, row) in rows.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                grid.set(r as u32, c as u16, value);
            }
        }

        grid
    }

    /// Number of rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Get a cell value ("" if unset)
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    pub fn get(&self, row: u32, col: u16) -> &str {
        &self.cells[self.index(row, col)]
    }

    /// Set a cell value (the empty string clears the cell)
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    pub fn set<S: Into<String>>(&mut self, row: u32, col: u16, value: S) {
        let idx = self.index(row, col);
        self.cells[idx] = value.into();
    }

    /// Check if a cell is empty
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    pub fn is_empty_at(&self, row: u32, col: u16) -> bool {
        self.get(row, col).is_empty()
    }

    /// Iterate over the cells of one row, left to right
    ///
    /// # Panics
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: u32) -> impl Iterator<Item = &str> {
        assert!(row < self.rows, "row {} out of bounds ({})", row, self.rows);
        let start = row as usize * self.cols as usize;
        self.cells[start..start + self.cols as usize]
            .iter()
            .map(String::as_str)
    }

    /// Iterate over all cells as (row, col, value), row-major
    pub fn iter(&self) -> impl Iterator<Item = (u32, u16, &str)> {
        self.cells.iter().enumerate().map(move |(i, v)| {
            let row = (i / self.cols as usize) as u32;
            let col = (i % self.cols as usize) as u16;
            (row, col, v.as_str())
        })
    }

    /// Count of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    fn index(&self, row: u32, col: u16) -> usize {
        assert!(row < self.rows, "row {} out of bounds ({})", row, self.rows);
        assert!(col < self.cols, "col {} out of bounds ({})", col, self.cols);
        row as usize * self.cols as usize + col as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.filled_count(), 0);
        assert!(grid.is_empty_at(2, 3));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 1, "Alice");
        assert_eq!(grid.get(0, 1), "Alice");
        assert_eq!(grid.get(0, 0), "");
        assert_eq!(grid.filled_count(), 1);

        grid.set(0, 1, "");
        assert!(grid.is_empty_at(0, 1));
    }

    #[test]
    fn test_from_rows_pads_short_rows() {
        let grid = Grid::from_rows([vec!["a", "b", "c"], vec!["d"]]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(1, 0), "d");
        assert_eq!(grid.get(1, 2), "");
    }

    #[test]
    fn test_row_iteration() {
        let grid = Grid::from_rows([["a", "b"], ["c", "d"]]);
        let row: Vec<&str> = grid.row(1).collect();
        assert_eq!(row, ["c", "d"]);
    }

    #[test]
    fn test_iter_row_major() {
        let grid = Grid::from_rows([["a", "b"], ["c", "d"]]);
        let cells: Vec<(u32, u16, &str)> = grid.iter().collect();
        assert_eq!(
            cells,
            [(0, 0, "a"), (0, 1, "b"), (1, 0, "c"), (1, 1, "d")]
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let grid = Grid::new(1, 1);
        grid.get(0, 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds_panics() {
        let mut grid = Grid::new(1, 1);
        grid.set(1, 0, "x");
    }
}
