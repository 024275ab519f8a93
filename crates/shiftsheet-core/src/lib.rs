//! # shiftsheet-core
//!
//! Core data structures for the shiftsheet roster tools.
//!
//! This crate provides the types the roster pipeline is built on:
//! - [`Grid`] - dense rectangular block of string cells (roster data)
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing and ranges
//! - [`Style`] - cell formatting (fills and borders)
//! - [`Worksheet`] - a named sheet with values, styles and merged regions
//!
//! Cells hold plain strings; the empty string means "unset", which is how
//! rectangular range reads report untouched cells.
//!
//! ## Example
//!
//! ```rust
//! use shiftsheet_core::{CellRange, Worksheet};
//!
//! let mut sheet = Worksheet::new("個人シフト");
//! sheet.set_value_at(0, 3, "Alice").unwrap();
//!
//! let grid = sheet.read_grid(&CellRange::from_indices(0, 0, 0, 4));
//! assert_eq!(grid.get(0, 3), "Alice");
//! ```

pub mod address;
pub mod error;
pub mod grid;
pub mod style;
pub mod worksheet;

// Re-exports for convenience
pub use address::{CellAddress, CellRange};
pub use error::{Error, Result};
pub use grid::Grid;
pub use style::{BorderEdge, BorderLineStyle, BorderStyle, Color, FillStyle, Style, StylePool};
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
