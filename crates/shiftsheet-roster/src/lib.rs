//! # shiftsheet-roster
//!
//! The roster-building pipeline: map a job x slot assignment grid into an
//! individual x slot roster, find the runs of consecutive identical cells,
//! and render values, merges and styles onto a worksheet.
//!
//! The three stages run in sequence and are pure given their inputs:
//!
//! 1. [`map_assignments`] fills the individual grid from the job grid and
//!    job name column, collecting [`MapWarning`]s for silently-resolved
//!    ambiguities (dropped assignees, duplicate keys, overwrites).
//! 2. [`merge_runs`] yields [`MergeSpan`]s, maximal runs of identical
//!    non-empty cells within each row.
//! 3. [`render_roster`] writes the grid and applies merge + style per span.
//!
//! [`RosterLayout`] names every positional parameter (origins, key column,
//! slot offset, column counts); nothing is hardcoded in the stages.
//!
//! ## Example
//!
//! ```rust
//! use shiftsheet_core::Grid;
//! use shiftsheet_roster::{map_assignments, merge_runs, RosterLayout};
//!
//! let mut layout = RosterLayout::new(2);
//! layout.slot_cols = 3;
//! layout.individual_rows = 2;
//!
//! let job_grid = Grid::from_rows([["Alice", "", ""], ["Bob", "Bob", ""]]);
//! let job_names = vec!["Cook".to_string(), "Clean".to_string()];
//!
//! let mut individual = Grid::new(2, layout.individual_cols());
//! individual.set(0, layout.key_col, "Alice");
//! individual.set(1, layout.key_col, "Bob");
//!
//! let mapped = map_assignments(&job_grid, &job_names, individual, &layout).unwrap();
//! assert_eq!(mapped.grid.get(1, layout.slot_col(0)), "Clean");
//!
//! let spans: Vec<_> = merge_runs(&mapped.grid, 0, layout.slot_offset,
//!     layout.individual_cols() - 1).unwrap().collect();
//! assert_eq!(spans.len(), 2);
//! ```

pub mod error;
pub mod layout;
pub mod mapper;
pub mod merge;
pub mod render;
pub mod search;

pub use error::{Error, Result};
pub use layout::{RosterLayout, EXTRA_ROWS, KEY_COLUMN, SLOT_COLUMNS, SLOT_OFFSET};
pub use mapper::{map_assignments, MapWarning, Mapped};
pub use merge::{merge_runs, MergeRuns, MergeSpan};
pub use render::{prepare_individual_sheet, render_roster, RenderOptions};
pub use search::{is_placed, Member, MemberColumns, MemberDirectory, MemberFilter};
