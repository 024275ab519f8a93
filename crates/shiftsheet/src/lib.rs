//! # shiftsheet
//!
//! A Rust library for building shift rosters from job assignment sheets.
//!
//! A roster build starts from two worksheets: a job sheet where each row is
//! a job type and each column a time slot, with the assigned individual's
//! name in each cell, and an individual sheet keyed by individual name.
//! The build transposes the assignment view (`job x slot -> name`) into the
//! roster view (`individual x slot -> job`), then merges and highlights
//! consecutive identical slots so each stint reads as a single block.
//!
//! ## Example
//!
//! ```rust
//! use shiftsheet::prelude::*;
//!
//! let mut layout = RosterLayout::new(2);
//! layout.slot_cols = 3;
//! layout.individual_rows = 2;
//! layout.job_origin = CellAddress::new(0, 1);
//! layout.job_name_col = 0;
//!
//! let mut job_sheet = Worksheet::new("ジョブ");
//! job_sheet.set_value_at(0, 0, "Cook").unwrap();
//! job_sheet.set_value_at(0, 1, "Alice").unwrap();
//! job_sheet.set_value_at(1, 0, "Clean").unwrap();
//! job_sheet.set_value_at(1, 1, "Bob").unwrap();
//! job_sheet.set_value_at(1, 2, "Bob").unwrap();
//!
//! let mut individual_sheet = Worksheet::new("個人シフト");
//! individual_sheet.set_value_at(0, 3, "Alice").unwrap();
//! individual_sheet.set_value_at(1, 3, "Bob").unwrap();
//!
//! let build = build_roster(
//!     &job_sheet,
//!     &mut individual_sheet,
//!     &layout,
//!     &RenderOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(individual_sheet.value_at(0, 4), "Cook");
//! assert_eq!(individual_sheet.value_at(1, 4), "Clean");
//! assert_eq!(build.merged_spans, 2);
//! ```

pub mod prelude;

// Re-export core types
pub use shiftsheet_core::{
    BorderEdge,
    BorderLineStyle,
    BorderStyle,
    CellAddress,
    CellRange,
    Color,
    // Error types
    Error,
    FillStyle,
    Grid,
    Result,

    // Style types
    Style,
    StylePool,
    // Main types
    Worksheet,

    MAX_COLS,
    // Constants
    MAX_ROWS,
};

// Re-export roster types
pub use shiftsheet_roster::{
    is_placed, map_assignments, merge_runs, prepare_individual_sheet, render_roster,
    Error as RosterError, MapWarning, Mapped, Member, MemberColumns, MemberDirectory, MemberFilter,
    MergeRuns, MergeSpan, RenderOptions, RosterLayout,
};

// Re-export I/O types
pub use shiftsheet_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter, LineTerminator,
};

/// Outcome of a full roster build
#[derive(Debug, Clone)]
pub struct RosterBuild {
    /// Warnings collected by the mapping pass
    pub warnings: Vec<MapWarning>,
    /// Number of merge spans rendered (length-1 runs included)
    pub merged_spans: usize,
}

/// Run the whole roster pipeline on a pair of worksheets
///
/// Reads the job grid and job names from `job_sheet` per `layout`, resets
/// the individual sheet's slot area, maps assignments into the individual
/// grid, then renders values, merges and run styles back onto
/// `individual_sheet`. The job sheet is never modified.
pub fn build_roster(
    job_sheet: &Worksheet,
    individual_sheet: &mut Worksheet,
    layout: &RosterLayout,
    options: &RenderOptions,
) -> std::result::Result<RosterBuild, RosterError> {
    let job_grid = job_sheet.read_grid(&layout.job_range());
    let job_names: Vec<String> = job_sheet
        .read_grid(&layout.job_name_range())
        .iter()
        .map(|(_, _, v)| v.to_string())
        .collect();

    prepare_individual_sheet(individual_sheet, layout, options)?;

    let individual = individual_sheet.read_grid(&layout.individual_range());
    let mapped = map_assignments(&job_grid, &job_names, individual, layout)?;

    let spans: Vec<MergeSpan> = merge_runs(
        &mapped.grid,
        0,
        layout.slot_offset,
        layout.individual_cols() - 1,
    )?
    .collect();
    let merged_spans = spans.len();

    render_roster(individual_sheet, &mapped.grid, spans, layout, options)?;

    log::debug!(
        "roster build: {} span(s), {} warning(s)",
        merged_spans,
        mapped.warnings.len()
    );

    Ok(RosterBuild {
        warnings: mapped.warnings,
        merged_spans,
    })
}
