//! Prelude module - common imports for shiftsheet users
//!
//! ```rust
//! use shiftsheet::prelude::*;
//! ```

pub use crate::{
    // Pipeline
    build_roster,
    is_placed,
    map_assignments,
    merge_runs,
    prepare_individual_sheet,
    render_roster,

    CellAddress,
    CellRange,
    Color,

    // I/O types
    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,

    // Error types
    Error,
    FillStyle,
    Grid,

    MapWarning,
    Mapped,
    // Search types
    Member,
    MemberDirectory,
    MemberFilter,
    MergeSpan,

    RenderOptions,
    Result,
    RosterBuild,
    RosterLayout,

    // Style types
    Style,
    // Main types
    Worksheet,
};
