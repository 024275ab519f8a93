//! Assignment mapper
//!
//! Turns the job x slot grid (cells name the assigned individual) into the
//! individual x slot grid (cells name the assigned job). Tie-breaks are
//! deliberate and deterministic:
//!
//! - duplicate keys: the lowest-index individual row wins every write
//!   (first-match-wins);
//! - one individual assigned by two job rows in the same slot: the later
//!   job row's write survives (last-writer-wins).
//!
//! Neither situation is an error. Both, plus assignees with no matching
//! individual row, are reported as [`MapWarning`]s alongside the result.

use std::collections::HashMap;
use std::fmt;

use shiftsheet_core::Grid;

use crate::error::{Error, Result};
use crate::layout::RosterLayout;

/// A non-fatal finding collected while mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapWarning {
    /// A job cell names someone absent from the individual key column;
    /// the assignment was dropped
    UnmatchedAssignee {
        assignee: String,
        job_row: u32,
        slot: u16,
    },

    /// Two individual rows share a key; only the first ever receives writes
    DuplicateKey {
        key: String,
        first_row: u32,
        duplicate_row: u32,
    },

    /// A later job row overwrote an earlier, different job in the same slot
    ConflictingAssignment {
        individual_row: u32,
        slot: u16,
        kept: String,
        dropped: String,
    },
}

impl fmt::Display for MapWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapWarning::UnmatchedAssignee {
                assignee,
                job_row,
                slot,
            } => write!(
                f,
                "assignee '{}' (job row {}, slot {}) not found in the individual roster; dropped",
                assignee, job_row, slot
            ),
            MapWarning::DuplicateKey {
                key,
                first_row,
                duplicate_row,
            } => write!(
                f,
                "duplicate key '{}': row {} shadows row {}",
                key, first_row, duplicate_row
            ),
            MapWarning::ConflictingAssignment {
                individual_row,
                slot,
                kept,
                dropped,
            } => write!(
                f,
                "individual row {} slot {}: '{}' replaced '{}'",
                individual_row, slot, kept, dropped
            ),
        }
    }
}

/// Result of a mapping run: the filled individual grid plus warnings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapped {
    /// The individual grid, with slot cells filled in
    pub grid: Grid,
    /// Findings collected during the scan, in scan order
    pub warnings: Vec<MapWarning>,
}

/// Map job assignments into the individual grid
///
/// Takes the individual grid by value (exclusive ownership for the
/// duration of the call) and returns it inside [`Mapped`]. Slot cells of
/// `individual` are expected to start empty; key cells are read, never
/// written.
///
/// Shape requirements are checked up front: `job_names` must cover
/// `layout.job_rows`, the job grid must span `layout.job_rows` x
/// `layout.slot_cols`, and the individual grid must be wide enough to hold
/// the key column and every slot column. The scan itself never fails.
pub fn map_assignments(
    job_grid: &Grid,
    job_names: &[String],
    mut individual: Grid,
    layout: &RosterLayout,
) -> Result<Mapped> {
    layout.validate()?;

    if job_grid.rows() < layout.job_rows || job_grid.cols() < layout.slot_cols {
        return Err(Error::JobGridShape {
            rows: job_grid.rows(),
            cols: job_grid.cols(),
            need_rows: layout.job_rows,
            need_cols: layout.slot_cols,
        });
    }
    if job_names.len() < layout.job_rows as usize {
        return Err(Error::JobNamesShape {
            names: job_names.len(),
            need: layout.job_rows,
        });
    }
    if individual.cols() < layout.individual_cols() {
        return Err(Error::IndividualGridShape {
            rows: individual.rows(),
            cols: individual.cols(),
            need_cols: layout.individual_cols(),
        });
    }

    let mut warnings = Vec::new();

    // Duplicate keys are reported once per shadowed row; the scan below
    // still honors first-match-wins regardless.
    let mut first_seen: HashMap<String, u32> = HashMap::new();
    for row in 0..individual.rows() {
        let key = individual.get(row, layout.key_col);
        if key.is_empty() {
            continue;
        }
        match first_seen.get(key) {
            Some(&first_row) => warnings.push(MapWarning::DuplicateKey {
                key: key.to_string(),
                first_row,
                duplicate_row: row,
            }),
            None => {
                first_seen.insert(key.to_string(), row);
            }
        }
    }

    for job_row in 0..layout.job_rows {
        for slot in 0..layout.slot_cols {
            let assignee = job_grid.get(job_row, slot);
            if assignee.is_empty() {
                continue;
            }

            let mut matched = false;
            for idv_row in 0..individual.rows() {
                let key = individual.get(idv_row, layout.key_col);
                if key.is_empty() || key != assignee {
                    continue;
                }

                // First matching individual row wins; stop scanning.
                let col = layout.slot_col(slot);
                let previous = individual.get(idv_row, col);
                if !previous.is_empty() && previous != job_names[job_row as usize] {
                    warnings.push(MapWarning::ConflictingAssignment {
                        individual_row: idv_row,
                        slot,
                        kept: job_names[job_row as usize].clone(),
                        dropped: previous.to_string(),
                    });
                }
                individual.set(idv_row, col, job_names[job_row as usize].clone());
                matched = true;
                break;
            }

            if !matched {
                warnings.push(MapWarning::UnmatchedAssignee {
                    assignee: assignee.to_string(),
                    job_row,
                    slot,
                });
            }
        }
    }

    if !warnings.is_empty() {
        log::debug!("mapping produced {} warning(s)", warnings.len());
    }

    Ok(Mapped {
        grid: individual,
        warnings,
    })
}
