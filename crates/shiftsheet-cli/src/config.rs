//! Layout configuration file
//!
//! Optional TOML file overriding the built-in layout defaults. Every field
//! is optional; sheet positions are given in A1 notation.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use shiftsheet::{CellAddress, RosterLayout};

/// Partial layout read from a TOML file
///
/// ```toml
/// job-rows = 20
/// slot-cols = 100
/// extra-rows = 10
/// job-origin = "B4"
/// job-name-col = "A"
/// individual-origin = "A1"
/// key-col = 3
/// slot-offset = 4
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct LayoutConfig {
    pub job_rows: Option<u32>,
    pub slot_cols: Option<u16>,
    pub extra_rows: Option<u32>,
    pub individual_rows: Option<u32>,
    pub job_origin: Option<String>,
    pub job_name_col: Option<String>,
    pub individual_origin: Option<String>,
    pub key_col: Option<u16>,
    pub slot_offset: Option<u16>,
}

impl LayoutConfig {
    /// Load a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Failed to parse '{}'", path.display()))
    }

    /// Build a layout: defaults for `job_rows`, then file overrides
    ///
    /// `job_rows` from the command line takes precedence over the file.
    pub fn to_layout(&self, job_rows_flag: Option<u32>) -> Result<RosterLayout> {
        let job_rows = job_rows_flag
            .or(self.job_rows)
            .context("job row count required (--jobs flag or job-rows in the config file)")?;

        let mut layout = RosterLayout::new(job_rows);

        if let Some(slot_cols) = self.slot_cols {
            layout.slot_cols = slot_cols;
        }
        if let Some(extra_rows) = self.extra_rows {
            layout.extra_rows = extra_rows;
            layout.individual_rows = job_rows + extra_rows;
        }
        if let Some(individual_rows) = self.individual_rows {
            layout.individual_rows = individual_rows;
        }
        if let Some(origin) = &self.job_origin {
            layout.job_origin = parse_address(origin, "job-origin")?;
        }
        if let Some(col) = &self.job_name_col {
            layout.job_name_col = parse_column(col, "job-name-col")?;
        }
        if let Some(origin) = &self.individual_origin {
            layout.individual_origin = parse_address(origin, "individual-origin")?;
        }
        if let Some(key_col) = self.key_col {
            layout.key_col = key_col;
        }
        if let Some(slot_offset) = self.slot_offset {
            layout.slot_offset = slot_offset;
        }

        layout
            .validate()
            .context("Invalid layout configuration")?;
        Ok(layout)
    }
}

fn parse_address(text: &str, field: &str) -> Result<CellAddress> {
    text.parse()
        .with_context(|| format!("{field}: '{text}' is not a cell address"))
}

fn parse_column(text: &str, field: &str) -> Result<u16> {
    CellAddress::letters_to_column(text)
        .with_context(|| format!("{field}: '{text}' is not a column letter"))
}
