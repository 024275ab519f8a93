//! Roster rendering
//!
//! The sheet-facing side of a roster build: clear and unmerge the previous
//! roster, bulk-write the mapped grid, then merge and style each run. The
//! run style is constant; it never depends on the run's value.

use shiftsheet_core::{BorderLineStyle, CellRange, Color, Grid, Style, Worksheet};

use crate::error::Result;
use crate::layout::RosterLayout;
use crate::merge::MergeSpan;

/// Visual treatment applied while rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Fill for every run (light green by default)
    pub run_fill: Color,
    /// Border drawn around every run
    pub run_border: BorderLineStyle,
    /// Fill painted over the roster area before rebuilding
    pub clear_fill: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            run_fill: Color::rgb(204, 255, 204),
            run_border: BorderLineStyle::Thin,
            clear_fill: Color::WHITE,
        }
    }
}

impl RenderOptions {
    /// Style applied to run cells
    pub fn run_style(&self) -> Style {
        Style::new()
            .fill_color(self.run_fill)
            .outline(self.run_border, Color::BLACK)
    }
}

/// Reset the individual sheet's slot area for a rebuild
///
/// Unmerges and clears the slot columns (key column untouched), then
/// repaints the whole individual area with the clear fill.
pub fn prepare_individual_sheet(
    sheet: &mut Worksheet,
    layout: &RosterLayout,
    options: &RenderOptions,
) -> Result<()> {
    let slots = layout.individual_slot_range();
    let removed = sheet.unmerge_range(&slots);
    if removed > 0 {
        log::debug!("unmerged {} stale region(s) in {}", removed, slots);
    }
    sheet.clear_range(&slots);

    let clear = Style::new().fill_color(options.clear_fill);
    sheet.set_range_style(&layout.individual_range(), &clear)?;
    Ok(())
}

/// Write the mapped grid and its merge runs onto the individual sheet
///
/// Bulk-writes `grid` at the layout's individual origin, then for every
/// span merges the covered cells (length >= 2 only) and applies the run
/// style. Single-cell runs get the style without a merge, so every stint
/// is highlighted the same way.
pub fn render_roster<I>(
    sheet: &mut Worksheet,
    grid: &Grid,
    spans: I,
    layout: &RosterLayout,
    options: &RenderOptions,
) -> Result<()>
where
    I: IntoIterator<Item = MergeSpan>,
{
    let origin = layout.individual_origin;
    sheet.write_grid(origin, grid)?;

    let style = options.run_style();
    for span in spans {
        let range = CellRange::from_indices(
            origin.row + span.row,
            origin.col + span.start_col,
            origin.row + span.row,
            origin.col + span.end_col() - 1,
        );
        if span.needs_merge() {
            sheet.merge_cells(&range)?;
        }
        sheet.set_range_style(&range, &style)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::merge_runs;
    use pretty_assertions::assert_eq;

    fn small_layout() -> RosterLayout {
        let mut layout = RosterLayout::new(2);
        layout.slot_cols = 3;
        layout.individual_rows = 2;
        layout
    }

    fn mapped_grid(layout: &RosterLayout) -> Grid {
        let mut grid = Grid::new(layout.individual_rows, layout.individual_cols());
        grid.set(0, layout.key_col, "Alice");
        grid.set(1, layout.key_col, "Bob");
        grid.set(0, 4, "Cook");
        grid.set(1, 4, "Clean");
        grid.set(1, 5, "Clean");
        grid
    }

    #[test]
    fn test_prepare_clears_and_unmerges_slot_area() {
        let layout = small_layout();
        let options = RenderOptions::default();
        let mut sheet = Worksheet::new("個人シフト");

        sheet.set_value_at(0, 4, "stale").unwrap();
        sheet.set_value_at(0, 3, "Alice").unwrap();
        sheet
            .merge_cells(&CellRange::from_indices(0, 4, 0, 5))
            .unwrap();

        prepare_individual_sheet(&mut sheet, &layout, &options).unwrap();

        assert_eq!(sheet.value_at(0, 4), "");
        // Key column survives the clear
        assert_eq!(sheet.value_at(0, 3), "Alice");
        assert!(sheet.merged_regions().is_empty());

        // Whole area repainted with the clear fill
        let style = sheet.style_at(0, 0).unwrap();
        assert_eq!(style.fill, shiftsheet_core::FillStyle::solid(Color::WHITE));
    }

    #[test]
    fn test_render_writes_merges_and_styles() {
        let layout = small_layout();
        let options = RenderOptions::default();
        let mut sheet = Worksheet::new("個人シフト");

        let grid = mapped_grid(&layout);
        let spans: Vec<_> = merge_runs(&grid, 0, layout.slot_offset, layout.individual_cols() - 1)
            .unwrap()
            .collect();
        render_roster(&mut sheet, &grid, spans, &layout, &options).unwrap();

        // Values written at the origin
        assert_eq!(sheet.value_at(0, 3), "Alice");
        assert_eq!(sheet.value_at(0, 4), "Cook");
        assert_eq!(sheet.value_at(1, 4), "Clean");
        assert_eq!(sheet.value_at(1, 5), "Clean");

        // Only the length-2 run merged
        assert_eq!(
            sheet.merged_regions(),
            &[CellRange::from_indices(1, 4, 1, 5)]
        );

        // Every run cell carries the constant run style, length 1 included
        let style = options.run_style();
        assert_eq!(sheet.style_at(0, 4), Some(&style));
        assert_eq!(sheet.style_at(1, 4), Some(&style));
        assert_eq!(sheet.style_at(1, 5), Some(&style));
        // Gap cells stay unstyled
        assert_eq!(sheet.style_at(0, 5), None);
    }

    #[test]
    fn test_render_respects_individual_origin_offset() {
        let mut layout = small_layout();
        layout.individual_origin = shiftsheet_core::CellAddress::new(3, 2);
        let options = RenderOptions::default();
        let mut sheet = Worksheet::new("個人シフト");

        let grid = mapped_grid(&layout);
        let spans: Vec<_> = merge_runs(&grid, 0, layout.slot_offset, layout.individual_cols() - 1)
            .unwrap()
            .collect();
        render_roster(&mut sheet, &grid, spans, &layout, &options).unwrap();

        assert_eq!(sheet.value_at(3, 5), "Alice"); // key col shifted by origin
        assert_eq!(sheet.value_at(4, 6), "Clean");
        assert_eq!(
            sheet.merged_regions(),
            &[CellRange::from_indices(4, 6, 4, 7)]
        );
    }
}
