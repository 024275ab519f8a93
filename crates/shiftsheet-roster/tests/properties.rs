//! Property tests for the mapper and merger

use proptest::prelude::*;
use shiftsheet_core::Grid;
use shiftsheet_roster::{map_assignments, merge_runs, RosterLayout};

/// Grids drawn from a tiny value alphabet so runs and collisions happen often
fn grid_strategy(max_rows: u32, max_cols: u16) -> impl Strategy<Value = Grid> {
    let cell = prop_oneof![
        3 => Just(String::new()),
        2 => Just("a".to_string()),
        2 => Just("b".to_string()),
        1 => Just("c".to_string()),
    ];
    (1..=max_rows as usize, 1..=max_cols as usize).prop_flat_map(move |(rows, cols)| {
        proptest::collection::vec(proptest::collection::vec(cell.clone(), cols), rows)
            .prop_map(Grid::from_rows)
    })
}

proptest! {
    #[test]
    fn merge_spans_partition_each_row(grid in grid_strategy(5, 12)) {
        let col_end = grid.cols() - 1;
        let spans: Vec<_> = merge_runs(&grid, 0, 0, col_end).unwrap().collect();

        let mut covered =
            vec![vec![false; grid.cols() as usize]; grid.rows() as usize];
        let mut last: Option<(u32, u16)> = None;

        for span in &spans {
            // Ordered: rows ascending, start columns ascending within a row
            if let Some((row, end)) = last {
                prop_assert!(span.row > row || (span.row == row && span.start_col >= end));
            }
            last = Some((span.row, span.end_col()));

            for col in span.start_col..span.end_col() {
                prop_assert!(!covered[span.row as usize][col as usize]);
                covered[span.row as usize][col as usize] = true;
                prop_assert_eq!(grid.get(span.row, col), span.value.as_str());
            }
        }

        // Spans plus gaps cover the window exactly once
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                prop_assert_eq!(
                    covered[row as usize][col as usize],
                    !grid.is_empty_at(row, col)
                );
            }
        }
    }

    #[test]
    fn merge_spans_are_maximal(grid in grid_strategy(5, 12)) {
        let col_end = grid.cols() - 1;
        for span in merge_runs(&grid, 0, 0, col_end).unwrap() {
            if span.start_col > 0 {
                prop_assert_ne!(grid.get(span.row, span.start_col - 1), span.value.as_str());
            }
            if span.end_col() <= col_end {
                prop_assert_ne!(grid.get(span.row, span.end_col()), span.value.as_str());
            }
        }
    }

    #[test]
    fn merge_is_idempotent_on_unmodified_input(grid in grid_strategy(4, 10)) {
        let col_end = grid.cols() - 1;
        let first: Vec<_> = merge_runs(&grid, 0, 0, col_end).unwrap().collect();
        let second: Vec<_> = merge_runs(&grid, 0, 0, col_end).unwrap().collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn mapper_never_writes_where_job_grid_is_empty(
        job_grid in grid_strategy(4, 6),
        keys in proptest::collection::vec(
            prop_oneof![Just("a".to_string()), Just("b".to_string()), Just("x".to_string())],
            1..6,
        ),
    ) {
        let mut layout = RosterLayout::new(job_grid.rows());
        layout.slot_cols = job_grid.cols();
        layout.individual_rows = keys.len() as u32;

        let job_names: Vec<String> =
            (0..job_grid.rows()).map(|r| format!("job{}", r)).collect();

        let mut individual = Grid::new(keys.len() as u32, layout.individual_cols());
        for (row, key) in keys.iter().enumerate() {
            individual.set(row as u32, layout.key_col, key.clone());
        }

        let mapped = map_assignments(&job_grid, &job_names, individual, &layout).unwrap();

        for slot in 0..layout.slot_cols {
            let assignees: Vec<&str> =
                (0..job_grid.rows()).map(|r| job_grid.get(r, slot)).collect();
            for row in 0..mapped.grid.rows() {
                let cell = mapped.grid.get(row, layout.slot_col(slot));
                if !cell.is_empty() {
                    // A write implies this row's key was named in this slot
                    let key = mapped.grid.get(row, layout.key_col);
                    prop_assert!(assignees.contains(&key));
                }
            }
        }
    }
}
