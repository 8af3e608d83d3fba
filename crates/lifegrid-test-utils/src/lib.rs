//! Test utilities for lifegrid development.
//!
//! Provides pattern fixtures, an ASCII grid builder, and the live-count
//! invariant check used throughout the integration tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use lifegrid::Grid;

pub use fixtures::Pattern;

/// Count live cells by scanning, independent of the grid's own counter.
pub fn scan_live_count(grid: &Grid) -> usize {
    grid.cells().iter().filter(|&&alive| alive).count()
}

/// Panic if the grid's incremental live count disagrees with a full scan.
#[track_caller]
pub fn assert_live_count_consistent(grid: &Grid) {
    let scanned = scan_live_count(grid);
    assert_eq!(
        grid.live_count(),
        scanned,
        "live_count drifted at generation {}: counter {} vs scan {}",
        grid.generation(),
        grid.live_count(),
        scanned,
    );
}

/// Bring every cell of `pattern` to life with its top-left corner at `(x, y)`.
///
/// Cells that are already alive stay alive; cells outside the grid are ignored.
pub fn place(grid: &mut Grid, pattern: &Pattern, x: i32, y: i32) {
    for &(dx, dy) in pattern.cells {
        if !grid.get_cell_state(x + dx, y + dy) {
            grid.toggle_cell_state(x + dx, y + dy);
        }
    }
}

/// Build a grid from rows of text, `*` alive and any other character dead.
///
/// # Panics
///
/// Panics if rows differ in length.
pub fn grid_from_ascii(rows: &[&str]) -> Grid {
    let width = rows.first().map_or(0, |r| r.chars().count());
    assert!(
        rows.iter().all(|r| r.chars().count() == width),
        "all rows must have the same length"
    );
    let mut grid = Grid::new(rows.len() as u32, width as u32);
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if ch == '*' {
                grid.toggle_cell_state(x as i32, y as i32);
            }
        }
    }
    grid
}

/// The fingerprint a grid built from `rows` would have.
pub fn ascii_fingerprint(rows: &[&str]) -> String {
    rows.iter()
        .flat_map(|r| r.chars())
        .map(|ch| if ch == '*' { '*' } else { '.' })
        .collect()
}
