//! Benchmark profiles for lifegrid.
//!
//! - [`reference_profile`]: 100x100 grid (10K cells), 30% random fill
//! - [`stress_profile`]: 316x316 grid (~100K cells), 30% random fill
//! - [`glider_fleet`]: 100x100 grid seeded with a lattice of gliders

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lifegrid::{GliderDirection, Grid, GridConfig};

/// Fill probability used by the random profiles.
pub const REFERENCE_FILL: f64 = 0.30;

/// 100x100 grid with a seeded 30% random fill.
pub fn reference_profile(seed: u64) -> GridConfig {
    GridConfig::square(100)
        .with_seed(seed)
        .with_fill(REFERENCE_FILL)
}

/// 316x316 grid (~100K cells) with a seeded 30% random fill.
pub fn stress_profile(seed: u64) -> GridConfig {
    GridConfig::square(316)
        .with_seed(seed)
        .with_fill(REFERENCE_FILL)
}

/// Build a grid from a profile.
///
/// # Panics
///
/// Panics if the profile does not validate; every profile in this crate does.
pub fn build(config: &GridConfig) -> Grid {
    Grid::from_config(config).expect("benchmark profile must validate")
}

/// 100x100 grid with gliders every 12 cells, cycling through all four
/// directions. Sparse and deterministic: exercises the rule pass without
/// depending on the random source.
pub fn glider_fleet() -> Grid {
    let mut grid = Grid::square(100);
    let mut i = 0usize;
    for y in (12..88).step_by(12) {
        for x in (12..88).step_by(12) {
            let dir = GliderDirection::ALL[i % GliderDirection::ALL.len()];
            grid.add_glider_in_bounds(x, y, dir);
            i += 1;
        }
    }
    grid
}
