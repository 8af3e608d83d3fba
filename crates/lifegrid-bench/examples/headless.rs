//! Headless run loop.
//!
//! Demonstrates the contract a UI shell has with the engine: seed a grid,
//! save it, drive `step()` until a short cycle is detected, then restore
//! the saved state.
//!
//! Run with `RUST_LOG=debug` to see engine log events.

use lifegrid::{GliderDirection, Grid, GridConfig};
use log::info;

const MAX_GENERATIONS: u64 = 5_000;

fn main() {
    env_logger::init();

    println!("=== lifegrid headless run ===\n");

    let config = GridConfig::square(64).with_seed(2024).with_fill(0.30);
    let mut grid = Grid::from_config(&config).expect("valid config");
    grid.add_glider(20, 20, GliderDirection::SouthEast, 64, 64);
    grid.add_glider_named(40, 40, "nw", 64, 64);
    grid.save_grid();

    let initial = grid.live_count();
    println!(
        "{}x{} grid, {} live cells after seeding",
        grid.columns(),
        grid.rows(),
        initial
    );

    loop {
        let outcome = grid.step();
        if outcome.generation % 100 == 0 {
            info!(
                "generation {}: {} live",
                outcome.generation, outcome.live_count
            );
        }
        if outcome.cycle_detected {
            println!(
                "short cycle detected at generation {} with {} live cells",
                outcome.generation, outcome.live_count
            );
            break;
        }
        if outcome.generation >= MAX_GENERATIONS {
            println!("no short cycle within {MAX_GENERATIONS} generations");
            break;
        }
    }

    print_grid(&grid);

    grid.reset_grid();
    grid.clear_history();
    println!(
        "\nrestored saved state: {} live cells (was {})",
        grid.live_count(),
        initial
    );
}

fn print_grid(grid: &Grid) {
    let text = grid.fingerprint();
    let width = grid.columns() as usize;
    println!();
    for row in text.as_bytes().chunks(width.max(1)) {
        println!("{}", String::from_utf8_lossy(row));
    }
}
