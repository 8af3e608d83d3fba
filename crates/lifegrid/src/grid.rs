//! The Game of Life grid: cell state, seeding operations and generation stepping.
//!
//! [`Grid`] owns three equally sized row-major buffers:
//!
//! ```text
//! current  ←── the visible generation, read by every query
//! next     ←── scratch, fully rewritten by each step, then swapped in
//! saved    ←── snapshot written by save_grid(), restored by reset_grid()
//! ```
//!
//! The live-cell count is kept as a single counter that every write site
//! adjusts; nothing recounts it by scanning `current`.

use std::fmt;

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::GridConfig;
use crate::error::GridError;
use crate::fingerprint::{self, Fingerprint};
use crate::history::CycleHistory;
use crate::lattice::Lattice;
use crate::pattern::{anchor_within_margin, GliderDirection};
use crate::rules;

/// Summary of a completed [`Grid::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Generation number reached by this step (1 after the first step).
    pub generation: u64,
    /// Live cells in the new generation.
    pub live_count: usize,
    /// Whether the new generation repeats one still in the history window.
    pub cycle_detected: bool,
}

/// A fixed-size Game of Life simulation.
///
/// Coordinates are `(x, y)` with `x` the column and `y` the row. Reads
/// outside the grid return dead; writes outside the grid are ignored.
///
/// # Examples
///
/// ```
/// use lifegrid::Grid;
///
/// let mut grid = Grid::square(5);
/// for x in 1..=3 {
///     grid.toggle_cell_state(x, 2);
/// }
/// assert_eq!(grid.to_string().len(), 25);
///
/// grid.step();
/// assert!(grid.get_cell_state(2, 1));
/// assert!(grid.get_cell_state(2, 3));
/// assert!(!grid.get_cell_state(1, 2));
/// assert_eq!(grid.live_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    lattice: Lattice,
    current: Vec<bool>,
    next: Vec<bool>,
    saved: Vec<bool>,
    live_count: usize,
    saved_live_count: usize,
    history: CycleHistory,
    cycle_detected: bool,
    generation: u64,
    rng: ChaCha8Rng,
}

impl Grid {
    /// Create a dead `rows x columns` grid with an all-dead saved snapshot.
    ///
    /// The random source is seeded from OS entropy. A zero dimension gives
    /// a degenerate grid with no cells; every operation on it is a no-op.
    pub fn new(rows: u32, columns: u32) -> Self {
        Self::with_rng(Lattice::new(rows, columns), ChaCha8Rng::from_entropy())
    }

    /// Create a dead `size x size` grid.
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    /// Like [`new`](Self::new), with a deterministic random source.
    pub fn with_seed(rows: u32, columns: u32, seed: u64) -> Self {
        Self::with_rng(Lattice::new(rows, columns), ChaCha8Rng::seed_from_u64(seed))
    }

    /// Build a grid from a validated configuration, applying the optional
    /// initial random fill.
    ///
    /// # Errors
    ///
    /// Any error from [`GridConfig::validate`].
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        let lattice = Lattice::new(config.rows, config.columns);
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut grid = Self::with_rng(lattice, rng);
        if let Some(p) = config.fill_probability {
            grid.random_fill(p);
        }
        Ok(grid)
    }

    fn with_rng(lattice: Lattice, rng: ChaCha8Rng) -> Self {
        let n = lattice.cell_count();
        Self {
            lattice,
            current: vec![false; n],
            next: vec![false; n],
            saved: vec![false; n],
            live_count: 0,
            saved_live_count: 0,
            history: CycleHistory::new(),
            cycle_detected: false,
            generation: 0,
            rng,
        }
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.lattice.rows()
    }

    /// Number of columns.
    pub fn columns(&self) -> u32 {
        self.lattice.columns()
    }

    /// `rows * columns`.
    pub fn cell_count(&self) -> usize {
        self.lattice.cell_count()
    }

    /// Grid dimensions and coordinate arithmetic.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Number of live cells in the current generation.
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    /// Whether the last [`step`](Self::step) produced a state already in
    /// the history window. Cleared at the start of every step.
    pub fn cycle_detected(&self) -> bool {
        self.cycle_detected
    }

    /// Number of steps taken since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current generation as a row-major buffer.
    pub fn cells(&self) -> &[bool] {
        &self.current
    }

    /// The saved snapshot as a row-major buffer.
    pub fn saved_cells(&self) -> &[bool] {
        &self.saved
    }

    /// Fingerprints in the cycle-detection window, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &str> + '_ {
        self.history.iter().map(Fingerprint::as_str)
    }

    /// Number of fingerprints in the cycle-detection window.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Empty the cycle-detection window, e.g. after reseeding the grid.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.cycle_detected = false;
    }

    // ── Queries ─────────────────────────────────────────────────

    /// `true` if `(x, y)` is alive. Out-of-range coordinates are dead.
    pub fn get_cell_state(&self, x: i32, y: i32) -> bool {
        self.lattice.index(x, y).is_some_and(|i| self.current[i])
    }

    /// Row-major text encoding of the current generation (`*` alive, `.` dead).
    pub fn fingerprint(&self) -> String {
        fingerprint::encode(&self.current)
    }

    /// Text encoding of an arbitrary row-major state buffer.
    pub fn fingerprint_of(&self, state: &[bool]) -> String {
        fingerprint::encode(state)
    }

    // ── Mutators ────────────────────────────────────────────────

    /// Kill every cell. The saved snapshot and history are untouched.
    pub fn clear(&mut self) {
        self.live_count = 0;
        self.current.fill(false);
        self.next.fill(false);
    }

    /// Replace the grid's random source with one seeded from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Independently set each cell alive when a uniform draw from `[0, 1)`
    /// is `<= probability`, using the grid's own random source.
    ///
    /// `probability` is expected in `[0, 1]`; a NaN kills every cell.
    pub fn random_fill(&mut self, probability: f64) {
        self.live_count = fill_cells(&mut self.current, &mut self.rng, probability);
        debug!(
            "random fill p={probability}: {} of {} cells alive",
            self.live_count,
            self.current.len()
        );
    }

    /// [`random_fill`](Self::random_fill) drawing from a caller-supplied source.
    pub fn random_fill_with<R: Rng + ?Sized>(&mut self, rng: &mut R, probability: f64) {
        self.live_count = fill_cells(&mut self.current, rng, probability);
    }

    /// Copy the current generation into the saved snapshot.
    pub fn save_grid(&mut self) {
        self.saved.copy_from_slice(&self.current);
        self.saved_live_count = self.live_count;
    }

    /// Restore the saved snapshot into the current generation, live count
    /// included.
    pub fn reset_grid(&mut self) {
        self.current.copy_from_slice(&self.saved);
        self.live_count = self.saved_live_count;
    }

    /// Flip the cell at `(x, y)`. Out-of-range coordinates are ignored.
    pub fn toggle_cell_state(&mut self, x: i32, y: i32) {
        let Some(i) = self.lattice.index(x, y) else {
            return;
        };
        self.current[i] = !self.current[i];
        if self.current[i] {
            self.live_count += 1;
        } else {
            self.live_count -= 1;
        }
    }

    /// Stamp a glider anchored at `(x, y)`.
    ///
    /// Nothing happens unless the anchor is more than
    /// [`GLIDER_MARGIN`](crate::pattern::GLIDER_MARGIN) cells inside the
    /// caller-supplied `bounds_width x bounds_height` area. Cells that are
    /// already alive are left as they are, and any target cell outside the
    /// grid itself is skipped.
    ///
    /// Returns the number of cells that became alive.
    pub fn add_glider(
        &mut self,
        x: i32,
        y: i32,
        direction: GliderDirection,
        bounds_width: i32,
        bounds_height: i32,
    ) -> usize {
        self.stamp_glider(x, y, Some(direction), bounds_width, bounds_height)
    }

    /// [`add_glider`](Self::add_glider) with the direction given as text
    /// (see [`GliderDirection`]'s `FromStr`). An unrecognised name still
    /// sets the anchor cell but no offsets.
    pub fn add_glider_named(
        &mut self,
        x: i32,
        y: i32,
        direction: &str,
        bounds_width: i32,
        bounds_height: i32,
    ) -> usize {
        let parsed = match direction.parse::<GliderDirection>() {
            Ok(dir) => Some(dir),
            Err(err) => {
                debug!("glider at ({x}, {y}): {err}, placing anchor only");
                None
            }
        };
        self.stamp_glider(x, y, parsed, bounds_width, bounds_height)
    }

    /// [`add_glider`](Self::add_glider) using the grid's own dimensions as
    /// the bounds.
    pub fn add_glider_in_bounds(&mut self, x: i32, y: i32, direction: GliderDirection) -> usize {
        let width = i32::try_from(self.columns()).unwrap_or(i32::MAX);
        let height = i32::try_from(self.rows()).unwrap_or(i32::MAX);
        self.add_glider(x, y, direction, width, height)
    }

    fn stamp_glider(
        &mut self,
        x: i32,
        y: i32,
        direction: Option<GliderDirection>,
        bounds_width: i32,
        bounds_height: i32,
    ) -> usize {
        if !anchor_within_margin(x, y, bounds_width, bounds_height) {
            debug!("glider at ({x}, {y}) rejected: too close to {bounds_width}x{bounds_height} bounds");
            return 0;
        }
        let mut born = usize::from(self.set_alive(x, y));
        if let Some(dir) = direction {
            for (dx, dy) in dir.offsets() {
                born += usize::from(self.set_alive(x + dx, y + dy));
            }
        }
        born
    }

    /// Make `(x, y)` alive. Returns `true` if it was dead and in bounds.
    fn set_alive(&mut self, x: i32, y: i32) -> bool {
        match self.lattice.index(x, y) {
            Some(i) if !self.current[i] => {
                self.current[i] = true;
                self.live_count += 1;
                true
            }
            _ => false,
        }
    }

    // ── Stepping ────────────────────────────────────────────────

    /// Advance one generation and update cycle detection.
    ///
    /// The new generation is fingerprinted and pushed into a sliding window
    /// of the last [`HISTORY_CAPACITY`](crate::history::HISTORY_CAPACITY)
    /// states. Only once that window is full is the new state checked
    /// against it, so [`cycle_detected`](Self::cycle_detected) catches
    /// periods of at most that many generations.
    pub fn step(&mut self) -> StepOutcome {
        self.cycle_detected = false;

        self.advance_population();
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        if self.history.record(Fingerprint::of(&self.current)) {
            self.cycle_detected = true;
            debug!(
                "cycle detected at generation {} ({} live cells)",
                self.generation, self.live_count
            );
        }
        trace!(
            "generation {}: {} live cells",
            self.generation,
            self.live_count
        );

        StepOutcome {
            generation: self.generation,
            live_count: self.live_count,
            cycle_detected: self.cycle_detected,
        }
    }

    /// Compute the next generation into `next` from `current`.
    fn advance_population(&mut self) {
        // A lone cell always dies and an empty grid stays empty, so skip
        // the neighbour pass entirely.
        if self.live_count <= 1 {
            self.next.fill(false);
            self.live_count = 0;
            return;
        }

        let columns = self.lattice.columns() as usize;
        let mut live = 0usize;
        for y in 0..self.lattice.rows() as i32 {
            for x in 0..self.lattice.columns() as i32 {
                let i = x as usize + (y as usize) * columns;
                let neighbours = self.lattice.live_neighbours(&self.current, x, y);
                let alive = rules::next_state(self.current[i], neighbours);
                self.next[i] = alive;
                if alive {
                    live += 1;
                }
            }
        }
        self.live_count = live;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fingerprint())
    }
}

/// Overwrite `cells` with independent Bernoulli draws; returns the live count.
fn fill_cells<R: Rng + ?Sized>(cells: &mut [bool], rng: &mut R, probability: f64) -> usize {
    let mut live = 0;
    for cell in cells.iter_mut() {
        *cell = rng.gen::<f64>() <= probability;
        if *cell {
            live += 1;
        }
    }
    live
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HISTORY_CAPACITY;

    fn scan_live(grid: &Grid) -> usize {
        grid.cells().iter().filter(|&&c| c).count()
    }

    fn set(grid: &mut Grid, cells: &[(i32, i32)]) {
        for &(x, y) in cells {
            grid.toggle_cell_state(x, y);
        }
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_grid_is_dead_with_matching_buffers() {
        let g = Grid::new(3, 7);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.columns(), 7);
        assert_eq!(g.cell_count(), 21);
        assert_eq!(g.cells().len(), 21);
        assert_eq!(g.saved_cells().len(), 21);
        assert_eq!(g.live_count(), 0);
        assert!(!g.cycle_detected());
        assert_eq!(g.generation(), 0);
        assert_eq!(g.history_len(), 0);
    }

    #[test]
    fn square_grid_has_equal_sides() {
        let g = Grid::square(6);
        assert_eq!(g.rows(), 6);
        assert_eq!(g.columns(), 6);
    }

    #[test]
    fn zero_sized_grid_is_inert() {
        let mut g = Grid::new(0, 0);
        assert_eq!(g.cell_count(), 0);
        g.random_fill(1.0);
        g.toggle_cell_state(0, 0);
        assert_eq!(g.add_glider_named(15, 15, "se", 40, 40), 0);
        g.save_grid();
        g.reset_grid();
        let out = g.step();
        assert_eq!(out.live_count, 0);
        assert_eq!(g.fingerprint(), "");
        assert!(!g.get_cell_state(0, 0));
    }

    #[test]
    fn from_config_validates() {
        assert_eq!(
            Grid::from_config(&GridConfig::new(0, 4)).err(),
            Some(GridError::EmptyGrid)
        );
    }

    #[test]
    fn from_config_seeded_fill_is_reproducible() {
        let config = GridConfig::square(20).with_seed(7).with_fill(0.3);
        let a = Grid::from_config(&config).unwrap();
        let b = Grid::from_config(&config).unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.live_count(), scan_live(&a));
        assert!(a.live_count() > 0);
    }

    // ── Cell access ─────────────────────────────────────────────

    #[test]
    fn toggle_flips_and_tracks_count() {
        let mut g = Grid::square(4);
        g.toggle_cell_state(1, 2);
        assert!(g.get_cell_state(1, 2));
        assert!(g.cells()[1 + 2 * 4]);
        assert_eq!(g.live_count(), 1);
        g.toggle_cell_state(1, 2);
        assert!(!g.get_cell_state(1, 2));
        assert_eq!(g.live_count(), 0);
    }

    #[test]
    fn out_of_bounds_reads_dead_and_writes_nothing() {
        let mut g = Grid::new(3, 5);
        g.random_fill(1.0);
        let before = g.fingerprint();
        for (x, y) in [(-1, 0), (0, -1), (5, 0), (0, 3), (i32::MIN, i32::MAX)] {
            assert!(!g.get_cell_state(x, y));
            g.toggle_cell_state(x, y);
        }
        assert_eq!(g.fingerprint(), before);
        assert_eq!(g.live_count(), 15);
    }

    #[test]
    fn x_is_column_and_y_is_row() {
        let mut g = Grid::new(2, 3);
        g.toggle_cell_state(2, 1);
        assert_eq!(g.fingerprint(), ".....*");
        assert_eq!(g.to_string(), g.fingerprint());
    }

    // ── Clear / fill / save / reset ─────────────────────────────

    #[test]
    fn clear_kills_everything() {
        let mut g = Grid::square(8);
        g.random_fill(0.5);
        g.clear();
        assert_eq!(g.live_count(), 0);
        assert!(g.cells().iter().all(|&c| !c));
    }

    #[test]
    fn random_fill_extremes() {
        let mut g = Grid::with_seed(10, 10, 1);
        g.random_fill(1.0);
        assert_eq!(g.live_count(), 100);
        g.random_fill(-1.0);
        assert_eq!(g.live_count(), 0);
        g.random_fill(f64::NAN);
        assert_eq!(g.live_count(), 0);
    }

    #[test]
    fn random_fill_recounts_from_scratch() {
        let mut g = Grid::with_seed(30, 30, 99);
        g.random_fill(0.3);
        assert_eq!(g.live_count(), scan_live(&g));
        g.random_fill(0.6);
        assert_eq!(g.live_count(), scan_live(&g));
        // 900 cells at p=0.6: comfortably inside [400, 680].
        assert!((400..=680).contains(&g.live_count()));
    }

    #[test]
    fn reseed_makes_fill_reproducible() {
        let mut a = Grid::new(12, 12);
        let mut b = Grid::new(12, 12);
        a.reseed(5);
        b.reseed(5);
        a.random_fill(0.4);
        b.random_fill(0.4);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn random_fill_with_external_rng() {
        let mut g = Grid::square(10);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        g.random_fill_with(&mut rng, 0.5);
        assert_eq!(g.live_count(), scan_live(&g));
    }

    #[test]
    fn save_then_reset_round_trips() {
        let mut g = Grid::with_seed(9, 9, 2);
        g.random_fill(0.4);
        let fp = g.fingerprint();
        let live = g.live_count();
        g.save_grid();
        g.reset_grid();
        assert_eq!(g.fingerprint(), fp);
        assert_eq!(g.live_count(), live);
    }

    #[test]
    fn reset_restores_live_count_after_mutation() {
        let mut g = Grid::with_seed(9, 9, 4);
        g.random_fill(0.4);
        g.save_grid();
        let saved = g.fingerprint();
        let saved_live = g.live_count();
        g.clear();
        g.toggle_cell_state(0, 0);
        g.step();
        g.reset_grid();
        assert_eq!(g.fingerprint(), saved);
        assert_eq!(g.live_count(), saved_live);
        assert_eq!(g.live_count(), scan_live(&g));
    }

    #[test]
    fn reset_without_save_restores_dead_grid() {
        let mut g = Grid::square(5);
        g.random_fill(1.0);
        g.reset_grid();
        assert_eq!(g.live_count(), 0);
        assert_eq!(g.fingerprint(), ".".repeat(25));
    }

    // ── Glider placement ────────────────────────────────────────

    #[test]
    fn glider_sets_five_cells_once() {
        let mut g = Grid::square(40);
        assert_eq!(g.add_glider(15, 15, GliderDirection::SouthEast, 40, 40), 5);
        assert_eq!(g.live_count(), 5);
        for (x, y) in [(15, 15), (15, 17), (16, 16), (17, 16), (16, 17)] {
            assert!(g.get_cell_state(x, y), "({x}, {y}) should be alive");
        }
        assert_eq!(g.add_glider(15, 15, GliderDirection::SouthEast, 40, 40), 0);
        assert_eq!(g.live_count(), 5);
    }

    #[test]
    fn glider_overlapping_live_cells_counts_only_new_ones() {
        let mut g = Grid::square(40);
        g.toggle_cell_state(15, 15);
        g.toggle_cell_state(16, 16);
        assert_eq!(g.add_glider(15, 15, GliderDirection::SouthEast, 40, 40), 3);
        assert_eq!(g.live_count(), 5);
    }

    #[test]
    fn glider_rejected_near_bounds() {
        let mut g = Grid::square(40);
        for (x, y) in [(10, 20), (20, 10), (30, 20), (20, 30)] {
            assert_eq!(g.add_glider(x, y, GliderDirection::NorthWest, 40, 40), 0);
        }
        assert_eq!(g.live_count(), 0);
    }

    #[test]
    fn glider_skips_cells_outside_grid_when_bounds_exceed_it() {
        // Caller bounds larger than the grid: anchor passes the margin guard
        // but lies outside the 12x12 grid.
        let mut g = Grid::square(12);
        assert_eq!(g.add_glider(11, 11, GliderDirection::SouthEast, 100, 100), 1);
        assert_eq!(g.live_count(), 1);
        assert!(g.get_cell_state(11, 11));
        assert_eq!(g.add_glider(20, 20, GliderDirection::SouthEast, 100, 100), 0);
        assert_eq!(g.live_count(), scan_live(&g));
    }

    #[test]
    fn unknown_direction_sets_anchor_only() {
        let mut g = Grid::square(40);
        assert_eq!(g.add_glider_named(20, 20, "up", 40, 40), 1);
        assert_eq!(g.live_count(), 1);
        assert!(g.get_cell_state(20, 20));
    }

    #[test]
    fn named_glider_matches_enum() {
        let mut a = Grid::square(40);
        let mut b = Grid::square(40);
        a.add_glider_named(20, 20, "ne", 40, 40);
        b.add_glider(20, 20, GliderDirection::NorthEast, 40, 40);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn glider_in_bounds_uses_grid_dimensions() {
        let mut g = Grid::new(30, 40);
        assert_eq!(g.add_glider_in_bounds(25, 15, GliderDirection::SouthWest), 5);
        // y = 20 is not < 30 - 10.
        assert_eq!(g.add_glider_in_bounds(25, 20, GliderDirection::SouthWest), 0);
    }

    // ── Stepping ────────────────────────────────────────────────

    #[test]
    fn empty_grid_stays_empty() {
        let mut g = Grid::square(6);
        let out = g.step();
        assert_eq!(out.generation, 1);
        assert_eq!(out.live_count, 0);
        assert_eq!(g.fingerprint(), ".".repeat(36));
    }

    #[test]
    fn lone_cell_dies() {
        let mut g = Grid::square(6);
        g.toggle_cell_state(3, 3);
        g.step();
        assert_eq!(g.live_count(), 0);
        assert!(!g.get_cell_state(3, 3));
    }

    #[test]
    fn lone_cell_after_busy_generation_dies() {
        // `next` holds a non-empty generation from the previous step; the
        // short-circuit must not resurrect it.
        let mut g = Grid::square(6);
        set(&mut g, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        g.step();
        g.clear();
        g.toggle_cell_state(4, 4);
        g.step();
        assert_eq!(g.live_count(), 0);
        assert_eq!(g.fingerprint(), ".".repeat(36));
    }

    #[test]
    fn block_is_still_life() {
        let mut g = Grid::square(4);
        set(&mut g, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let before = g.fingerprint();
        for _ in 0..5 {
            g.step();
            assert_eq!(g.fingerprint(), before);
            assert_eq!(g.live_count(), 4);
        }
    }

    #[test]
    fn block_in_corner_is_still_life() {
        let mut g = Grid::square(4);
        set(&mut g, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let before = g.fingerprint();
        g.step();
        assert_eq!(g.fingerprint(), before);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut g = Grid::square(5);
        set(&mut g, &[(1, 2), (2, 2), (3, 2)]);
        let horizontal = g.fingerprint();
        g.step();
        assert_ne!(g.fingerprint(), horizontal);
        assert!(g.get_cell_state(2, 1) && g.get_cell_state(2, 2) && g.get_cell_state(2, 3));
        g.step();
        assert_eq!(g.fingerprint(), horizontal);
        assert_eq!(g.live_count(), 3);
    }

    #[test]
    fn cycle_reported_only_after_window_fills() {
        let mut g = Grid::square(5);
        set(&mut g, &[(1, 2), (2, 2), (3, 2)]);
        for n in 1..=HISTORY_CAPACITY {
            let out = g.step();
            assert!(!out.cycle_detected, "premature detection at step {n}");
            assert_eq!(g.history_len(), n);
        }
        let out = g.step();
        assert!(out.cycle_detected);
        assert!(g.cycle_detected());
        assert_eq!(g.history_len(), HISTORY_CAPACITY);
    }

    #[test]
    fn clear_history_restarts_detection() {
        let mut g = Grid::square(5);
        set(&mut g, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        for _ in 0..=HISTORY_CAPACITY {
            g.step();
        }
        assert!(g.cycle_detected());
        g.clear_history();
        assert!(!g.cycle_detected());
        assert_eq!(g.history().count(), 0);
        assert!(!g.step().cycle_detected);
    }

    #[test]
    fn history_holds_post_step_fingerprints() {
        let mut g = Grid::square(5);
        set(&mut g, &[(1, 2), (2, 2), (3, 2)]);
        let initial = g.fingerprint();
        g.step();
        let first: Vec<&str> = g.history().collect();
        assert_eq!(first.len(), 1);
        assert_ne!(first[0], initial);
        assert_eq!(first[0], g.fingerprint());
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let mut g = Grid::with_seed(16, 16, 11);
        g.random_fill(0.3);
        assert_eq!(g.fingerprint(), g.fingerprint());
        assert_eq!(g.fingerprint_of(g.cells()), g.fingerprint());
        assert_eq!(g.fingerprint_of(g.saved_cells()), ".".repeat(256));
    }
}
