//! Rectangular lattice with 8-connected neighbourhood and absorbing edges.
//!
//! Cells are addressed by `(x, y)` with `x` the column and `y` the row.
//! Storage is a flat row-major buffer; [`Lattice::index`] is the single
//! addressing function every other module goes through.
//!
//! Edges absorb: neighbours that would fall outside the grid are omitted,
//! so corner cells have 3 neighbours and edge cells have 5.

use smallvec::SmallVec;

/// All 8 offsets as `(dx, dy)`: W, E, N, S, NW, NE, SW, SE.
pub(crate) const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Dimensions of a grid and the coordinate arithmetic over them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Lattice {
    rows: u32,
    columns: u32,
}

impl Lattice {
    /// Create a lattice of `rows x columns` cells. Zero-sized lattices are
    /// allowed and simply contain no cells.
    pub fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// Number of rows (`y` extent).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns (`x` extent).
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.columns as usize)
    }

    /// `true` if `(x, y)` lies inside `[0, columns) x [0, rows)`.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.columns && (y as u32) < self.rows
    }

    /// Flat index `x + y * columns`, or `None` when out of bounds.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some(x as usize + (y as usize) * (self.columns as usize))
    }

    /// Inverse of [`index`](Self::index). Returns `None` past the last cell.
    pub fn coord(&self, index: usize) -> Option<(i32, i32)> {
        if index >= self.cell_count() {
            return None;
        }
        let cols = self.columns as usize;
        Some(((index % cols) as i32, (index / cols) as i32))
    }

    /// Flat indices of the in-bounds 8-connected neighbours of `(x, y)`.
    pub fn neighbours(&self, x: i32, y: i32) -> SmallVec<[usize; 8]> {
        let mut result = SmallVec::new();
        for (dx, dy) in MOORE_OFFSETS {
            if let Some(i) = self.index(x + dx, y + dy) {
                result.push(i);
            }
        }
        result
    }

    /// Count live neighbours of `(x, y)` in `cells`.
    ///
    /// `cells` must be a row-major buffer of exactly
    /// [`cell_count`](Self::cell_count) entries.
    #[inline]
    pub fn live_neighbours(&self, cells: &[bool], x: i32, y: i32) -> u8 {
        debug_assert_eq!(cells.len(), self.cell_count());
        let mut count = 0u8;
        for (dx, dy) in MOORE_OFFSETS {
            if let Some(i) = self.index(x + dx, y + dy) {
                if cells[i] {
                    count += 1;
                }
            }
        }
        count
    }
}
