//! Well-known patterns as cell offsets.
//!
//! Offsets are `(dx, dy)` from the pattern's top-left corner. Stamp them
//! with [`place`](crate::place).

/// A named set of live cells.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
    /// Oscillation period; 1 for still lifes.
    pub period: u32,
    /// Bounding box as `(width, height)`.
    pub extent: (i32, i32),
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    period: 1,
    extent: (2, 2),
};

pub const BEEHIVE: Pattern = Pattern {
    name: "Beehive",
    cells: &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
    period: 1,
    extent: (4, 3),
};

/// Horizontal phase.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
    period: 2,
    extent: (3, 1),
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    period: 2,
    extent: (4, 2),
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[
        (0, 0),
        (1, 0),
        (0, 1),
        (1, 1),
        (2, 2),
        (3, 2),
        (2, 3),
        (3, 3),
    ],
    period: 2,
    extent: (4, 4),
};

/// Every fixed or periodic pattern above.
pub const OSCILLATORS_AND_STILL_LIFES: &[Pattern] = &[BLOCK, BEEHIVE, BLINKER, TOAD, BEACON];
