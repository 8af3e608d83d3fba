//! Glider seed pattern.
//!
//! A glider is stamped as an anchor cell plus four direction-specific
//! offsets. The southeast glider, anchored at `A`, looks like:
//!
//! ```text
//! A . .
//! . * *
//! * * .
//! ```
//!
//! and the other three directions are its mirror images.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

/// Minimum distance the anchor must keep from every side of the caller's
/// bounds for [`Grid::add_glider`](crate::Grid::add_glider) to proceed.
pub const GLIDER_MARGIN: i32 = 10;

/// Diagonal direction a glider travels in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GliderDirection {
    /// Up and to the left.
    NorthWest,
    /// Up and to the right.
    NorthEast,
    /// Down and to the left.
    SouthWest,
    /// Down and to the right.
    SouthEast,
}

impl GliderDirection {
    /// Every direction, in declaration order.
    pub const ALL: [GliderDirection; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// `(dx, dy)` of the four non-anchor cells relative to the anchor.
    pub fn offsets(self) -> [(i32, i32); 4] {
        match self {
            Self::SouthEast => [(0, 2), (1, 1), (2, 1), (1, 2)],
            Self::NorthWest => [(0, -2), (-1, -1), (-2, -1), (-1, -2)],
            Self::NorthEast => [(2, 0), (1, -1), (2, -1), (1, -2)],
            Self::SouthWest => [(-2, 0), (-1, 1), (-2, 1), (-1, 2)],
        }
    }

    /// Short lowercase name (`"nw"`, `"ne"`, `"sw"`, `"se"`).
    pub fn short_name(self) -> &'static str {
        match self {
            Self::NorthWest => "nw",
            Self::NorthEast => "ne",
            Self::SouthWest => "sw",
            Self::SouthEast => "se",
        }
    }
}

impl fmt::Display for GliderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NorthWest => "northwest",
            Self::NorthEast => "northeast",
            Self::SouthWest => "southwest",
            Self::SouthEast => "southeast",
        };
        f.write_str(name)
    }
}

impl FromStr for GliderDirection {
    type Err = GridError;

    /// Accepts short (`"se"`) or long (`"southeast"`) names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nw" | "northwest" => Ok(Self::NorthWest),
            "ne" | "northeast" => Ok(Self::NorthEast),
            "sw" | "southwest" => Ok(Self::SouthWest),
            "se" | "southeast" => Ok(Self::SouthEast),
            _ => Err(GridError::UnknownDirection {
                name: s.to_string(),
            }),
        }
    }
}

/// `true` if an anchor at `(x, y)` keeps [`GLIDER_MARGIN`] clear of every
/// side of a `bounds_width x bounds_height` area.
pub(crate) fn anchor_within_margin(x: i32, y: i32, bounds_width: i32, bounds_height: i32) -> bool {
    x > GLIDER_MARGIN
        && y > GLIDER_MARGIN
        && x < bounds_width.saturating_sub(GLIDER_MARGIN)
        && y < bounds_height.saturating_sub(GLIDER_MARGIN)
}
