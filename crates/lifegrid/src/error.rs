//! Error types for grid construction and configuration parsing.
//!
//! Engine operations themselves never fail: out-of-range coordinates read
//! as dead and writes to them are ignored. Errors only surface where a
//! caller hands the engine something it must validate up front.

use std::error::Error;
use std::fmt;

/// Errors arising from grid configuration or input parsing.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// A validated grid was requested with zero rows or zero columns.
    EmptyGrid,
    /// A dimension does not fit the `i32` coordinate space.
    DimensionTooLarge {
        /// Which axis overflowed (`"rows"` or `"columns"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// `rows * columns` does not fit in `usize`.
    CellCountOverflow {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        columns: u32,
    },
    /// A fill probability is NaN, infinite, or outside `[0, 1]`.
    InvalidProbability {
        /// The rejected value.
        value: f64,
    },
    /// A glider direction name was not recognised.
    UnknownDirection {
        /// The text that failed to parse.
        name: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::CellCountOverflow { rows, columns } => {
                write!(f, "cell count {rows} x {columns} overflows usize")
            }
            Self::InvalidProbability { value } => {
                write!(f, "fill probability must be finite and in [0, 1], got {value}")
            }
            Self::UnknownDirection { name } => {
                write!(f, "unknown glider direction '{name}'")
            }
        }
    }
}

impl Error for GridError {}
