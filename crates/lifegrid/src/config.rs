//! Grid configuration and validation.
//!
//! [`GridConfig`] is the builder-input for [`Grid::from_config`](crate::Grid::from_config).
//! [`validate()`](GridConfig::validate) checks the structural invariants the
//! plain constructors leave to the caller.

use crate::error::GridError;

/// Configuration for a validated [`Grid`](crate::Grid).
///
/// All fields are public; start from [`GridConfig::default()`] or one of the
/// convenience constructors and override what you need.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Number of rows (the `y` extent). Must be non-zero.
    pub rows: u32,
    /// Number of columns (the `x` extent). Must be non-zero.
    pub columns: u32,
    /// Seed for the grid's random source. `None` draws one from OS entropy,
    /// so [`random_fill`](crate::Grid::random_fill) is not reproducible.
    pub seed: Option<u64>,
    /// Probability passed to [`random_fill`](crate::Grid::random_fill) right
    /// after construction. `None` leaves the grid dead.
    pub fill_probability: Option<f64>,
}

impl GridConfig {
    /// Default edge length used by [`GridConfig::default()`].
    pub const DEFAULT_SIZE: u32 = 40;

    /// Largest accepted dimension: coordinates are `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Rectangular grid, unseeded, no initial fill.
    pub fn new(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            seed: None,
            fill_probability: None,
        }
    }

    /// Square `size x size` grid, unseeded, no initial fill.
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    /// Set a deterministic seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Request an initial random fill with the given probability.
    pub fn with_fill(mut self, probability: f64) -> Self {
        self.fill_probability = Some(probability);
        self
    }

    /// Total number of cells, or `None` if `rows * columns` overflows.
    pub fn cell_count(&self) -> Option<usize> {
        (self.rows as usize).checked_mul(self.columns as usize)
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyGrid`] if either dimension is zero
    /// - [`GridError::DimensionTooLarge`] if either exceeds [`Self::MAX_DIM`]
    /// - [`GridError::CellCountOverflow`] if the cell count overflows `usize`
    /// - [`GridError::InvalidProbability`] if `fill_probability` is set and
    ///   not a finite value in `[0, 1]`
    pub fn validate(&self) -> Result<(), GridError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(GridError::EmptyGrid);
        }
        if self.rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: self.rows,
                max: Self::MAX_DIM,
            });
        }
        if self.columns > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "columns",
                value: self.columns,
                max: Self::MAX_DIM,
            });
        }
        if self.cell_count().is_none() {
            return Err(GridError::CellCountOverflow {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if let Some(p) = self.fill_probability {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(GridError::InvalidProbability { value: p });
            }
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::square(Self::DEFAULT_SIZE)
    }
}
