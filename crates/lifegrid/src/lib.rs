//! Conway's Game of Life on a fixed-size rectangular grid.
//!
//! This crate is the simulation engine only: cell state, the B3/S23
//! transition rule with absorbing edges, seeding operations and
//! short-cycle detection. Rendering, input handling and timers belong to
//! the host application, which drives [`Grid::step`] at its own pace.
//!
//! # Modules
//!
//! - [`grid`]: the [`Grid`] type and every operation on it
//! - [`lattice`]: flat `x + y * columns` addressing and the 8-neighbourhood
//! - [`rules`]: survive/birth constants and the transition function
//! - [`fingerprint`]: `*`/`.` text encoding of a state
//! - [`history`]: the bounded window used for cycle detection
//! - [`pattern`]: glider directions
//! - [`config`]: validated construction via [`GridConfig`]
//!
//! # Example
//!
//! ```
//! use lifegrid::{GliderDirection, Grid, GridConfig};
//!
//! let mut grid = Grid::from_config(&GridConfig::square(40).with_seed(42)).unwrap();
//! grid.add_glider(15, 15, GliderDirection::SouthEast, 40, 40);
//! assert_eq!(grid.live_count(), 5);
//!
//! while !grid.step().cycle_detected {
//!     if grid.generation() > 500 {
//!         break;
//!     }
//! }
//! ```
//!
//! # Logging
//!
//! Events are emitted through the [`log`] facade: cycle detection and
//! rejected glider placements at `debug`, per-generation counts at
//! `trace`. No logger is installed by this crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod grid;
pub mod history;
pub mod lattice;
pub mod pattern;
pub mod rules;

pub use config::GridConfig;
pub use error::GridError;
pub use fingerprint::Fingerprint;
pub use grid::{Grid, StepOutcome};
pub use history::{CycleHistory, HISTORY_CAPACITY};
pub use lattice::Lattice;
pub use pattern::{GliderDirection, GLIDER_MARGIN};
