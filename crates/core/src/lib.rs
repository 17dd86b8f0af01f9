//! Core module - the grid, seeds and random sources
//!
//! Everything here is pure and deterministic given its inputs. There is no
//! terminal, timing or global state, which keeps it:
//!
//! - **Testable**: grids and seeds are plain values
//! - **Reproducible**: randomness only enters through a [`TieBreaker`]
//! - **Portable**: any front end can drive it
//!
//! # Module Structure
//!
//! - [`grid`]: padded cell matrix with dead-outside reads and neighbour scans
//! - [`seed`]: seed text parsing, alphabet validation, blank seed generation
//! - [`rng`]: tie-break sources (seeded ChaCha, fixed, cycling)
//!
//! # Example
//!
//! ```
//! use multicell_core::{Alphabet, Grid, Seed};
//! use multicell_core::types::Cell;
//!
//! let seed = Seed::parse("...\nABC\n...\n", &Alphabet::default()).unwrap();
//! let grid = Grid::from_seed(&seed, 2);
//!
//! assert_eq!(grid.rows(), 3 + 2 * 2);
//! assert_eq!(grid.visible(1, 0), Cell::Alive('A'));
//! assert_eq!(grid.get(-1, -1), Cell::Dead);
//! assert_eq!(grid.neighbours(3, 3).len(), 2);
//! ```

pub mod grid;
pub mod rng;
pub mod seed;

pub use multicell_types as types;

// Re-export commonly used types for convenience
pub use grid::{Grid, Neighbours, NEIGHBOUR_OFFSETS};
pub use rng::{CyclingTieBreaker, FirstTieBreaker, SeededTieBreaker, TieBreaker};
pub use seed::{blank_seed, Alphabet, IdentitySet, Seed, SeedError};
