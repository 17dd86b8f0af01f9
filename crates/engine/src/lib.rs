//! Engine module - the Multicell transition rule
//!
//! Standard Life rules (B3/S23) with one twist: cells carry an identity.
//!
//! - **Survival**: a live cell with 2 or 3 live neighbours keeps its exact identity
//! - **Death**: fewer than 2 or more than 3 live neighbours
//! - **Birth**: a dead cell with exactly 3 live neighbours takes the majority
//!   identity of its parents; if all three differ, a [`TieBreaker`] picks one
//!
//! Updates are synchronous: [`step`] reads one grid and builds a new one.
//!
//! # Example
//!
//! ```
//! use multicell_engine::{step, Automaton};
//! use multicell_engine::core::{Alphabet, FirstTieBreaker, Grid, Seed};
//! use multicell_engine::types::Cell;
//!
//! let seed = Seed::parse(".....\n.AAA.\n.....\n", &Alphabet::default()).unwrap();
//! let grid = Grid::from_seed(&seed, 1);
//!
//! let next = step(&grid, &mut FirstTieBreaker);
//! assert_eq!(next.visible(0, 2), Cell::Alive('A'));
//! assert_eq!(next.visible(1, 1), Cell::Dead);
//!
//! let mut automaton = Automaton::new(grid, FirstTieBreaker);
//! automaton.step();
//! assert_eq!(automaton.grid(), &next);
//! ```

pub mod automaton;
pub mod rule;

pub use multicell_core as core;
pub use multicell_types as types;

pub use automaton::Automaton;
pub use multicell_core::TieBreaker;
pub use rule::{next_cell, resolve_birth, step};
