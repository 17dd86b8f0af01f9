//! Automaton: the driver-facing owner of the simulation state.

use crate::core::{Grid, TieBreaker};
use crate::rule;

/// Current grid plus everything needed to advance it.
///
/// The grid is replaced wholesale on every step, so a `&Grid` handed to a
/// renderer always shows one complete generation.
#[derive(Debug, Clone)]
pub struct Automaton<T: TieBreaker> {
    grid: Grid,
    initial: Grid,
    tie_breaker: T,
    generation: u64,
}

impl<T: TieBreaker> Automaton<T> {
    pub fn new(grid: Grid, tie_breaker: T) -> Self {
        Self {
            initial: grid.clone(),
            grid,
            tie_breaker,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations computed since the start (or last restart).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        self.grid = rule::step(&self.grid, &mut self.tie_breaker);
        self.generation += 1;
        log::debug!(
            "generation {}: {} live ({} visible)",
            self.generation,
            self.grid.population(),
            self.grid.visible_population()
        );
    }

    /// Go back to the seed layout. The random source keeps its state.
    pub fn restart(&mut self) {
        self.grid = self.initial.clone();
        self.generation = 0;
        log::debug!("restarted from seed");
    }
}
