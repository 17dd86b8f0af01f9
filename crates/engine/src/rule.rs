//! Birth, survival and identity resolution.
//!
//! A live cell survives with 2 or 3 live neighbours and keeps its identity.
//! A dead cell with exactly 3 live neighbours is born; its identity is the
//! majority among the three parents, or a random pick when all three differ.

use crate::core::{Grid, TieBreaker};
use crate::types::Cell;

/// Identity of a cell born from parents `(a, b, c)`, given in neighbour scan
/// order.
pub fn resolve_birth<T: TieBreaker>(a: char, b: char, c: char, tie_breaker: &mut T) -> char {
    if a == b || a == c {
        return a;
    }
    if b == c {
        return b;
    }
    let parents = [a, b, c];
    parents[tie_breaker.pick_of_three() % 3]
}

/// Next state of one cell from its current state and live neighbour identities.
pub fn next_cell<T: TieBreaker>(current: Cell, neighbours: &[char], tie_breaker: &mut T) -> Cell {
    let n = neighbours.len();
    match current {
        Cell::Alive(_) if n < 2 || n > 3 => Cell::Dead,
        Cell::Alive(_) => current,
        Cell::Dead if n == 3 => Cell::Alive(resolve_birth(
            neighbours[0],
            neighbours[1],
            neighbours[2],
            tie_breaker,
        )),
        Cell::Dead => Cell::Dead,
    }
}

/// Compute the next generation of `grid`.
///
/// Every cell, padding included, is evaluated against the same snapshot. The
/// input grid is left untouched.
pub fn step<T: TieBreaker>(grid: &Grid, tie_breaker: &mut T) -> Grid {
    let mut next = grid.blank_like();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let current = grid.get(row as isize, col as isize);
            let neighbours = grid.neighbours(row, col);
            let cell = next_cell(current, &neighbours, tie_breaker);
            if cell.is_alive() {
                next.set(row, col, cell);
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CyclingTieBreaker, FirstTieBreaker};

    /// Panics if asked to pick; proves a transition was deterministic.
    struct NoPick;

    impl TieBreaker for NoPick {
        fn pick_of_three(&mut self) -> usize {
            panic!("tie-break consulted for a deterministic transition");
        }
    }

    #[test]
    fn test_majority_wins_in_any_position() {
        for (a, b, c) in [('A', 'A', 'B'), ('A', 'B', 'A'), ('B', 'A', 'A')] {
            assert_eq!(resolve_birth(a, b, c, &mut NoPick), 'A');
        }
        assert_eq!(resolve_birth('A', 'B', 'B', &mut NoPick), 'B');
        assert_eq!(resolve_birth('C', 'C', 'C', &mut NoPick), 'C');
    }

    #[test]
    fn test_distinct_parents_use_pick() {
        let mut tb = CyclingTieBreaker::default();
        assert_eq!(resolve_birth('A', 'B', 'C', &mut tb), 'A');
        assert_eq!(resolve_birth('A', 'B', 'C', &mut tb), 'B');
        assert_eq!(resolve_birth('A', 'B', 'C', &mut tb), 'C');
    }

    #[test]
    fn test_live_cell_table() {
        let ids = ['A'; 8];
        for n in 0..=8 {
            let next = next_cell(Cell::Alive('Z'), &ids[..n], &mut NoPick);
            if n == 2 || n == 3 {
                assert_eq!(next, Cell::Alive('Z'), "n = {}", n);
            } else {
                assert_eq!(next, Cell::Dead, "n = {}", n);
            }
        }
    }

    #[test]
    fn test_dead_cell_table() {
        let ids = ['A'; 8];
        for n in 0..=8 {
            let next = next_cell(Cell::Dead, &ids[..n], &mut NoPick);
            if n == 3 {
                assert_eq!(next, Cell::Alive('A'));
            } else {
                assert_eq!(next, Cell::Dead, "n = {}", n);
            }
        }
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let mut grid = Grid::new(3, 3, 0);
        grid.set(1, 0, Cell::Alive('A'));
        grid.set(1, 1, Cell::Alive('A'));
        grid.set(1, 2, Cell::Alive('A'));
        let before = grid.clone();

        let next = step(&grid, &mut FirstTieBreaker);
        assert_eq!(grid, before);
        assert_ne!(next, grid);
    }
}
