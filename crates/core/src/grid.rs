//! Grid module - the simulation surface
//!
//! A `rows x cols` matrix of cells stored as a flat row-major vector. The outer
//! `padding` cells on every side are simulated like any other cell but are
//! never displayed, so patterns can grow past the visible edge without hitting
//! an abrupt wall.
//!
//! Coordinates are `(row, col)`. Reads outside the grid are dead, which gives
//! the automaton an infinite dead border beyond the padding.

use arrayvec::ArrayVec;

use crate::seed::Seed;
use crate::types::Cell;

/// Moore neighbourhood offsets in scan order: up-left, up, up-right, left,
/// right, down-left, down, down-right. Birth tie-breaks depend on this order.
pub const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Identities of the live neighbours of one cell, in scan order.
pub type Neighbours = ArrayVec<char, 8>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    padding: usize,
    /// Row-major cells (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid whose visible region is `disp_rows x disp_cols`.
    pub fn new(disp_rows: usize, disp_cols: usize, padding: usize) -> Self {
        let rows = disp_rows + 2 * padding;
        let cols = disp_cols + 2 * padding;
        Self {
            rows,
            cols,
            padding,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Place a validated seed in the middle of a fresh padded grid.
    pub fn from_seed(seed: &Seed, padding: usize) -> Self {
        let mut grid = Self::new(seed.rows(), seed.cols(), padding);
        for row in 0..seed.rows() {
            for col in 0..seed.cols() {
                grid.set(row + padding, col + padding, seed.cell(row, col));
            }
        }
        grid
    }

    /// An all-dead grid with the same dimensions as `self`.
    pub fn blank_like(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            padding: self.padding,
            cells: vec![Cell::Dead; self.cells.len()],
        }
    }

    #[inline(always)]
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn disp_rows(&self) -> usize {
        self.rows - 2 * self.padding
    }

    pub fn disp_cols(&self) -> usize {
        self.cols - 2 * self.padding
    }

    /// Cell at `(row, col)`; anything off the grid reads as dead.
    pub fn get(&self, row: isize, col: isize) -> Cell {
        self.index(row, col)
            .map(|idx| self.cells[idx])
            .unwrap_or(Cell::Dead)
    }

    /// Set the cell at `(row, col)`.
    /// Returns false (and changes nothing) if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.cells[row * self.cols + col] = cell;
        true
    }

    /// Identities of the live Moore neighbours of `(row, col)`.
    pub fn neighbours(&self, row: usize, col: usize) -> Neighbours {
        let mut out = Neighbours::new();
        for &(dr, dc) in NEIGHBOUR_OFFSETS.iter() {
            if let Cell::Alive(id) = self.get(row as isize + dr, col as isize + dc) {
                out.push(id);
            }
        }
        out
    }

    /// Cell in the visible window, `(0, 0)` being its top-left corner.
    pub fn visible(&self, row: usize, col: usize) -> Cell {
        self.get(
            (row + self.padding) as isize,
            (col + self.padding) as isize,
        )
    }

    /// Live cells anywhere in the grid, padding included.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Live cells inside the visible window.
    pub fn visible_population(&self) -> usize {
        let mut count = 0;
        for row in 0..self.disp_rows() {
            for col in 0..self.disp_cols() {
                if self.visible(row, col).is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
