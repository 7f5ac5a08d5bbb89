//! Board representation and its primitive mutations.
//!
//! A board is an N×N grid of `u32` stored row-major; 0 means empty and
//! every non-zero value is a power of two ≥ 2, maintained by
//! construction (only spawning and merging write non-zero values).
//!
//! Tile spawning enumerates the empty cells explicitly and picks one
//! uniformly, so a full board reports [`BoardFullError`] instead of
//! spinning on random coordinates that can never land on a free cell.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::rng::GameRng;
use crate::error::BoardFullError;

/// Default grid side length.
pub const GRID_LEN: usize = 4;

/// The tile value that wins the game.
pub const WIN_TILE: u32 = 2048;

/// The value of a freshly spawned tile.
pub const SPAWN_VALUE: u32 = 2;

/// Outcome of a game derived from a single board snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Some cell holds the winning tile.
    Win,
    /// An empty cell or a mergeable adjacent pair remains.
    Ongoing,
    /// No win, no empty cell, no equal axis-adjacent pair.
    Lose,
}

/// An N×N grid of tiles, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Create an all-zero `size` × `size` board.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(size >= 2, "board side must be at least 2");
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Create a board with two randomly spawned starting tiles.
    #[must_use]
    pub fn new_game(size: usize, rng: &mut GameRng) -> Self {
        let mut board = Self::empty(size);
        // An empty board always has room for the two starting tiles.
        let _ = board.spawn_tile(rng);
        let _ = board.spawn_tile(rng);
        board
    }

    /// Build a board from row-major cells.
    ///
    /// Returns `None` unless `cells.len() == size * size`.
    #[must_use]
    pub fn from_cells(size: usize, cells: Vec<u32>) -> Option<Self> {
        if size < 2 || cells.len() != size * size {
            return None;
        }
        Some(Self { size, cells })
    }

    /// Build a board from fixed-size rows. Convenient in tests.
    #[must_use]
    pub fn from_rows<const N: usize>(rows: [[u32; N]; N]) -> Self {
        Self {
            size: N,
            cells: rows.iter().flatten().copied().collect(),
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// The value at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    /// Set the value at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row * self.size + col] = value;
    }

    /// One row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[u32] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// One row as a mutable slice.
    pub fn row_mut(&mut self, row: usize) -> &mut [u32] {
        &mut self.cells[row * self.size..(row + 1) * self.size]
    }

    /// The largest tile on the board.
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Place a spawn tile in a uniformly chosen empty cell.
    ///
    /// Returns the coordinates of the placed tile, or
    /// [`BoardFullError`] if no cell is empty.
    pub fn spawn_tile(&mut self, rng: &mut GameRng) -> Result<(usize, usize), BoardFullError> {
        let empty: SmallVec<[usize; GRID_LEN * GRID_LEN]> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, &value)| value == 0)
            .map(|(index, _)| index)
            .collect();

        let index = *rng.choose(&empty).ok_or(BoardFullError)?;
        self.cells[index] = SPAWN_VALUE;
        Ok((index / self.size, index % self.size))
    }

    /// Swap rows and columns. Involution: `b.transpose().transpose() == b`.
    #[must_use]
    pub fn transpose(&self) -> Board {
        let mut out = Board::empty(self.size);
        for i in 0..self.size {
            for j in 0..self.size {
                out.set(i, j, self.get(j, i));
            }
        }
        out
    }

    /// Mirror each row left-right. Involution: `b.reverse().reverse() == b`.
    #[must_use]
    pub fn reverse(&self) -> Board {
        let mut out = Board::empty(self.size);
        for i in 0..self.size {
            for j in 0..self.size {
                out.set(i, j, self.get(i, self.size - j - 1));
            }
        }
        out
    }

    /// Derive the game outcome from this snapshot alone.
    ///
    /// Precedence is strict: Win (any winning tile) beats everything,
    /// then any empty cell or any equal axis-adjacent pair keeps the
    /// game ongoing, otherwise the game is lost.
    #[must_use]
    pub fn game_state(&self) -> GameState {
        if self.cells.iter().any(|&value| value == WIN_TILE) {
            return GameState::Win;
        }
        if self.cells.iter().any(|&value| value == 0) {
            return GameState::Ongoing;
        }
        let n = self.size;
        for i in 0..n - 1 {
            for j in 0..n - 1 {
                if self.get(i, j) == self.get(i + 1, j) || self.get(i, j) == self.get(i, j + 1) {
                    return GameState::Ongoing;
                }
            }
        }
        // Last row horizontals and last column verticals.
        for k in 0..n - 1 {
            if self.get(n - 1, k) == self.get(n - 1, k + 1) {
                return GameState::Ongoing;
            }
            if self.get(k, n - 1) == self.get(k + 1, n - 1) {
                return GameState::Ongoing;
            }
        }
        GameState::Lose
    }
}
