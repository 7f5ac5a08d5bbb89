//! Core game types: the board, directions, and the spawn RNG.

pub mod board;
pub mod direction;
pub mod rng;

pub use board::{Board, GameState, GRID_LEN, SPAWN_VALUE, WIN_TILE};
pub use direction::Direction;
pub use rng::{GameRng, GameRngState};
