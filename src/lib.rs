//! # rust-2048
//!
//! The 2048 grid-merge puzzle engine, with a move-history recorder and
//! replayer.
//!
//! ## Design Principles
//!
//! 1. **Pure logic core**: move application and terminal-state
//!    detection are deterministic functions of a board snapshot; the
//!    only randomness is tile spawning, behind a seeded RNG.
//!
//! 2. **Explicit failure states**: spawning into a full board returns
//!    `BoardFullError` rather than retrying forever; reading past a
//!    log's end is an `Ok(None)` sentinel, not an error.
//!
//! 3. **Presentation-free**: no rendering, input handling, or replay
//!    pacing. Drivers (a UI, an RL trainer) own the loop and the clock.
//!
//! ## Architecture
//!
//! - **Moves by conjugation**: a move is defined once, for Left, as the
//!   per-row compress → merge → compress sequence; the other three
//!   directions transpose/reverse into Left's frame and back.
//!
//! - **Line-oriented history**: a recorded game is one text file of
//!   row-major snapshot lines plus a final line of move letters, read
//!   back by line index for random-access replay.
//!
//! ## Modules
//!
//! - `core`: board, directions, spawn RNG
//! - `engine`: directional move transforms, reward derivation
//! - `history`: history log sessions and the replay cursor
//! - `game`: driver glue tying board, RNG, and recorder together
//! - `error`: the crate's error taxonomy

pub mod core;
pub mod engine;
pub mod error;
pub mod game;
pub mod history;

// Re-export commonly used types
pub use crate::core::{
    Board, Direction, GameRng, GameRngState, GameState, GRID_LEN, SPAWN_VALUE, WIN_TILE,
};

pub use crate::engine::{
    apply_move, reward_for, MoveOutcome, REWARD_CONTINUE, REWARD_LOSE, REWARD_REJECTED, REWARD_WIN,
};

pub use crate::error::{BoardFullError, HistoryError};

pub use crate::game::{GameSession, StepOutcome};

pub use crate::history::{list_logs, HistorySession, Mode, Replay};
