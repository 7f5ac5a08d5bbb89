//! Driver glue: one playable game, optionally recorded.
//!
//! Ties a board, the spawn RNG, and an optional write-mode history
//! session into the canonical loop: apply the move, spawn on change,
//! record, derive state and reward.

use std::path::Path;

use crate::core::board::{Board, GameState, GRID_LEN};
use crate::core::direction::Direction;
use crate::core::rng::GameRng;
use crate::engine::moves::apply_move;
use crate::engine::reward::reward_for;
use crate::error::HistoryError;
use crate::history::session::HistorySession;

/// What one call to [`GameSession::step`] produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether the move changed the board.
    pub changed: bool,
    /// State of the board after the move (and spawn, if any).
    pub state: GameState,
    /// Reward for the move, for trainer consumers.
    pub reward: i32,
    /// Whether the game ended on this step.
    pub done: bool,
}

/// One game in progress.
pub struct GameSession {
    board: Board,
    rng: GameRng,
    recorder: Option<HistorySession>,
}

impl GameSession {
    /// Start a fresh unrecorded game with a deterministic seed.
    #[must_use]
    pub fn new(seed: u64) -> GameSession {
        let mut rng = GameRng::new(seed);
        let board = Board::new_game(GRID_LEN, &mut rng);
        GameSession {
            board,
            rng,
            recorder: None,
        }
    }

    /// Start a recorded game; the initial board becomes snapshot 0.
    pub fn with_recorder(seed: u64, path: impl AsRef<Path>) -> Result<GameSession, HistoryError> {
        let mut session = GameSession::new(seed);
        let mut recorder = HistorySession::open_write(path)?;
        recorder.record_snapshot(&session.board)?;
        session.recorder = Some(recorder);
        Ok(session)
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// State derived from the current board.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.board.game_state()
    }

    /// Apply one directional move.
    ///
    /// If the board changed, a tile spawns, and the resulting board and
    /// move letter go to the recorder. An unchanged board spawns and
    /// records nothing.
    pub fn step(&mut self, direction: Direction) -> Result<StepOutcome, HistoryError> {
        let outcome = apply_move(&self.board, direction);
        let changed = outcome.changed;

        if changed {
            self.board = outcome.board;
            // A changed move always leaves or creates an empty cell, so
            // a full board here is unreachable; the terminal state is
            // detected from the board itself either way.
            let _ = self.board.spawn_tile(&mut self.rng);
            if let Some(recorder) = &mut self.recorder {
                recorder.record_snapshot(&self.board)?;
                recorder.record_move(direction)?;
            }
        }

        let state = self.board.game_state();
        Ok(StepOutcome {
            changed,
            state,
            reward: reward_for(changed, state),
            done: changed && state != GameState::Ongoing,
        })
    }

    /// Close the recorder, making the move line durable.
    ///
    /// A session without a recorder finishes trivially.
    pub fn finish(&mut self) -> Result<(), HistoryError> {
        match self.recorder.take() {
            Some(recorder) => recorder.close(),
            None => Ok(()),
        }
    }
}
