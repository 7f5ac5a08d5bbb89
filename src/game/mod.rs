//! A playable, optionally recorded game session.

pub mod session;

pub use session::{GameSession, StepOutcome};
