//! Rock Paper Scissors judging game.
//!
//! The computer throws a sign, the player throws a different sign, and the
//! user calls whether the player won. Correct calls on a player win score a
//! point, correct calls on a player loss score nothing, and every wrong call
//! costs a point. A game lasts [`TOTAL_ROUNDS`] rounds and then restarts.
//!
//! ## Modules
//!
//! - [`gameplay`] — signs, rounds, judgments and the session state machine
//! - [`gameroom`] — drives a session with any [`gameroom::Judge`]
//! - [`players`] — judges: [`players::Fish`], [`players::Oracle`], and the
//!   terminal-backed `Human` (requires `cli` feature)
pub mod gameplay;
pub mod gameroom;
pub mod players;

#[cfg(feature = "cli")]
pub mod cli;

pub use gameplay::*;
pub use gameroom::*;
pub use players::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Running score across a game. Unbounded, may go negative.
pub type Score = i32;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Rounds per game before the score and counter reset.
pub const TOTAL_ROUNDS: usize = 10;
/// Label shown for a correct call.
pub const CORRECT: &str = "Correct!";
/// Label shown for a wrong call.
pub const INCORRECT: &str = "Incorrect!";
