//! Core engine for Martian Dice.
//!
//! Martian Dice is a push-your-luck game: each turn a player rolls thirteen
//! dice, captures every tank the earthlings field, and chooses one kind of
//! creature (or death rays) to keep before re-rolling the rest. The turn
//! scores only if the kept death rays hold off the captured tanks.
//!
//! This crate owns the [`DicePool`], the per-turn [`Round`] controller, the
//! [`Command`] vocabulary, and a [`Game`] session that drives turns for any
//! number of local players. It never touches the terminal; a frontend feeds
//! it commands and renders what it returns.

/// Player commands and their single-letter tokens.
pub mod command;
/// Game session configuration.
pub mod config;
/// The five creature kinds shown on a Martian die.
pub mod creature;
/// Dice and the fixed-size dice pool.
pub mod dice;
/// Error types used throughout the crate.
pub mod error;
/// The round controller: keep rules, tallies, and scoring.
pub mod round;
/// The game session that runs turns for every player.
pub mod session;

/// Re-export the command vocabulary.
pub use command::Command;
/// Re-export configuration.
pub use config::GameConfig;
/// Re-export creature kinds.
pub use creature::CreatureKind;
/// Re-export dice types.
pub use dice::{DicePool, Die, POOL_SIZE};
/// Re-export error types.
pub use error::{MartianError, MartianResult};
/// Re-export round controller types.
pub use round::{KeptTally, Round, RoundOutcome, Score};
/// Re-export session types.
pub use session::{Game, PlayerState, TurnStep, TurnSummary};
