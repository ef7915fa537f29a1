use crate::creature::CreatureKind;

/// Alias for `Result<T, MartianError>`.
pub type MartianResult<T> = Result<T, MartianError>;

/// Errors reported while playing a round.
///
/// All of them are recoverable: the round is left untouched and the player
/// can simply issue another command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MartianError {
    /// The creature kind cannot be kept right now: no unlocked die shows it,
    /// or it was already kept this round.
    #[error("can't keep/abduct {0} right now")]
    CannotKeep(CreatureKind),

    /// The input did not match any command token.
    #[error("bad command: \"{0}\"")]
    BadCommand(String),

    /// A command arrived while no turn was waiting for one.
    #[error("no turn in progress")]
    NoTurnInProgress,
}
