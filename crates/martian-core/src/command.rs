//! The single-letter command vocabulary a player types at the prompt.

use std::str::FromStr;

use crate::creature::CreatureKind;
use crate::error::{MartianError, MartianResult};

/// A player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Keep (abduct) every unlocked die of a kind, then re-roll.
    Keep(CreatureKind),
    /// Stop rolling and bank the round.
    EndTurn,
    /// Abandon the whole game.
    Quit,
}

impl Command {
    /// Parse a command token, ignoring case and surrounding whitespace.
    ///
    /// `C` cow, `I` chicken, `H` human, `D` death ray, `E` end turn,
    /// `Q` quit. Tanks are never kept by command.
    pub fn parse(input: &str) -> MartianResult<Self> {
        let token = input.trim().to_uppercase();
        match token.as_str() {
            "C" => Ok(Self::Keep(CreatureKind::Cow)),
            "I" => Ok(Self::Keep(CreatureKind::Chicken)),
            "H" => Ok(Self::Keep(CreatureKind::Human)),
            "D" => Ok(Self::Keep(CreatureKind::DeathRay)),
            "E" => Ok(Self::EndTurn),
            "Q" => Ok(Self::Quit),
            _ => Err(MartianError::BadCommand(input.trim().to_string())),
        }
    }

    /// The token that produces this command.
    pub fn token(self) -> char {
        match self {
            Self::Keep(kind) => kind.symbol(),
            Self::EndTurn => 'E',
            Self::Quit => 'Q',
        }
    }
}

impl FromStr for Command {
    type Err = MartianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
