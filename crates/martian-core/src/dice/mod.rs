//! Martian dice and the pool they are rolled from.
//!
//! Every die carries its current face and a locked flag. Locked dice have
//! been set aside (kept or captured) and are skipped by later rolls.

pub mod pool;

pub use pool::DicePool;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::creature::CreatureKind;

/// Number of dice in a Martian Dice pool.
pub const POOL_SIZE: usize = 13;

/// A single die: the face it shows and whether it has been set aside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    /// The face currently showing.
    pub face: CreatureKind,
    /// Set once the die is kept or captured; cleared when a round starts.
    pub locked: bool,
}

impl Die {
    /// Create an unlocked die showing `face`.
    pub fn new(face: CreatureKind) -> Self {
        Self {
            face,
            locked: false,
        }
    }

    /// Draw one face uniformly over the six sides of a die.
    pub fn roll_face(rng: &mut StdRng) -> CreatureKind {
        CreatureKind::FACES[rng.random_range(0..CreatureKind::FACES.len())]
    }

    /// Roll this die if it is unlocked. Locked dice keep their face.
    pub fn roll(&mut self, rng: &mut StdRng) {
        if !self.locked {
            self.face = Self::roll_face(rng);
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.locked {
            write!(f, "[{}]", self.face.symbol())
        } else {
            write!(f, " {} ", self.face.symbol())
        }
    }
}
