//! Creature kinds printed on the faces of a Martian die.
//!
//! A die has six faces: one tank, two death rays, one human, one cow and
//! one chicken. Kinds are ordered by identifier, which is also the order
//! used when dice are grouped for display.

use serde::{Deserialize, Serialize};

/// What a die face shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CreatureKind {
    /// An earthling tank. Captured automatically after every roll.
    Tank,
    /// A Martian death ray. Needed to hold off the tanks.
    DeathRay,
    /// A human, worth one point when abducted.
    Human,
    /// A cow, worth one point when abducted.
    Cow,
    /// A chicken, worth one point when abducted.
    Chicken,
}

impl CreatureKind {
    /// Every kind, in identifier order.
    pub const ALL: [CreatureKind; 5] = [
        Self::Tank,
        Self::DeathRay,
        Self::Human,
        Self::Cow,
        Self::Chicken,
    ];

    /// The six faces of a die. Death ray appears twice.
    pub const FACES: [CreatureKind; 6] = [
        Self::Tank,
        Self::DeathRay,
        Self::Human,
        Self::Cow,
        Self::Chicken,
        Self::DeathRay,
    ];

    /// The three kinds that score points. Each may be kept once per round.
    pub const EARTHLINGS: [CreatureKind; 3] = [Self::Human, Self::Cow, Self::Chicken];

    /// Map a six-sided face index (0-5) to a kind.
    ///
    /// Faces 0-4 follow identifier order and face 5 is the second death ray.
    /// Returns `None` for anything outside 0-5.
    pub fn from_face(face: u32) -> Option<Self> {
        usize::try_from(face)
            .ok()
            .and_then(|i| Self::FACES.get(i))
            .copied()
    }

    /// Single-letter abbreviation used on screen.
    ///
    /// Chicken is `I` so it does not clash with cow.
    pub fn symbol(self) -> char {
        match self {
            Self::Tank => 'T',
            Self::DeathRay => 'D',
            Self::Human => 'H',
            Self::Cow => 'C',
            Self::Chicken => 'I',
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tank => "tank",
            Self::DeathRay => "death ray",
            Self::Human => "human",
            Self::Cow => "cow",
            Self::Chicken => "chicken",
        }
    }

    /// Whether at most one keep per round is allowed for this kind.
    pub fn is_capped(self) -> bool {
        matches!(self, Self::Human | Self::Cow | Self::Chicken)
    }
}

impl std::fmt::Display for CreatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
