//! The fixed pool of thirteen dice shared by every round.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::{Die, POOL_SIZE};
use crate::creature::CreatureKind;

/// Thirteen Martian dice. The pool never grows or shrinks; only the faces
/// and locked flags of its dice change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePool {
    dice: [Die; POOL_SIZE],
}

impl Default for DicePool {
    fn default() -> Self {
        Self::new()
    }
}

impl DicePool {
    /// Create a pool of unlocked dice. Faces are meaningless until rolled.
    pub fn new() -> Self {
        Self {
            dice: [Die::new(CreatureKind::Tank); POOL_SIZE],
        }
    }

    /// Create a pool of unlocked dice showing the given faces.
    pub fn from_faces(faces: [CreatureKind; POOL_SIZE]) -> Self {
        Self {
            dice: faces.map(Die::new),
        }
    }

    /// The dice in pool order.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    #[cfg(test)]
    pub(crate) fn dice_mut(&mut self) -> &mut [Die] {
        &mut self.dice
    }

    /// Number of dice in the pool (always [`POOL_SIZE`]).
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Always false; a pool holds thirteen dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Unlock every die.
    pub fn reset(&mut self) {
        for die in &mut self.dice {
            die.locked = false;
        }
    }

    /// Give every unlocked die a fresh independent face.
    pub fn roll_unlocked(&mut self, rng: &mut StdRng) {
        for die in &mut self.dice {
            die.roll(rng);
        }
    }

    /// Lock every die showing `kind`, whatever its previous state.
    ///
    /// Returns how many dice went from unlocked to locked.
    pub fn lock_all_of_kind(&mut self, kind: CreatureKind) -> u32 {
        let mut newly_locked = 0;
        for die in self.dice.iter_mut().filter(|d| d.face == kind) {
            if !die.locked {
                newly_locked += 1;
            }
            die.locked = true;
        }
        newly_locked
    }

    /// Count dice showing `kind`, optionally only those still unlocked.
    pub fn count_of_kind(&self, kind: CreatureKind, only_unlocked: bool) -> u32 {
        self.dice
            .iter()
            .filter(|d| d.face == kind && (!only_unlocked || !d.locked))
            .count() as u32
    }

    /// Dice sorted for display: locked before unlocked, then by kind.
    pub fn ordered_for_display(&self) -> Vec<Die> {
        let mut dice = self.dice.to_vec();
        dice.sort_by_key(|d| (!d.locked, d.face));
        dice
    }
}

/// One line per group of dice sharing a face and lock state, in display
/// order. Locked dice are bracketed.
impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ordered = self.ordered_for_display();
        let lines: Vec<String> = ordered
            .chunk_by(|a, b| a.face == b.face && a.locked == b.locked)
            .map(|group| {
                let cells: Vec<String> = group.iter().map(Die::to_string).collect();
                cells.join(" ").trim_end().to_string()
            })
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CreatureKind::*;
    use rand::SeedableRng;

    fn mixed_faces() -> [CreatureKind; POOL_SIZE] {
        [
            Cow, Tank, DeathRay, Human, Chicken, DeathRay, Tank, Cow, DeathRay, Human, Cow,
            Chicken, DeathRay,
        ]
    }

    #[test]
    fn new_pool_is_unlocked() {
        let pool = DicePool::new();
        assert_eq!(pool.len(), POOL_SIZE);
        assert!(!pool.is_empty());
        assert!(pool.dice().iter().all(|d| !d.locked));
    }

    #[test]
    fn count_of_kind() {
        let mut pool = DicePool::from_faces(mixed_faces());
        assert_eq!(pool.count_of_kind(DeathRay, false), 4);
        assert_eq!(pool.count_of_kind(Cow, false), 3);
        assert_eq!(pool.count_of_kind(Tank, false), 2);

        pool.lock_all_of_kind(Cow);
        assert_eq!(pool.count_of_kind(Cow, false), 3);
        assert_eq!(pool.count_of_kind(Cow, true), 0);
    }

    #[test]
    fn lock_reports_only_newly_locked() {
        let mut pool = DicePool::from_faces(mixed_faces());
        assert_eq!(pool.lock_all_of_kind(Tank), 2);
        assert_eq!(pool.lock_all_of_kind(Tank), 0);
        assert!(pool.dice().iter().filter(|d| d.face == Tank).all(|d| d.locked));
    }

    #[test]
    fn reset_unlocks_everything() {
        let mut pool = DicePool::from_faces(mixed_faces());
        for kind in CreatureKind::ALL {
            pool.lock_all_of_kind(kind);
        }
        pool.reset();
        assert!(pool.dice().iter().all(|d| !d.locked));
    }

    #[test]
    fn roll_leaves_locked_faces_alone() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = DicePool::from_faces(mixed_faces());
        pool.lock_all_of_kind(Human);
        pool.lock_all_of_kind(Tank);
        let before = pool.clone();

        for _ in 0..20 {
            pool.roll_unlocked(&mut rng);
            for (old, new) in before.dice().iter().zip(pool.dice()) {
                if old.locked {
                    assert_eq!(old, new);
                }
            }
        }
    }

    #[test]
    fn roll_is_deterministic_with_seed() {
        let mut a = DicePool::new();
        let mut b = DicePool::new();
        a.roll_unlocked(&mut StdRng::seed_from_u64(99));
        b.roll_unlocked(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn display_order_puts_locked_first() {
        let mut pool = DicePool::from_faces(mixed_faces());
        pool.lock_all_of_kind(Human);
        let ordered = pool.ordered_for_display();
        assert_eq!(ordered.len(), POOL_SIZE);
        assert!(ordered[0].locked && ordered[1].locked);
        assert_eq!(ordered[0].face, Human);
        let faces: Vec<_> = ordered[2..].iter().map(|d| d.face).collect();
        let mut sorted = faces.clone();
        sorted.sort();
        assert_eq!(faces, sorted);
        assert!(ordered[2..].iter().all(|d| !d.locked));
    }

    #[test]
    fn display_groups_by_kind() {
        let mut pool = DicePool::from_faces(mixed_faces());
        pool.lock_all_of_kind(Tank);
        pool.lock_all_of_kind(Human);
        insta::assert_snapshot!(pool.to_string(), @r"
        [T] [T]
        [H] [H]
         D   D   D   D
         C   C   C
         I   I
        ");
    }

    #[test]
    fn round_trip_serde() {
        let mut pool = DicePool::from_faces(mixed_faces());
        pool.lock_all_of_kind(DeathRay);
        let json = serde_json::to_string(&pool).unwrap();
        let back: DicePool = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pool);
    }
}
