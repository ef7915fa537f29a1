//! The round controller.
//!
//! A round is one player's turn. It starts by unlocking and rolling every
//! die, then captures all tanks. The player repeatedly keeps one kind of
//! creature (or death rays), which locks those dice and re-rolls the rest,
//! until no keep is legal or they stop. Tanks are captured again after
//! every roll.
//!
//! Humans, cows and chickens can each be kept once per round. Death rays
//! can be kept after any roll that shows at least one unlocked death ray.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::creature::CreatureKind;
use crate::dice::DicePool;
use crate::error::{MartianError, MartianResult};

/// Points awarded for keeping every kind of earthling in one round.
pub const FULL_SET_BONUS: u32 = 3;

/// Per-kind record of what a round has kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeptTally {
    /// Dice of this kind locked by keeps or tank captures. Not capped:
    /// one keep of three humans makes this 3.
    pub count: u32,
    /// Whether a keep of this kind has locked at least one die this round.
    /// For humans, cows and chickens this is the once-per-round tally
    /// (0 or 1) that scoring counts.
    pub kept: bool,
}

/// Base points and bonus for a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// One point per earthling kind kept.
    pub score: u32,
    /// [`FULL_SET_BONUS`] if humans, cows and chickens were all kept.
    pub bonus: u32,
}

impl Score {
    /// Score plus bonus.
    pub fn total(&self) -> u32 {
        self.score + self.bonus
    }
}

/// How a finished round turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// More tanks than death rays were set aside; the round scores nothing.
    Defeated {
        /// Tanks captured.
        tanks: u32,
        /// Death rays kept.
        deathrays: u32,
    },
    /// The death rays held; the earthlings count.
    Scored(Score),
}

impl RoundOutcome {
    /// Points the acting player earns from this outcome.
    pub fn points(&self) -> u32 {
        match self {
            Self::Defeated { .. } => 0,
            Self::Scored(score) => score.total(),
        }
    }
}

/// State of a single round: the dice pool plus what has been kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pool: DicePool,
    tallies: BTreeMap<CreatureKind, KeptTally>,
}

impl Round {
    /// Start a round: fresh tallies, every die rolled, tanks captured.
    pub fn new(rng: &mut StdRng) -> Self {
        let mut round = Self::with_pool(DicePool::new());
        round.start(rng);
        round
    }

    /// Wrap an already-rolled pool with empty tallies.
    ///
    /// Nothing is rolled or captured, so the pool is exactly what the caller
    /// set up.
    pub fn with_pool(pool: DicePool) -> Self {
        let tallies = CreatureKind::ALL
            .iter()
            .map(|&kind| (kind, KeptTally::default()))
            .collect();
        Self { pool, tallies }
    }

    /// Unlock every die and zero every tally.
    pub fn reset(&mut self) {
        self.pool.reset();
        for tally in self.tallies.values_mut() {
            *tally = KeptTally::default();
        }
    }

    /// Reset, then make the opening roll.
    ///
    /// Returns the number of tanks captured by the opening roll.
    pub fn start(&mut self, rng: &mut StdRng) -> u32 {
        self.reset();
        self.roll(rng)
    }

    /// Roll every unlocked die and capture the tanks that came up.
    ///
    /// Returns the number of tanks captured by this roll.
    pub fn roll(&mut self, rng: &mut StdRng) -> u32 {
        self.pool.roll_unlocked(rng);
        self.capture_tanks()
    }

    /// Lock all unlocked tanks and add them to the tank tally.
    pub fn capture_tanks(&mut self) -> u32 {
        self.lock_and_tally(CreatureKind::Tank)
    }

    /// The dice pool.
    pub fn pool(&self) -> &DicePool {
        &self.pool
    }

    /// The tally for `kind`.
    pub fn tally(&self, kind: CreatureKind) -> KeptTally {
        self.tallies.get(&kind).copied().unwrap_or_default()
    }

    /// Dice of `kind` set aside this round. Counts dice, not keeps; see
    /// [`KeptTally::kept`] for the capped per-kind flag.
    pub fn kept(&self, kind: CreatureKind) -> u32 {
        self.tally(kind).count
    }

    /// Tanks captured this round.
    pub fn kept_tanks(&self) -> u32 {
        self.kept(CreatureKind::Tank)
    }

    /// Death rays kept this round.
    pub fn kept_deathrays(&self) -> u32 {
        self.kept(CreatureKind::DeathRay)
    }

    /// Whether `kind` can be kept right now.
    ///
    /// Tanks always can (the keep is a no-op without unlocked tanks). Death
    /// rays need one unlocked death ray. Earthlings additionally need not to
    /// have been kept yet this round.
    pub fn can_keep(&self, kind: CreatureKind) -> bool {
        match kind {
            CreatureKind::Tank => true,
            CreatureKind::DeathRay => self.pool.count_of_kind(kind, true) > 0,
            _ => self.pool.count_of_kind(kind, true) > 0 && !self.tally(kind).kept,
        }
    }

    /// Keep every unlocked die of `kind`.
    ///
    /// Returns how many dice were locked. Fails with
    /// [`MartianError::CannotKeep`] and changes nothing when `kind` cannot
    /// be kept. Does not re-roll; see [`Round::roll`].
    pub fn keep(&mut self, kind: CreatureKind) -> MartianResult<u32> {
        if !self.can_keep(kind) {
            return Err(MartianError::CannotKeep(kind));
        }
        Ok(self.lock_and_tally(kind))
    }

    fn lock_and_tally(&mut self, kind: CreatureKind) -> u32 {
        let locked = self.pool.lock_all_of_kind(kind);
        let tally = self.tallies.entry(kind).or_default();
        tally.count += locked;
        tally.kept |= locked > 0;
        locked
    }

    /// Whether the player has any keep left besides tanks.
    pub fn can_make_move(&self) -> bool {
        [
            CreatureKind::Cow,
            CreatureKind::Chicken,
            CreatureKind::Human,
            CreatureKind::DeathRay,
        ]
        .into_iter()
        .any(|kind| self.can_keep(kind))
    }

    /// Kinds the player may keep now, with their unlocked counts.
    ///
    /// Listed death rays first, then humans, cows, chickens.
    pub fn keepable(&self) -> Vec<(CreatureKind, u32)> {
        [
            CreatureKind::DeathRay,
            CreatureKind::Human,
            CreatureKind::Cow,
            CreatureKind::Chicken,
        ]
        .into_iter()
        .filter(|&kind| self.can_keep(kind))
        .map(|kind| (kind, self.pool.count_of_kind(kind, true)))
        .collect()
    }

    /// Score and bonus from the earthlings kept so far.
    ///
    /// Ignores tanks; see [`Round::outcome`] for the full result.
    pub fn compute_score(&self) -> Score {
        let kept_kinds = CreatureKind::EARTHLINGS
            .iter()
            .filter(|&&kind| self.tally(kind).kept)
            .count() as u32;
        let bonus = if kept_kinds == CreatureKind::EARTHLINGS.len() as u32 {
            FULL_SET_BONUS
        } else {
            0
        };
        Score {
            score: kept_kinds,
            bonus,
        }
    }

    /// Whether the captured tanks outnumber the kept death rays.
    pub fn is_defeated(&self) -> bool {
        self.kept_tanks() > self.kept_deathrays()
    }

    /// The round's result as things stand.
    pub fn outcome(&self) -> RoundOutcome {
        if self.is_defeated() {
            RoundOutcome::Defeated {
                tanks: self.kept_tanks(),
                deathrays: self.kept_deathrays(),
            }
        } else {
            RoundOutcome::Scored(self.compute_score())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::POOL_SIZE;
    use CreatureKind::*;
    use rand::SeedableRng;

    fn round_of(faces: [CreatureKind; POOL_SIZE]) -> Round {
        Round::with_pool(DicePool::from_faces(faces))
    }

    fn mixed() -> Round {
        round_of([
            Human, Cow, Chicken, DeathRay, DeathRay, Human, Cow, Cow, Chicken, DeathRay, Tank,
            Human, Chicken,
        ])
    }

    #[test]
    fn fresh_round_has_captured_its_tanks() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let round = Round::new(&mut rng);
            let tanks = round.pool().count_of_kind(Tank, false);
            assert_eq!(round.kept_tanks(), tanks);
            assert_eq!(round.pool().count_of_kind(Tank, true), 0);
            for kind in [DeathRay, Human, Cow, Chicken] {
                assert_eq!(round.kept(kind), 0);
                assert_eq!(round.pool().count_of_kind(kind, true), round.pool().count_of_kind(kind, false));
            }
        }
    }

    #[test]
    fn all_death_rays_scenario() {
        let mut round = round_of([DeathRay; POOL_SIZE]);
        assert!(round.can_keep(DeathRay));
        assert_eq!(round.keep(DeathRay), Ok(13));
        assert_eq!(round.kept_deathrays(), 13);
        assert!(round.pool().dice().iter().all(|d| d.locked));
        assert!(!round.can_keep(DeathRay));
        assert!(!round.can_make_move());
        assert_eq!(round.keep(DeathRay), Err(MartianError::CannotKeep(DeathRay)));
    }

    fn show_unlocked(round: &mut Round, kind: CreatureKind, count: usize) {
        for die in round.pool.dice_mut().iter_mut().filter(|d| !d.locked).take(count) {
            die.face = kind;
        }
    }

    #[test]
    fn earthlings_are_kept_once_per_round() {
        let mut round = mixed();
        assert_eq!(round.keep(Human), Ok(3));
        assert!(round.tally(Human).kept);

        // A later roll turns up more humans.
        show_unlocked(&mut round, Human, 2);
        assert_eq!(round.pool().count_of_kind(Human, true), 2);
        assert!(!round.can_keep(Human));

        let before = round.clone();
        assert_eq!(round.keep(Human), Err(MartianError::CannotKeep(Human)));
        assert_eq!(round.pool(), before.pool());
        assert_eq!(round.tally(Human), before.tally(Human));
        assert_eq!(round.kept(Human), 3);
    }

    #[test]
    fn death_rays_can_be_kept_repeatedly() {
        let mut round = mixed();
        assert_eq!(round.keep(DeathRay), Ok(3));
        assert!(!round.can_keep(DeathRay));

        show_unlocked(&mut round, DeathRay, 2);
        assert!(round.can_keep(DeathRay));
        assert_eq!(round.keep(DeathRay), Ok(2));
        assert_eq!(round.kept_deathrays(), 5);
    }

    #[test]
    fn cannot_keep_missing_kind() {
        let mut round = round_of([DeathRay; POOL_SIZE]);
        for kind in CreatureKind::EARTHLINGS {
            assert!(!round.can_keep(kind));
            assert_eq!(round.keep(kind), Err(MartianError::CannotKeep(kind)));
        }
        assert_eq!(round.pool().count_of_kind(DeathRay, true), 13);
    }

    #[test]
    fn tanks_are_always_keepable() {
        let mut round = round_of([DeathRay; POOL_SIZE]);
        assert!(round.can_keep(Tank));
        assert_eq!(round.keep(Tank), Ok(0));
        assert_eq!(round.kept_tanks(), 0);
        assert!(!round.tally(Tank).kept);
    }

    #[test]
    fn tanks_alone_leave_no_move() {
        let mut round = round_of([Tank; POOL_SIZE]);
        assert_eq!(round.capture_tanks(), 13);
        assert!(!round.can_make_move());
        assert!(round.keepable().is_empty());
    }

    #[test]
    fn keepable_lists_prompt_order() {
        let mut round = mixed();
        assert_eq!(
            round.keepable(),
            vec![(DeathRay, 3), (Human, 3), (Cow, 3), (Chicken, 3)]
        );
        round.keep(Cow).unwrap();
        assert_eq!(round.keepable(), vec![(DeathRay, 3), (Human, 3), (Chicken, 3)]);
    }

    #[test]
    fn full_set_scores_with_bonus() {
        let mut round = round_of([
            Human, Cow, Chicken, DeathRay, Tank, Tank, Tank, Tank, Tank, Tank, Tank, Tank, Tank,
        ]);
        round.reset();
        for kind in [Human, Cow, Chicken, DeathRay] {
            round.keep(kind).unwrap();
        }
        assert_eq!(round.kept_tanks(), 0);
        assert_eq!(round.compute_score(), Score { score: 3, bonus: 3 });
        assert_eq!(round.outcome(), RoundOutcome::Scored(Score { score: 3, bonus: 3 }));
        assert_eq!(round.outcome().points(), 6);
    }

    #[test]
    fn score_counts_kinds_not_dice() {
        let mut round = mixed();
        assert_eq!(round.keep(Human), Ok(3));
        assert_eq!(round.kept(Human), 3);
        assert!(round.tally(Human).kept);
        assert_eq!(round.compute_score(), Score { score: 1, bonus: 0 });
    }

    #[test]
    fn partial_set_has_no_bonus() {
        let mut round = mixed();
        round.keep(Human).unwrap();
        round.keep(Chicken).unwrap();
        assert_eq!(round.compute_score(), Score { score: 2, bonus: 0 });
    }

    #[test]
    fn tanks_outnumbering_death_rays_defeat_the_round() {
        let mut round = round_of([
            Tank, Tank, DeathRay, Human, Cow, Chicken, Human, Cow, Chicken, Human, Cow, Chicken,
            Human,
        ]);
        assert_eq!(round.capture_tanks(), 2);
        for kind in [DeathRay, Human, Cow, Chicken] {
            round.keep(kind).unwrap();
        }
        assert_eq!(round.kept_tanks(), 2);
        assert_eq!(round.kept_deathrays(), 1);
        assert!(round.is_defeated());
        assert_eq!(round.outcome(), RoundOutcome::Defeated { tanks: 2, deathrays: 1 });
        assert_eq!(round.outcome().points(), 0);
        // compute_score alone still reports the earthlings.
        assert_eq!(round.compute_score().total(), 6);
    }

    #[test]
    fn equal_tanks_and_death_rays_hold() {
        let mut round = mixed();
        round.capture_tanks();
        round.keep(DeathRay).unwrap();
        round.keep(Cow).unwrap();
        assert!(!round.is_defeated());
        assert_eq!(round.outcome().points(), 1);
    }

    #[test]
    fn reset_clears_tallies_and_locks() {
        let mut round = mixed();
        round.keep(Human).unwrap();
        round.capture_tanks();
        round.reset();
        for kind in CreatureKind::ALL {
            assert_eq!(round.tally(kind), KeptTally::default());
        }
        assert!(round.pool().dice().iter().all(|d| !d.locked));
    }

    #[test]
    fn roll_recaptures_tanks() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut round = mixed();
        round.capture_tanks();
        for _ in 0..30 {
            round.roll(&mut rng);
            assert_eq!(round.pool().count_of_kind(Tank, true), 0);
            assert_eq!(round.kept_tanks(), round.pool().count_of_kind(Tank, false));
        }
    }
}
