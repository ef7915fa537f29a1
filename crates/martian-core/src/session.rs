//! Game session: seat order, scores, and the per-turn state machine.
//!
//! `Game` drives one [`Round`] per turn. A turn starts with
//! [`Game::start_turn`], takes commands through [`Game::apply`] (or
//! [`Game::process`] for raw input) and finishes either when the player ends
//! it, when no keep is left, or when someone quits. Finishing a turn banks
//! its points; reaching the target score ends the game.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::config::GameConfig;
use crate::creature::CreatureKind;
use crate::dice::DicePool;
use crate::error::{MartianError, MartianResult};
use crate::round::{Round, RoundOutcome};

/// A player's running total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Points banked so far. Never decreases.
    pub score: u32,
}

/// What happened to the turn after a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnStep {
    /// The turn is still waiting for a command.
    Continue,
    /// The turn finished and its points were banked.
    TurnOver(TurnSummary),
    /// The player quit; the whole game is over with no winner.
    Quit,
}

/// Result of a finished turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSummary {
    /// Seat of the acting player (0-based).
    pub player: usize,
    /// How the round ended.
    pub outcome: RoundOutcome,
    /// Human dice abducted. Scoring counts the kind once, not each die.
    pub humans: u32,
    /// Cow dice abducted.
    pub cows: u32,
    /// Chicken dice abducted.
    pub chickens: u32,
    /// Points added to the player's total.
    pub points: u32,
    /// The player's total after this turn.
    pub total: u32,
    /// Whether this turn reached the target score.
    pub won: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    BetweenTurns,
    AwaitingCommand,
    Finished,
}

/// A Martian Dice game for any number of local players.
pub struct Game {
    config: GameConfig,
    players: Vec<PlayerState>,
    current: usize,
    round: Round,
    rng: StdRng,
    phase: Phase,
    turns_played: u32,
    winner: Option<usize>,
}

impl Game {
    /// Create a game. The first player is seated; no turn has started.
    pub fn new(config: GameConfig) -> Self {
        let config = GameConfig {
            players: config.players.max(1),
            ..config
        };
        Self {
            players: vec![PlayerState::default(); config.players],
            rng: StdRng::seed_from_u64(config.seed),
            config,
            current: 0,
            round: Round::with_pool(DicePool::new()),
            phase: Phase::BetweenTurns,
            turns_played: 0,
            winner: None,
        }
    }

    /// The game configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Every player's state in seat order.
    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    /// Seat of the player whose turn it is (0-based).
    pub fn current_player(&self) -> usize {
        self.current
    }

    /// The current (or most recent) round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Seat of the winner, once someone has reached the target score.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Whether the game has ended, by a win or a quit.
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Whether a turn is waiting for a command.
    pub fn turn_in_progress(&self) -> bool {
        self.phase == Phase::AwaitingCommand
    }

    /// Number of turns finished so far.
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// Begin the current player's turn: fresh round, opening roll, tanks
    /// captured.
    ///
    /// If the opening roll leaves no legal keep the turn finishes at once.
    /// Calling this while a turn is already running does nothing.
    pub fn start_turn(&mut self) -> MartianResult<TurnStep> {
        match self.phase {
            Phase::Finished => return Err(MartianError::NoTurnInProgress),
            Phase::AwaitingCommand => return Ok(TurnStep::Continue),
            Phase::BetweenTurns => {}
        }
        self.round.start(&mut self.rng);
        self.phase = Phase::AwaitingCommand;
        Ok(self.continue_or_finish())
    }

    /// Parse raw input and apply it.
    pub fn process(&mut self, input: &str) -> MartianResult<TurnStep> {
        let command = Command::parse(input)?;
        self.apply(command)
    }

    /// Apply a command to the running turn.
    ///
    /// A failed keep leaves the turn untouched. A successful keep re-rolls
    /// the unlocked dice and captures any new tanks.
    pub fn apply(&mut self, command: Command) -> MartianResult<TurnStep> {
        if self.phase != Phase::AwaitingCommand {
            return Err(MartianError::NoTurnInProgress);
        }
        match command {
            Command::Keep(kind) => {
                self.round.keep(kind)?;
                self.round.roll(&mut self.rng);
                Ok(self.continue_or_finish())
            }
            Command::EndTurn => Ok(TurnStep::TurnOver(self.finish_turn())),
            Command::Quit => {
                self.phase = Phase::Finished;
                Ok(TurnStep::Quit)
            }
        }
    }

    /// Pass play to the next seat, wrapping around.
    ///
    /// Only moves between turns; returns the seat that is now up.
    pub fn next_player(&mut self) -> usize {
        if self.phase == Phase::BetweenTurns {
            self.current = (self.current + 1) % self.players.len();
        }
        self.current
    }

    fn continue_or_finish(&mut self) -> TurnStep {
        if self.round.can_make_move() {
            TurnStep::Continue
        } else {
            TurnStep::TurnOver(self.finish_turn())
        }
    }

    fn finish_turn(&mut self) -> TurnSummary {
        let outcome = self.round.outcome();
        let points = outcome.points();
        let player = &mut self.players[self.current];
        player.score += points;
        let total = player.score;
        let won = total >= self.config.target_score;

        self.turns_played += 1;
        if won {
            self.winner = Some(self.current);
            self.phase = Phase::Finished;
        } else {
            self.phase = Phase::BetweenTurns;
        }

        TurnSummary {
            player: self.current,
            outcome,
            humans: self.round.kept(CreatureKind::Human),
            cows: self.round.kept(CreatureKind::Cow),
            chickens: self.round.kept(CreatureKind::Chicken),
            points,
            total,
            won,
        }
    }
}
