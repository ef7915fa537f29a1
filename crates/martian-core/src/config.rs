//! Configuration for a game session.

/// Score that wins the game unless configured otherwise.
pub const DEFAULT_TARGET_SCORE: u32 = 25;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Number of local players taking turns (at least 1).
    pub players: usize,
    /// Total score that ends the game.
    pub target_score: u32,
    /// RNG seed for reproducible rolls.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: 1,
            target_score: DEFAULT_TARGET_SCORE,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the number of players (at least 1).
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players.max(1);
        self
    }

    /// Set the winning score (at least 1).
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target.max(1);
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
