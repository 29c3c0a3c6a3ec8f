//! Session configuration, validation, and error types.
//!
//! [`SessionConfig`] is the construction input for a
//! [`GameSession`](crate::GameSession). Its [`Default`] is the classic
//! 10x10 layout. [`validate()`](SessionConfig::validate) checks every
//! structural invariant before a session is built.

use std::error::Error;
use std::fmt;

use cellchase_automaton::{Rule, RuleError};
use cellchase_core::{BoardError, BoardState, Position};
use cellchase_planner::DEFAULT_HORIZON;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deepest lookahead a session accepts. Each extra level multiplies the
/// worst-case planning work by four.
pub const MAX_HORIZON: u32 = 8;

/// Living cells of the classic starting board.
pub const CLASSIC_INITIAL_ALIVE: [Position; 9] = [
    Position::new(2, 7),
    Position::new(3, 3),
    Position::new(3, 6),
    Position::new(4, 2),
    Position::new(4, 3),
    Position::new(4, 7),
    Position::new(5, 3),
    Position::new(5, 6),
    Position::new(6, 7),
];

// ── CheeseConfig ───────────────────────────────────────────────────

/// Where the first cheese hides and when a hidden cheese becomes visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheeseConfig {
    /// Cell of the first cheese. `None` draws it from the session RNG.
    pub start: Option<Position>,
    /// Completed-turn count at which the first cheese always appears. Default: 2.
    pub first_spawn_turn: u64,
    /// Per-turn probability that a hidden cheese appears. Default: 0.2.
    pub spawn_chance: f64,
}

impl Default for CheeseConfig {
    fn default() -> Self {
        Self {
            start: None,
            first_spawn_turn: 2,
            spawn_chance: 0.2,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`SessionConfig`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Board dimensions or initial cells are invalid.
    Board(BoardError),
    /// A rule could not be built.
    Rule(RuleError),
    /// A configured position lies outside the board.
    PositionOutOfBounds {
        /// Which setting holds the position.
        name: &'static str,
        /// The offending position.
        position: Position,
    },
    /// Two actors would start on the same cell.
    OverlappingStart {
        /// First setting.
        first: &'static str,
        /// Second setting.
        second: &'static str,
    },
    /// `horizon` exceeds [`MAX_HORIZON`].
    HorizonTooDeep {
        /// The configured horizon.
        horizon: u32,
        /// The maximum allowed.
        max: u32,
    },
    /// `spawn_chance` is NaN, infinite, or outside `[0, 1]`.
    InvalidSpawnChance {
        /// The invalid value.
        value: f64,
    },
    /// Random layout density is NaN, infinite, or outside `[0, 1]`.
    InvalidDensity {
        /// The invalid value.
        value: f64,
    },
    /// `lives` is zero.
    NoLives,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(e) => write!(f, "board: {e}"),
            Self::Rule(e) => write!(f, "rule: {e}"),
            Self::PositionOutOfBounds { name, position } => {
                write!(f, "{name} {position} is outside the board")
            }
            Self::OverlappingStart { first, second } => {
                write!(f, "{first} and {second} start on the same cell")
            }
            Self::HorizonTooDeep { horizon, max } => {
                write!(f, "horizon {horizon} exceeds maximum {max}")
            }
            Self::InvalidSpawnChance { value } => {
                write!(f, "spawn_chance must be in [0.0, 1.0], got {value}")
            }
            Self::InvalidDensity { value } => {
                write!(f, "density must be in [0.0, 1.0], got {value}")
            }
            Self::NoLives => write!(f, "lives must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            Self::Rule(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for ConfigError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

impl From<RuleError> for ConfigError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}

fn is_probability(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

// ── SessionConfig ──────────────────────────────────────────────────

/// Complete configuration for a game session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    /// Board rows. Default: 10.
    pub rows: u32,
    /// Board columns. Default: 10.
    pub cols: u32,
    /// Cells alive on the starting board. Duplicates are harmless.
    pub initial_alive: Vec<Position>,
    /// Where the player starts. Default: (0, 0).
    pub player_start: Position,
    /// Where the chasing actor starts. Default: (8, 8).
    pub actor_start: Position,
    /// The exit cell. Default: (9, 9).
    pub exit: Position,
    /// Planner lookahead. Default: 5. Maximum: [`MAX_HORIZON`].
    pub horizon: u32,
    /// Automaton rule. Default: [`Rule::CHASE`].
    pub rule: Rule,
    /// Lives before stepping on living cells ends the game. Default: 1.
    pub lives: u32,
    /// Cheese spawning.
    pub cheese: CheeseConfig,
    /// Seed for cheese placement and spawning.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            initial_alive: CLASSIC_INITIAL_ALIVE.to_vec(),
            player_start: Position::new(0, 0),
            actor_start: Position::new(8, 8),
            exit: Position::new(9, 9),
            horizon: DEFAULT_HORIZON,
            rule: Rule::CHASE,
            lives: 1,
            cheese: CheeseConfig::default(),
            seed: 0,
        }
    }
}

impl SessionConfig {
    /// A `rows x cols` layout with cells alive at random.
    ///
    /// The player starts at the top-left corner, the exit is the
    /// bottom-right corner and the actor starts diagonally inside it.
    /// Each other cell is alive with probability `density`, drawn from a
    /// ChaCha8 stream seeded with `seed`. The same seed also drives the
    /// session's cheese.
    pub fn random_layout(rows: u32, cols: u32, density: f64, seed: u64) -> Result<Self, ConfigError> {
        if !is_probability(density) {
            return Err(ConfigError::InvalidDensity { value: density });
        }
        let empty = BoardState::new(rows, cols)?;

        let player_start = Position::new(0, 0);
        let exit = Position::new(rows as i32 - 1, cols as i32 - 1);
        let actor_start = Position::new((rows as i32 - 2).max(0), (cols as i32 - 2).max(0));
        let reserved = [player_start, actor_start, exit];

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let initial_alive = (0..empty.cell_count())
            .map(|i| empty.position_of(i))
            .filter(|p| !reserved.contains(p))
            .filter(|_| rng.random_bool(density))
            .collect();

        let config = Self {
            rows,
            cols,
            initial_alive,
            player_start,
            actor_start,
            exit,
            seed,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the rule with one built from neighbour counts.
    pub fn with_rule_counts(mut self, birth: &[u8], survival: &[u8]) -> Result<Self, ConfigError> {
        self.rule = Rule::from_counts(birth, survival)?;
        Ok(self)
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Board dimensions.
        let board = BoardState::new(self.rows, self.cols)?;
        // 2. Every configured position is on the board.
        if let Some(&position) = self.initial_alive.iter().find(|p| !board.contains(**p)) {
            return Err(ConfigError::PositionOutOfBounds {
                name: "initial_alive",
                position,
            });
        }
        let fixed = [
            ("player_start", Some(self.player_start)),
            ("actor_start", Some(self.actor_start)),
            ("exit", Some(self.exit)),
            ("cheese.start", self.cheese.start),
        ];
        for (name, position) in fixed
            .into_iter()
            .filter_map(|(name, p)| p.map(|p| (name, p)))
        {
            if !board.contains(position) {
                return Err(ConfigError::PositionOutOfBounds { name, position });
            }
        }
        // 3. Player and actor start apart.
        if self.player_start == self.actor_start {
            return Err(ConfigError::OverlappingStart {
                first: "player_start",
                second: "actor_start",
            });
        }
        // 4. Planner horizon.
        if self.horizon > MAX_HORIZON {
            return Err(ConfigError::HorizonTooDeep {
                horizon: self.horizon,
                max: MAX_HORIZON,
            });
        }
        // 5. Cheese.
        if !is_probability(self.cheese.spawn_chance) {
            return Err(ConfigError::InvalidSpawnChance {
                value: self.cheese.spawn_chance,
            });
        }
        // 6. Lives.
        if self.lives == 0 {
            return Err(ConfigError::NoLives);
        }
        Ok(())
    }

    /// The starting board.
    pub fn initial_board(&self) -> Result<BoardState, ConfigError> {
        Ok(BoardState::with_alive(self.rows, self.cols, &self.initial_alive)?)
    }
}
