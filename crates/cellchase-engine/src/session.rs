//! Turn-driven game session.
//!
//! [`GameSession`] owns everything that lives for one game: the board,
//! the planner memory, the absolute turn counter, the player, the
//! chasing actor, the cheese and the exit. Each
//! [`play_turn()`](GameSession::play_turn) runs one full turn:
//! move player → advance board → check hazards → plan and move actor →
//! update cheese → check exit → increment turn.
//!
//! # Ownership model
//!
//! `GameSession` is [`Send`] but makes no attempt to be shared. All
//! mutating methods take `&mut self`, so two turns of the same session
//! can never run at once. No I/O is performed.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use cellchase_automaton::{attempt_move, next_generation_with, MoveOutcome};
use cellchase_core::{BoardState, Direction, Position, Turn};
use cellchase_planner::{PlannerMemory, PursuitPlanner};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::{ConfigError, SessionConfig};
use crate::metrics::TurnMetrics;

// Compile-time assertion: GameSession is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<GameSession>();
    }
};

// ── Status ──────────────────────────────────────────────────────

/// Why a game was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LossCause {
    /// The player ran out of lives standing on living cells.
    LivingCell,
    /// The player and the actor met.
    Caught,
}

impl fmt::Display for LossCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LivingCell => f.write_str("touched a living cell"),
            Self::Caught => f.write_str("caught"),
        }
    }
}

/// Where a game stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Turns are still accepted.
    #[default]
    Playing,
    /// The player reached the exit carrying cheese.
    Won,
    /// The game ended in a loss.
    Lost(LossCause),
}

impl GameStatus {
    /// `true` once the game is won or lost.
    pub fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => f.write_str("playing"),
            Self::Won => f.write_str("won"),
            Self::Lost(cause) => write!(f, "lost ({cause})"),
        }
    }
}

/// The cheese: where it is and whether the player can pick it up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cheese {
    /// Cell the cheese occupies.
    pub position: Position,
    /// Only visible cheese can be collected.
    pub visible: bool,
}

/// Something notable that happened during a turn, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    /// The player stands on a living cell of the advanced board.
    LifeLost {
        /// Lives left after this loss.
        remaining: u32,
    },
    /// The player and the actor now share a cell.
    Caught,
    /// The planner found no safe step; the actor stayed put.
    ActorStayed,
    /// A hidden cheese became visible.
    CheeseSpawned {
        /// Where it appeared.
        position: Position,
    },
    /// The player picked up the cheese; a new one hides elsewhere.
    CheeseCollected {
        /// Cheeses collected so far.
        total: u32,
    },
    /// The player reached the exit without any cheese.
    ExitLocked,
}

// ── TurnError ───────────────────────────────────────────────────

/// Errors from [`GameSession::play_turn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnError {
    /// The game has ended; [`GameSession::restart`] to play again.
    GameOver {
        /// The final status.
        status: GameStatus,
    },
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver { status } => write!(f, "game is over: {status}"),
        }
    }
}

impl Error for TurnError {}

// ── TurnReport ──────────────────────────────────────────────────

/// Result of a successful [`GameSession::play_turn()`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// The turn that was played. The session's counter is now one past
    /// it, unless the player's move was blocked.
    pub turn: Turn,
    /// The player's step. [`MoveOutcome::Blocked`] means nothing else
    /// happened this turn.
    pub player_move: MoveOutcome,
    /// The actor's step, `None` if it stayed or did not plan.
    pub actor_move: Option<Direction>,
    /// Events in the order they occurred.
    pub events: Vec<TurnEvent>,
    /// Status after the turn.
    pub status: GameStatus,
    /// Timing and search counters for this turn.
    pub metrics: TurnMetrics,
}

// ── GameSession ─────────────────────────────────────────────────

/// One game from start to win or loss, restartable.
///
/// # Example
///
/// ```
/// use cellchase_core::Direction;
/// use cellchase_engine::{GameSession, SessionConfig};
///
/// let mut session = GameSession::new(SessionConfig::default()).unwrap();
/// let report = session.play_turn(Direction::Right).unwrap();
/// assert_eq!(report.turn.0, 0);
/// assert_eq!(session.turn().0, 1);
/// ```
pub struct GameSession {
    config: SessionConfig,
    planner: PursuitPlanner,
    initial_board: BoardState,
    board: BoardState,
    memory: PlannerMemory,
    turn: Turn,
    player: Position,
    actor: Position,
    cheese: Cheese,
    cheeses_collected: u32,
    lives: u32,
    status: GameStatus,
    rng: ChaCha8Rng,
    last_metrics: TurnMetrics,
}

fn random_cell(rng: &mut ChaCha8Rng, board: &BoardState) -> Position {
    board.position_of(rng.random_range(0..board.cell_count()))
}

impl GameSession {
    /// Validate `config` and start a session at turn 0.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let initial_board = config.initial_board()?;
        info!(
            rows = config.rows,
            cols = config.cols,
            horizon = config.horizon,
            rule = %config.rule,
            seed = config.seed,
            "session created"
        );
        Ok(Self::start(config, initial_board))
    }

    fn start(config: SessionConfig, initial_board: BoardState) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let cheese_at = match config.cheese.start {
            Some(p) => p,
            None => random_cell(&mut rng, &initial_board),
        };
        Self {
            planner: PursuitPlanner::new(config.horizon).with_rule(config.rule),
            board: initial_board.clone(),
            initial_board,
            memory: PlannerMemory::new(),
            turn: Turn(0),
            player: config.player_start,
            actor: config.actor_start,
            cheese: Cheese {
                position: cheese_at,
                visible: false,
            },
            cheeses_collected: 0,
            lives: config.lives,
            status: GameStatus::Playing,
            rng,
            last_metrics: TurnMetrics::default(),
            config,
        }
    }

    /// Return to turn 0 with the starting board, positions, lives and
    /// cheese, a fresh RNG from the configured seed, and an empty
    /// planner memory.
    pub fn restart(&mut self) {
        *self = Self::start(self.config.clone(), self.initial_board.clone());
        info!(seed = self.config.seed, "session restarted");
    }

    /// Play one turn with the player stepping in `direction`.
    ///
    /// A step off the board is reported as blocked and leaves the
    /// session untouched, turn counter included.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::GameOver`] once the game is won or lost.
    pub fn play_turn(&mut self, direction: Direction) -> Result<TurnReport, TurnError> {
        if self.status.is_over() {
            return Err(TurnError::GameOver {
                status: self.status,
            });
        }
        let turn_start = Instant::now();
        let turn = self.turn;
        let mut metrics = TurnMetrics::default();

        // 1. Player move.
        let player_move = attempt_move(&self.board, self.player, direction);
        let MoveOutcome::Moved(destination) = player_move else {
            metrics.total_us = turn_start.elapsed().as_micros() as u64;
            self.last_metrics = metrics;
            debug!(turn = turn.0, direction = %direction, "player move blocked");
            return Ok(TurnReport {
                turn,
                player_move,
                actor_move: None,
                events: Vec::new(),
                status: self.status,
                metrics,
            });
        };

        // 2. Board advance.
        let gen_start = Instant::now();
        self.board = next_generation_with(&self.board, self.config.rule);
        metrics.generation_us = gen_start.elapsed().as_micros() as u64;
        self.player = destination;

        // 3. Hazards at the player's new cell.
        let mut events = Vec::new();
        if self.board.is_alive(self.player) == Some(true) {
            self.lives = self.lives.saturating_sub(1);
            events.push(TurnEvent::LifeLost {
                remaining: self.lives,
            });
            if self.lives == 0 {
                self.status = GameStatus::Lost(LossCause::LivingCell);
            }
        }
        if !self.status.is_over() && self.player == self.actor {
            events.push(TurnEvent::Caught);
            self.status = GameStatus::Lost(LossCause::Caught);
        }

        // 4. Actor pursuit.
        let mut actor_move = None;
        if !self.status.is_over() {
            let plan_start = Instant::now();
            let memory = std::mem::take(&mut self.memory);
            let plan = self
                .planner
                .plan(self.player, memory, &self.board, self.actor, turn);
            metrics.planning_us = plan_start.elapsed().as_micros() as u64;
            metrics.plan = plan.metrics;
            self.memory = plan.memory;

            match plan.direction.map(|d| (d, attempt_move(&self.board, self.actor, d))) {
                Some((d, MoveOutcome::Moved(to))) => {
                    self.actor = to;
                    actor_move = Some(d);
                }
                _ => events.push(TurnEvent::ActorStayed),
            }
            if self.actor == self.player {
                events.push(TurnEvent::Caught);
                self.status = GameStatus::Lost(LossCause::Caught);
            }
        }

        // 5. Cheese.
        if !self.status.is_over() {
            self.update_cheese(turn, &mut events);
        }

        // 6. Exit.
        if !self.status.is_over() && self.player == self.config.exit {
            if self.cheeses_collected > 0 {
                self.status = GameStatus::Won;
            } else {
                events.push(TurnEvent::ExitLocked);
            }
        }

        self.turn = turn.next();
        metrics.total_us = turn_start.elapsed().as_micros() as u64;
        self.last_metrics = metrics;

        debug!(
            turn = turn.0,
            player = %self.player,
            actor = %self.actor,
            actor_move = ?actor_move,
            memory = self.memory.len(),
            "turn played"
        );
        if self.status.is_over() {
            info!(
                turn = turn.0,
                status = %self.status,
                cheeses = self.cheeses_collected,
                "game over"
            );
        }

        Ok(TurnReport {
            turn,
            player_move,
            actor_move,
            events,
            status: self.status,
            metrics,
        })
    }

    fn update_cheese(&mut self, turn: Turn, events: &mut Vec<TurnEvent>) {
        if self.cheese.visible {
            if self.cheese.position == self.player {
                self.cheeses_collected += 1;
                self.cheese = Cheese {
                    position: random_cell(&mut self.rng, &self.board),
                    visible: false,
                };
                events.push(TurnEvent::CheeseCollected {
                    total: self.cheeses_collected,
                });
            }
            return;
        }
        let completed = turn.next().0;
        let lucky = self.rng.random_bool(self.config.cheese.spawn_chance);
        if completed == self.config.cheese.first_spawn_turn || lucky {
            self.cheese.visible = true;
            events.push(TurnEvent::CheeseSpawned {
                position: self.cheese.position,
            });
        }
    }

    /// The current board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Breaking points found so far this session.
    pub fn memory(&self) -> &PlannerMemory {
        &self.memory
    }

    /// The next turn to be played (0 after construction or restart).
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Player position.
    pub fn player(&self) -> Position {
        self.player
    }

    /// Actor position.
    pub fn actor(&self) -> Position {
        self.actor
    }

    /// The exit cell.
    pub fn exit(&self) -> Position {
        self.config.exit
    }

    /// The cheese.
    pub fn cheese(&self) -> Cheese {
        self.cheese
    }

    /// Cheeses collected so far.
    pub fn cheeses_collected(&self) -> u32 {
        self.cheeses_collected
    }

    /// Lives left.
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Metrics from the most recent turn.
    pub fn last_metrics(&self) -> &TurnMetrics {
        &self.last_metrics
    }

    /// The configuration this session was built from.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("turn", &self.turn)
            .field("status", &self.status)
            .field("player", &self.player)
            .field("actor", &self.actor)
            .field("lives", &self.lives)
            .field("cheeses_collected", &self.cheeses_collected)
            .field("breaking_points", &self.memory.len())
            .field("seed", &self.config.seed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheeseConfig;

    fn p(r: i32, c: i32) -> Position {
        Position::new(r, c)
    }

    /// An all-dead board with a still actor and no random cheese.
    fn quiet(rows: u32, cols: u32, player: Position, actor: Position) -> SessionConfig {
        SessionConfig {
            rows,
            cols,
            initial_alive: Vec::new(),
            player_start: player,
            actor_start: actor,
            exit: p(rows as i32 - 1, cols as i32 - 1),
            horizon: 0,
            cheese: CheeseConfig {
                start: Some(p(0, 0)),
                first_spawn_turn: u64::MAX,
                spawn_chance: 0.0,
            },
            ..SessionConfig::default()
        }
    }

    #[test]
    fn new_session_starts_at_turn_zero() {
        let s = GameSession::new(SessionConfig::default()).unwrap();
        assert_eq!(s.turn(), Turn(0));
        assert_eq!(s.player(), p(0, 0));
        assert_eq!(s.actor(), p(8, 8));
        assert_eq!(s.exit(), p(9, 9));
        assert_eq!(s.lives(), 1);
        assert_eq!(s.status(), GameStatus::Playing);
        assert!(s.memory().is_empty());
        assert!(!s.cheese().visible);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = SessionConfig {
            lives: 0,
            ..SessionConfig::default()
        };
        assert_eq!(GameSession::new(cfg).unwrap_err(), ConfigError::NoLives);
    }

    #[test]
    fn blocked_move_changes_nothing() {
        let mut s = GameSession::new(SessionConfig::default()).unwrap();
        let board = s.board().clone();
        let report = s.play_turn(Direction::Up).unwrap();
        assert_eq!(report.player_move, MoveOutcome::Blocked);
        assert!(report.events.is_empty());
        assert_eq!(report.actor_move, None);
        assert_eq!(s.turn(), Turn(0));
        assert_eq!(s.board(), &board);
        assert_eq!(s.actor(), p(8, 8));
    }

    #[test]
    fn accepted_move_advances_turn_and_board() {
        let mut s = GameSession::new(SessionConfig::default()).unwrap();
        let expected = cellchase_automaton::next_generation(s.board());
        let report = s.play_turn(Direction::Right).unwrap();
        assert_eq!(report.player_move, MoveOutcome::Moved(p(0, 1)));
        assert_eq!(s.turn(), Turn(1));
        assert_eq!(s.board(), &expected);
        assert!(report.metrics.plan.evaluations >= 1);
    }

    #[test]
    fn stepping_onto_actor_is_caught() {
        let mut s = GameSession::new(quiet(3, 3, p(0, 0), p(0, 1))).unwrap();
        let report = s.play_turn(Direction::Right).unwrap();
        assert_eq!(report.events, vec![TurnEvent::Caught]);
        assert_eq!(report.status, GameStatus::Lost(LossCause::Caught));
        assert_eq!(report.actor_move, None);
        assert_eq!(report.metrics.plan.evaluations, 0);
    }

    #[test]
    fn turns_after_game_over_are_rejected() {
        let mut s = GameSession::new(quiet(3, 3, p(0, 0), p(0, 1))).unwrap();
        s.play_turn(Direction::Right).unwrap();
        assert_eq!(
            s.play_turn(Direction::Left),
            Err(TurnError::GameOver {
                status: GameStatus::Lost(LossCause::Caught),
            })
        );
    }

    #[test]
    fn exit_without_cheese_is_locked() {
        let mut s = GameSession::new(quiet(1, 4, p(0, 2), p(0, 0))).unwrap();
        let report = s.play_turn(Direction::Right).unwrap();
        assert_eq!(s.player(), s.exit());
        assert!(report.events.contains(&TurnEvent::ExitLocked));
        assert_eq!(report.status, GameStatus::Playing);
    }

    #[test]
    fn restart_restores_start() {
        let mut s = GameSession::new(SessionConfig::default()).unwrap();
        let board = s.board().clone();
        let cheese = s.cheese();
        s.play_turn(Direction::Right).unwrap();
        s.play_turn(Direction::Down).unwrap();
        s.restart();
        assert_eq!(s.turn(), Turn(0));
        assert_eq!(s.board(), &board);
        assert_eq!(s.player(), p(0, 0));
        assert_eq!(s.actor(), p(8, 8));
        assert_eq!(s.cheese(), cheese);
        assert_eq!(s.status(), GameStatus::Playing);
        assert!(s.memory().is_empty());
    }

    #[test]
    fn status_display() {
        assert_eq!(GameStatus::Playing.to_string(), "playing");
        assert_eq!(
            GameStatus::Lost(LossCause::Caught).to_string(),
            "lost (caught)"
        );
    }
}
