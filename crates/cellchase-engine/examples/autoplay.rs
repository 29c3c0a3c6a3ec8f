//! Cellchase autoplay — a scripted player against the pursuit planner.
//!
//! Demonstrates:
//!   1. Building a SessionConfig (classic or random layout)
//!   2. Driving a GameSession turn by turn
//!   3. Reading reports, events and metrics
//!   4. Restarting a finished session
//!
//! The player walks toward the visible cheese, or the exit once it
//! carries some, never stepping onto a cell that will be alive.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example autoplay

use cellchase_automaton::{attempt_move, next_generation_with};
use cellchase_core::{Direction, Position};
use cellchase_engine::{GameSession, SessionConfig};
use tracing_subscriber::EnvFilter;

const MAX_TURNS: u32 = 60;
const GAMES: u32 = 3;

/// Safe step closest to `goal`, or any on-board step if none is safe.
fn choose(session: &GameSession, goal: Position) -> Direction {
    let board = session.board();
    let next = next_generation_with(board, session.config().rule);
    let mut options: Vec<(i64, bool, Direction)> = Direction::ALL
        .iter()
        .filter_map(|&d| {
            let to = attempt_move(board, session.player(), d).position()?;
            let safe = next.is_alive(to) == Some(false) && to != session.actor();
            Some((to.distance_squared(goal), !safe, d))
        })
        .collect();
    options.sort_by_key(|&(dist, unsafe_step, _)| (unsafe_step, dist));
    options.first().map_or(Direction::Right, |&(_, _, d)| d)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base = match std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => match SessionConfig::random_layout(12, 12, 0.15, seed) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("bad layout: {e}");
                return;
            }
        },
        None => SessionConfig::default(),
    };

    let mut last = None;
    for game in 0..GAMES {
        let config = SessionConfig {
            seed: base.seed.wrapping_add(u64::from(game)),
            ..base.clone()
        };
        let mut session = match GameSession::new(config) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("bad config: {e}");
                return;
            }
        };
        println!("── game {game} ──");
        println!("{}\n", session.board());
        for _ in 0..MAX_TURNS {
            let goal = if session.cheese().visible && session.cheeses_collected() == 0 {
                session.cheese().position
            } else {
                session.exit()
            };
            let direction = choose(&session, goal);
            let report = match session.play_turn(direction) {
                Ok(r) => r,
                Err(e) => {
                    println!("{e}");
                    break;
                }
            };
            println!(
                "turn {:>3}: player {} -> {}, actor {}, events {:?}, {} evals, {} us",
                report.turn.0,
                direction,
                session.player(),
                session.actor(),
                report.events,
                report.metrics.plan.evaluations,
                report.metrics.total_us,
            );
            if report.status.is_over() {
                println!("result: {}", report.status);
                break;
            }
        }
        println!(
            "breaking points: {}, cheeses: {}\n",
            session.memory().len(),
            session.cheeses_collected()
        );
        last = Some(session);
    }

    if let Some(mut session) = last {
        session.restart();
        println!(
            "restarted: turn {}, breaking points {}",
            session.turn(),
            session.memory().len()
        );
    }
}
