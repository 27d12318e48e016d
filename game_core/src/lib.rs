//! Deterministic Pong court simulation.
//!
//! Pure value types and per-tick systems; match lifecycle lives in
//! `match_server`.

pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use systems::*;

/// Everything physical on the court
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Court {
    pub ball: Ball,
    pub paddles: Paddles,
    pub score: Score,
}

impl Court {
    /// Ball centered with the default serve, paddles centered, scores zero
    pub fn new(config: &Config) -> Self {
        Self {
            ball: Ball::kickoff(config),
            paddles: Paddles::new(config),
            score: Score::new(),
        }
    }
}

/// Advance the court by exactly one fixed tick
pub fn step(
    court: &mut Court,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    let prev_pos = court.ball.pos;

    // 1. Integrate ball
    move_ball(&mut court.ball, time);

    // 2. Walls, then paddles
    check_walls(&mut court.ball, map, config, events);
    check_paddles(&mut court.ball, prev_pos, &court.paddles, config, events);

    // 3. Goal lines
    check_scoring(&mut court.ball, map, &mut court.score, events, rng, config);

    time.now += time.dt;
}
