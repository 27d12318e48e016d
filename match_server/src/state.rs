use game_core::{Court, Events, GameMap, GameRng, Slot, Time};
use proto::{BallSnapshot, GameStateSnapshot, PaddleSnapshot, Phase};

use crate::config::MatchConfig;
use crate::presence::{InvariantViolation, Presences};

/// Canonical record of one match. Only the lifecycle handler mutates it.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub phase: Phase,
    pub presences: Presences,
    pub court: Court,
    /// Incremented once per loop invocation
    pub tick: u64,
    pub config: MatchConfig,
    pub ready: [bool; 2],
    pub time: Time,
    pub map: GameMap,
    pub events: Events,
    pub rng: GameRng,
    /// Tick at which the match was decided
    pub game_over_tick: Option<u64>,
    /// Final snapshot already sent after GameOver
    pub final_flushed: bool,
}

impl MatchState {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            phase: Phase::Waiting,
            presences: Presences::new(),
            court: Court::new(&config.game),
            tick: 0,
            ready: [false; 2],
            time: Time::from_tick_rate(config.game.tick_rate),
            map: GameMap::new(&config.game),
            events: Events::new(),
            rng: GameRng::new(config.seed),
            game_over_tick: None,
            final_flushed: false,
            config,
        }
    }

    pub fn is_ready(&self, slot: Slot) -> bool {
        self.ready[slot.index()]
    }

    pub fn all_ready(&self) -> bool {
        self.ready.iter().all(|ready| *ready)
    }

    /// Run the court forward one tick
    pub fn step_court(&mut self) {
        game_core::step(
            &mut self.court,
            &mut self.time,
            &self.map,
            &self.config.game,
            &mut self.events,
            &mut self.rng,
        );
    }

    pub fn winner(&self) -> Option<Slot> {
        self.court.score.has_winner(self.config.game.win_score)
    }

    /// True once the post-game grace period has run out
    pub fn grace_elapsed(&self) -> bool {
        self.game_over_tick
            .is_some_and(|at| self.tick.saturating_sub(at) >= self.config.game_over_grace_ticks)
    }

    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.presences.check()?;
        let occupied = self.presences.len();
        match self.phase {
            Phase::Ready | Phase::Playing if occupied < 2 => Err(InvariantViolation::MissingPlayers {
                phase: self.phase,
                occupied,
            }),
            _ => Ok(()),
        }
    }

    pub fn snapshot(&self) -> GameStateSnapshot {
        let ball = self.court.ball;
        GameStateSnapshot {
            ball: BallSnapshot {
                x: ball.pos.x,
                y: ball.pos.y,
                vx: ball.vel.x,
                vy: ball.vel.y,
            },
            paddles: Slot::ALL
                .into_iter()
                .map(|slot| {
                    let y = self.court.paddles.get(slot);
                    (slot.number(), PaddleSnapshot { y })
                })
                .collect(),
            scores: Slot::ALL
                .into_iter()
                .map(|slot| (slot.number(), self.court.score.get(slot)))
                .collect(),
            phase: self.phase,
            tick: self.tick,
        }
    }
}
