//! Host-facing match lifecycle.
//!
//! The host owns scheduling and transport. It calls these functions with the
//! current state and gets back the next state plus the broadcasts to deliver.
//! A returned state of `None` means the match is over and must be dropped.

use std::time::Duration;

use game_core::Slot;
use proto::{GameOver, OpCode, Phase, ScoreUpdate, C2S, S2C};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::config::{ConfigError, MatchConfig};
use crate::presence::JoinRejection;
use crate::state::MatchState;

/// A player as the transport identifies it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presence {
    pub user_id: String,
}

impl Presence {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// One inbound message, exactly as the transport received it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchData {
    pub user_id: String,
    pub op_code: i64,
    pub data: Vec<u8>,
}

impl MatchData {
    pub fn new(user_id: impl Into<String>, op_code: i64, data: impl Into<Vec<u8>>) -> Self {
        Self {
            user_id: user_id.into(),
            op_code,
            data: data.into(),
        }
    }
}

/// Outbound payload for the transport to deliver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Broadcast {
    pub op_code: OpCode,
    pub payload: Vec<u8>,
    /// `None` addresses every presence in the match
    pub recipients: Option<Vec<String>>,
}

/// Result of `init`
#[derive(Debug)]
pub struct MatchInit<S> {
    pub state: S,
    pub tick_rate: u32,
    pub label: String,
}

impl<S> MatchInit<S> {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}

/// Result of `join_attempt`; never mutates the state
#[derive(Debug)]
pub struct JoinAttempt<S> {
    pub state: S,
    pub result: Result<Slot, JoinRejection>,
}

impl<S> JoinAttempt<S> {
    pub fn accepted(&self) -> bool {
        self.result.is_ok()
    }

    /// Reason text for the transport to send back on rejection
    pub fn reason(&self) -> Option<String> {
        self.result.as_ref().err().map(ToString::to_string)
    }
}

/// Next state (or `None` to end the match) plus broadcasts
#[derive(Debug)]
pub struct Transition<S> {
    pub state: Option<S>,
    pub broadcasts: Vec<Broadcast>,
}

impl<S> Transition<S> {
    pub fn keep(state: S, broadcasts: Vec<Broadcast>) -> Self {
        Self {
            state: Some(state),
            broadcasts,
        }
    }

    pub fn end(broadcasts: Vec<Broadcast>) -> Self {
        Self {
            state: None,
            broadcasts,
        }
    }

    pub fn is_ended(&self) -> bool {
        self.state.is_none()
    }
}

/// Callbacks a match host drives. Each call consumes the previous state.
pub trait MatchHandler {
    type State;

    fn init(&self, params: &Value) -> Result<MatchInit<Self::State>, ConfigError>;

    fn join_attempt(&self, state: Self::State, presence: &Presence) -> JoinAttempt<Self::State>;

    fn join(&self, state: Self::State, presences: &[Presence]) -> Transition<Self::State>;

    fn leave(&self, state: Self::State, presences: &[Presence]) -> Transition<Self::State>;

    /// Advance exactly one tick with every message received since the last one
    fn tick(&self, state: Self::State, messages: &[MatchData]) -> Transition<Self::State>;

    fn terminate(&self, state: Self::State, grace_seconds: u32) -> Transition<Self::State>;

    fn signal(&self, state: Self::State, data: &str) -> (Self::State, String);
}

/// Authoritative two-player pong
#[derive(Debug, Clone, Copy, Default)]
pub struct PongMatch;

impl MatchHandler for PongMatch {
    type State = MatchState;

    fn init(&self, params: &Value) -> Result<MatchInit<MatchState>, ConfigError> {
        let config = MatchConfig::from_params(params)?;
        let tick_rate = config.game.tick_rate;
        let label = config.label.clone();
        info!(tick_rate, %label, seed = config.seed, "match created");

        Ok(MatchInit {
            state: MatchState::new(config),
            tick_rate,
            label,
        })
    }

    fn join_attempt(&self, state: MatchState, presence: &Presence) -> JoinAttempt<MatchState> {
        let result = state.presences.can_join(&presence.user_id, state.phase);
        if let Err(rejection) = &result {
            info!(user_id = %presence.user_id, %rejection, "join attempt rejected");
        }
        JoinAttempt { state, result }
    }

    fn join(&self, mut state: MatchState, presences: &[Presence]) -> Transition<MatchState> {
        for presence in presences {
            match state.presences.join(&presence.user_id, state.phase) {
                Ok(slot) => info!(user_id = %presence.user_id, slot = slot.number(), "player joined"),
                Err(rejection) => {
                    warn!(user_id = %presence.user_id, %rejection, "join dropped after accepted attempt")
                }
            }
        }

        if state.phase == Phase::Waiting && state.presences.is_full() {
            state.phase = Phase::Ready;
            info!("both slots filled, match ready");
        }

        Transition::keep(state, Vec::new())
    }

    fn leave(&self, mut state: MatchState, presences: &[Presence]) -> Transition<MatchState> {
        let mut out = Vec::new();

        for presence in presences {
            let Some(slot) = state.presences.leave(&presence.user_id) else {
                debug!(user_id = %presence.user_id, "leave for unknown presence ignored");
                continue;
            };
            state.ready[slot.index()] = false;
            info!(user_id = %presence.user_id, slot = slot.number(), "player left");

            match state.phase {
                Phase::Playing => {
                    // Forfeit: remaining player wins
                    let winner = slot.opponent();
                    if state.presences.occupant(winner).is_some() {
                        enter_game_over(&mut state, winner, &mut out);
                    }
                }
                Phase::Ready => {
                    state.phase = Phase::Waiting;
                    state.ready = [false; 2];
                    info!("opponent left before serve, waiting again");
                }
                Phase::Waiting | Phase::GameOver | Phase::Terminating => {}
            }
        }

        if state.presences.is_empty() {
            info!(tick = state.tick, "last player left, ending match");
            return Transition::end(out);
        }

        Transition::keep(state, out)
    }

    fn tick(&self, mut state: MatchState, messages: &[MatchData]) -> Transition<MatchState> {
        if state.phase == Phase::Terminating {
            debug!(tick = state.tick, "tick after terminate, ending match");
            return Transition::end(Vec::new());
        }
        if let Err(violation) = state.check_invariants() {
            error!(tick = state.tick, %violation, "match invariant violated, tearing down");
            return Transition::end(Vec::new());
        }

        state.tick += 1;
        let mut out = Vec::new();

        if state.phase == Phase::GameOver {
            flush_final_state(&mut state, &mut out);
            if state.grace_elapsed() {
                info!(tick = state.tick, "game over grace elapsed, ending match");
                return Transition::end(out);
            }
            return Transition::keep(state, out);
        }

        apply_inputs(&mut state, messages);

        if state.phase == Phase::Waiting && state.presences.is_full() {
            state.phase = Phase::Ready;
        }
        if state.phase == Phase::Ready && (!state.config.ready_gating || state.all_ready()) {
            state.phase = Phase::Playing;
            info!(tick = state.tick, "game start");
            push(&state, &S2C::GameStart, &mut out);
        }

        if state.phase == Phase::Playing {
            state.step_court();

            if let Some(scorer) = state.events.scored {
                let score = state.court.score.get(scorer);
                info!(tick = state.tick, slot = scorer.number(), score, "point scored");
                push(
                    &state,
                    &S2C::ScoreUpdate(ScoreUpdate {
                        slot: scorer.number(),
                        score,
                    }),
                    &mut out,
                );
            }

            if let Some(winner) = state.winner() {
                enter_game_over(&mut state, winner, &mut out);
                flush_final_state(&mut state, &mut out);
            } else {
                push(&state, &S2C::GameState(state.snapshot()), &mut out);
            }
        }

        Transition::keep(state, out)
    }

    fn terminate(&self, mut state: MatchState, grace_seconds: u32) -> Transition<MatchState> {
        info!(tick = state.tick, grace_seconds, "match terminating");
        let mut out = Vec::new();
        if state.phase == Phase::GameOver {
            flush_final_state(&mut state, &mut out);
        }
        state.phase = Phase::Terminating;
        Transition::keep(state, out)
    }

    fn signal(&self, state: MatchState, data: &str) -> (MatchState, String) {
        debug!(tick = state.tick, "match signal");
        (state, data.to_string())
    }
}

/// Apply decoded inputs from slot holders; everything else is dropped
fn apply_inputs(state: &mut MatchState, messages: &[MatchData]) {
    for msg in messages {
        let Some(slot) = state.presences.slot_of(&msg.user_id) else {
            debug!(user_id = %msg.user_id, op_code = msg.op_code, "dropping message from sender without a slot");
            continue;
        };

        let decoded = match C2S::from_bytes(msg.op_code, &msg.data, state.config.encoding) {
            Ok(decoded) => decoded,
            Err(err) => {
                debug!(user_id = %msg.user_id, op_code = msg.op_code, %err, "dropping malformed message");
                continue;
            }
        };

        match decoded {
            C2S::PaddleUpdate(update) => {
                state.court.paddles.request(slot, update.y, &state.config.game);
            }
            C2S::PlayerReady => {
                if matches!(state.phase, Phase::Waiting | Phase::Ready) && !state.is_ready(slot) {
                    state.ready[slot.index()] = true;
                    info!(user_id = %msg.user_id, slot = slot.number(), "player ready");
                }
            }
        }
    }
}

fn enter_game_over(state: &mut MatchState, winner: Slot, out: &mut Vec<Broadcast>) {
    state.phase = Phase::GameOver;
    state.game_over_tick = Some(state.tick);
    state.final_flushed = false;
    info!(tick = state.tick, winner = winner.number(), "game over");
    push(
        state,
        &S2C::GameOver(GameOver {
            winner: winner.number(),
        }),
        out,
    );
}

/// Send the decided state once
fn flush_final_state(state: &mut MatchState, out: &mut Vec<Broadcast>) {
    if state.final_flushed {
        return;
    }
    push(state, &S2C::GameState(state.snapshot()), out);
    state.final_flushed = true;
}

fn push(state: &MatchState, msg: &S2C, out: &mut Vec<Broadcast>) {
    match msg.to_bytes(state.config.encoding) {
        Ok(payload) => out.push(Broadcast {
            op_code: msg.op_code(),
            payload,
            recipients: None,
        }),
        Err(err) => error!(op_code = ?msg.op_code(), %err, "failed to encode broadcast"),
    }
}
