//! Authoritative match core for two-player pong.
//!
//! [`PongMatch`] implements the [`MatchHandler`] callbacks a match host
//! drives: it owns slot assignment, the phase machine and the fixed-tick
//! simulation, and returns broadcasts as values for the host to deliver.

pub mod config;
pub mod handler;
pub mod lobby;
pub mod presence;
pub mod state;

pub use config::{ConfigError, MatchConfig, MatchParams};
pub use handler::{
    Broadcast, JoinAttempt, MatchData, MatchHandler, MatchInit, PongMatch, Presence, Transition,
};
pub use lobby::{MatchId, Matchmaker, MatchmakerError, MATCH_LABEL, MATCH_MODULE};
pub use presence::{InvariantViolation, JoinRejection, PlayerPresence, Presences};
pub use proto::Phase;
pub use state::MatchState;
