//! Per-match configuration parsed from the host's init params

use game_core::{Config, Params};
use proto::Encoding;
use serde::Deserialize;
use serde_json::Value;

use crate::lobby::MATCH_LABEL;

/// Raw params as the host hands them in. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatchParams {
    pub win_score: u32,
    pub tick_rate: u32,
    /// Require PlayerReady from both players before serving
    pub ready_gating: bool,
    /// Serve RNG seed
    pub seed: u64,
    pub encoding: Encoding,
    pub game_over_grace_secs: u32,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            win_score: Params::WIN_SCORE,
            tick_rate: Params::TICK_RATE,
            ready_gating: true,
            seed: 12345,
            encoding: Encoding::Json,
            game_over_grace_secs: 3,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid match params: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("`{0}` must be greater than zero")]
    Zero(&'static str),
}

/// Validated configuration every lifecycle call works from
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    pub game: Config,
    pub ready_gating: bool,
    pub seed: u64,
    pub encoding: Encoding,
    pub game_over_grace_ticks: u64,
    pub label: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::assemble(MatchParams::default())
    }
}

impl MatchConfig {
    /// Parse and validate init params. `null` means all defaults.
    pub fn from_params(params: &Value) -> Result<Self, ConfigError> {
        let params = if params.is_null() {
            MatchParams::default()
        } else {
            MatchParams::deserialize(params)?
        };
        Self::from_match_params(params)
    }

    pub fn from_match_params(params: MatchParams) -> Result<Self, ConfigError> {
        if params.win_score == 0 {
            return Err(ConfigError::Zero("win_score"));
        }
        if params.tick_rate == 0 {
            return Err(ConfigError::Zero("tick_rate"));
        }
        Ok(Self::assemble(params))
    }

    fn assemble(params: MatchParams) -> Self {
        let game = Config {
            win_score: params.win_score,
            tick_rate: params.tick_rate,
            ..Config::default()
        };
        Self {
            game,
            ready_gating: params.ready_gating,
            seed: params.seed,
            encoding: params.encoding,
            game_over_grace_ticks: u64::from(params.game_over_grace_secs) * u64::from(params.tick_rate),
            label: MATCH_LABEL.to_string(),
        }
    }
}
