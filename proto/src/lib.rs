//! Network protocol for Pong matches
//!
//! Every message travels as an opcode plus a payload. Payloads are JSON by
//! default, or postcard when the match is configured for binary frames.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod codec;
pub mod opcode;

pub use codec::*;
pub use opcode::*;

// ============================================================================
// Payload bodies
// ============================================================================

/// Requested paddle top, in arena units. Out-of-range values are clamped by
/// the match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleUpdate {
    pub y: f64,
}

/// Empty bodies (`{}` in JSON)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// Match lifecycle phase as clients see it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Waiting,
    Ready,
    Playing,
    GameOver,
    Terminating,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleSnapshot {
    pub y: f32,
}

/// Per-tick authoritative snapshot. Maps are keyed by slot number (1, 2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub ball: BallSnapshot,
    pub paddles: BTreeMap<u8, PaddleSnapshot>,
    pub scores: BTreeMap<u8, u32>,
    pub phase: Phase,
    pub tick: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreUpdate {
    pub slot: u8,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    pub winner: u8,
}

// ============================================================================
// C2S Messages (Client to Server)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum C2S {
    PaddleUpdate(PaddleUpdate),
    PlayerReady,
}

// ============================================================================
// S2C Messages (Server to Client)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum S2C {
    GameState(GameStateSnapshot),
    GameStart,
    ScoreUpdate(ScoreUpdate),
    GameOver(GameOver),
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl C2S {
    pub fn op_code(&self) -> OpCode {
        match self {
            C2S::PaddleUpdate(_) => OpCode::PaddleUpdate,
            C2S::PlayerReady => OpCode::PlayerReady,
        }
    }

    /// Serialize C2S payload to bytes
    pub fn to_bytes(&self, encoding: Encoding) -> Result<Vec<u8>, EncodeError> {
        match self {
            C2S::PaddleUpdate(body) => encoding.encode(body),
            C2S::PlayerReady => encoding.encode(&Empty {}),
        }
    }

    /// Decode an inbound client payload. Never panics; any problem is a
    /// `DecodeError` the caller drops.
    pub fn from_bytes(op_code: i64, bytes: &[u8], encoding: Encoding) -> Result<Self, DecodeError> {
        let op = OpCode::from_code(op_code).ok_or(DecodeError::UnknownOpCode(op_code))?;
        if !op.is_client_bound() {
            return Err(DecodeError::WrongDirection(op));
        }

        if op == OpCode::PlayerReady {
            // Clients may omit the `{}` body entirely
            if !bytes.iter().all(u8::is_ascii_whitespace) {
                encoding.decode::<Empty>(bytes)?;
            }
            return Ok(C2S::PlayerReady);
        }

        let body: PaddleUpdate = encoding.decode(bytes)?;
        if body.y.is_nan() {
            return Err(DecodeError::NotANumber("y"));
        }
        Ok(C2S::PaddleUpdate(body))
    }
}

impl S2C {
    pub fn op_code(&self) -> OpCode {
        match self {
            S2C::GameState(_) => OpCode::GameState,
            S2C::GameStart => OpCode::GameStart,
            S2C::ScoreUpdate(_) => OpCode::ScoreUpdate,
            S2C::GameOver(_) => OpCode::GameOver,
        }
    }

    /// Serialize S2C payload to bytes
    pub fn to_bytes(&self, encoding: Encoding) -> Result<Vec<u8>, EncodeError> {
        match self {
            S2C::GameState(body) => encoding.encode(body),
            S2C::GameStart => encoding.encode(&Empty {}),
            S2C::ScoreUpdate(body) => encoding.encode(body),
            S2C::GameOver(body) => encoding.encode(body),
        }
    }

    /// Deserialize S2C payload, as a client would
    pub fn from_bytes(op_code: i64, bytes: &[u8], encoding: Encoding) -> Result<Self, DecodeError> {
        let op = OpCode::from_code(op_code).ok_or(DecodeError::UnknownOpCode(op_code))?;
        match op {
            OpCode::GameState => Ok(S2C::GameState(encoding.decode(bytes)?)),
            OpCode::GameStart => {
                if !bytes.is_empty() {
                    encoding.decode::<Empty>(bytes)?;
                }
                Ok(S2C::GameStart)
            }
            OpCode::ScoreUpdate => Ok(S2C::ScoreUpdate(encoding.decode(bytes)?)),
            OpCode::GameOver => Ok(S2C::GameOver(encoding.decode(bytes)?)),
            other => Err(DecodeError::WrongDirection(other)),
        }
    }
}
