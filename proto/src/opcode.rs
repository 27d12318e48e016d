/// Operation codes tagging every match message on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    /// C2S: requested paddle position
    PaddleUpdate = 1,
    /// Reserved, never emitted: GameState carries the ball
    BallUpdate = 2,
    /// S2C: per-tick authoritative snapshot
    GameState = 3,
    /// C2S: readiness signal
    PlayerReady = 4,
    /// S2C: play begins
    GameStart = 5,
    /// S2C: a slot scored
    ScoreUpdate = 6,
    /// S2C: match decided
    GameOver = 7,
}

impl OpCode {
    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            1 => OpCode::PaddleUpdate,
            2 => OpCode::BallUpdate,
            3 => OpCode::GameState,
            4 => OpCode::PlayerReady,
            5 => OpCode::GameStart,
            6 => OpCode::ScoreUpdate,
            7 => OpCode::GameOver,
            _ => return None,
        })
    }

    /// Whether clients are allowed to send this opcode
    pub fn is_client_bound(self) -> bool {
        matches!(self, OpCode::PaddleUpdate | OpCode::PlayerReady)
    }
}
