/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 30.0; // gap between side wall and paddle

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SPEED: f32 = 350.0; // x component of a fresh serve
    pub const BALL_SPEED_MAX: f32 = 700.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply speed on paddle hit
    pub const MAX_DEFLECTION_ANGLE: f32 = 0.785; // ~45 degrees

    // Score
    pub const WIN_SCORE: u32 = 5; // First to 5 wins

    // Timing
    pub const TICK_RATE: u32 = 30; // Hz
}
