use crate::{Params, Slot};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub max_deflection_angle: f32,
    pub win_score: u32,
    pub tick_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            max_deflection_angle: Params::MAX_DEFLECTION_ANGLE,
            win_score: Params::WIN_SCORE,
            tick_rate: Params::TICK_RATE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed duration of one tick in seconds
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    pub fn ball_half_size(&self) -> f32 {
        self.ball_size / 2.0
    }

    /// Highest legal paddle top
    pub fn paddle_max_y(&self) -> f32 {
        self.arena_height - self.paddle_height
    }

    /// Clamp paddle top to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.paddle_max_y())
    }

    /// Paddle top that centers it vertically
    pub fn paddle_start_y(&self) -> f32 {
        self.paddle_max_y() / 2.0
    }

    /// Left edge of the paddle for a slot (slot one defends the left wall)
    pub fn paddle_x(&self, slot: Slot) -> f32 {
        match slot {
            Slot::One => self.paddle_margin,
            Slot::Two => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// X of the paddle edge facing the arena center
    pub fn paddle_face_x(&self, slot: Slot) -> f32 {
        match slot {
            Slot::One => self.paddle_x(slot) + self.paddle_width,
            Slot::Two => self.paddle_x(slot),
        }
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Velocity of a fresh serve heading right and down
    pub fn serve_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_speed, self.ball_speed * 0.5)
    }
}
