use crate::{Config, GameRng};
use glam::Vec2;

/// Logical player position within a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    One, // left paddle
    Two, // right paddle
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::One, Slot::Two];

    pub fn index(self) -> usize {
        match self {
            Slot::One => 0,
            Slot::Two => 1,
        }
    }

    /// Wire number of the slot (1 or 2)
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn opponent(self) -> Self {
        match self {
            Slot::One => Slot::Two,
            Slot::Two => Slot::One,
        }
    }
}

/// The pong ball, positioned by its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Ball at center with the default serve
    pub fn kickoff(config: &Config) -> Self {
        Self::new(config.ball_spawn(), config.serve_velocity())
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Reset ball to center at serve speed.
    ///
    /// `dir_x` picks the horizontal direction; only the vertical sign is random.
    pub fn serve(&mut self, dir_x: f32, config: &Config, rng: &mut GameRng) {
        let serve = config.serve_velocity();
        let dir_y = if rng.coin_flip() { 1.0 } else { -1.0 };
        self.pos = config.ball_spawn();
        self.vel = Vec2::new(serve.x * dir_x.signum(), serve.y * dir_y);
    }
}

/// Paddle tops for both slots. Every write is clamped to the arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddles {
    y: [f32; 2],
}

impl Paddles {
    pub fn new(config: &Config) -> Self {
        let start = config.clamp_paddle_y(config.paddle_start_y());
        Self { y: [start; 2] }
    }

    pub fn get(&self, slot: Slot) -> f32 {
        self.y[slot.index()]
    }

    /// Move a paddle, returning the stored (clamped) top.
    /// Non-finite requests leave the paddle where it is.
    pub fn set(&mut self, slot: Slot, y: f32, config: &Config) -> f32 {
        if y.is_finite() {
            self.y[slot.index()] = config.clamp_paddle_y(y);
        }
        self.y[slot.index()]
    }

    /// Apply a client paddle request, clamping before narrowing to `f32`.
    /// NaN leaves the paddle where it is.
    pub fn request(&mut self, slot: Slot, y: f64, config: &Config) -> f32 {
        let max = f64::from(config.paddle_max_y());
        self.set(slot, y.clamp(0.0, max) as f32, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_numbers() {
        assert_eq!(Slot::One.number(), 1);
        assert_eq!(Slot::Two.number(), 2);
        assert_eq!(Slot::One.opponent(), Slot::Two);
    }

    #[test]
    fn test_paddle_write_is_clamped() {
        let config = Config::new();
        let mut paddles = Paddles::new(&config);
        assert_eq!(paddles.get(Slot::One), 250.0, "Paddles start centered");

        assert_eq!(paddles.set(Slot::One, -10.0, &config), 0.0);
        assert_eq!(paddles.set(Slot::Two, 9000.0, &config), 500.0);
        assert_eq!(paddles.get(Slot::One), 0.0);
        assert_eq!(paddles.get(Slot::Two), 500.0);
    }

    #[test]
    fn test_paddle_ignores_non_finite() {
        let config = Config::new();
        let mut paddles = Paddles::new(&config);
        paddles.set(Slot::One, 120.0, &config);
        assert_eq!(paddles.set(Slot::One, f32::NAN, &config), 120.0);
        assert_eq!(paddles.set(Slot::One, f32::INFINITY, &config), 120.0);
    }

    #[test]
    fn test_paddle_request_beyond_f32_range() {
        let config = Config::new();
        let mut paddles = Paddles::new(&config);
        assert_eq!(paddles.request(Slot::One, 1e39, &config), 500.0);
        assert_eq!(paddles.request(Slot::Two, -1e300, &config), 0.0);
        assert_eq!(paddles.request(Slot::Two, f64::INFINITY, &config), 500.0);
        assert_eq!(paddles.request(Slot::Two, f64::NAN, &config), 500.0, "NaN is ignored");
    }

    #[test]
    fn test_serve_resets_to_center() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(glam::Vec2::new(-3.0, 40.0), glam::Vec2::new(-610.0, 90.0));

        ball.serve(1.0, &config, &mut rng);

        assert_eq!(ball.pos, config.ball_spawn());
        assert_eq!(ball.vel.x, 350.0, "Serve heads right at base speed");
        assert_eq!(ball.vel.y.abs(), 175.0);
    }
}
