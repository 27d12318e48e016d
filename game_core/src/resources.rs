use crate::Slot;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Time {
    pub dt: f32,  // Fixed duration of one tick
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }

    pub fn from_tick_rate(tick_rate: u32) -> Self {
        Self::new(1.0 / tick_rate as f32, 0.0)
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::from_tick_rate(crate::Params::TICK_RATE)
    }
}

/// Game score tracking, indexed by slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    points: [u32; 2],
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> u32 {
        self.points[slot.index()]
    }

    /// Award one point, returning the new total
    pub fn increment(&mut self, slot: Slot) -> u32 {
        let points = &mut self.points[slot.index()];
        *points += 1;
        *points
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Slot> {
        Slot::ALL
            .into_iter()
            .find(|slot| self.get(*slot) >= win_score)
    }
}

/// Seeded random number generator for serves
#[derive(Debug, Clone)]
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn coin_flip(&mut self) -> bool {
        use rand::Rng;
        self.0.gen_bool(0.5)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Slot>,
    pub scored: Option<Slot>, // slot that won the point
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
