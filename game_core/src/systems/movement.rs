use crate::{Ball, Time};

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball, time: &Time) {
    ball.pos += ball.vel * time.dt;
}
