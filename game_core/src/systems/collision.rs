use crate::{reflect, Aabb, Ball, Config, Events, GameMap, Paddles, Slot};
use glam::Vec2;

/// Bounce the ball off the top and bottom walls.
///
/// The ball is placed back on the wall before its vertical velocity is
/// reflected, so it can never leave the playfield in a single tick.
pub fn check_walls(ball: &mut Ball, map: &GameMap, config: &Config, events: &mut Events) {
    let half = config.ball_half_size();

    let normal = if ball.pos.y - half <= 0.0 {
        Vec2::Y
    } else if ball.pos.y + half >= map.height {
        Vec2::NEG_Y
    } else {
        return;
    };

    ball.pos.y = map.clamp_y(ball.pos.y, half);

    // Only bounce when heading into the wall
    if ball.vel.dot(normal) < 0.0 {
        ball.vel = reflect(ball.vel, normal);
        events.ball_hit_wall = true;
    }
}

/// Bounce the ball off a paddle whose face its leading edge crossed this tick.
///
/// `prev_pos` is the ball center before integration; the crossing is swept so
/// a fast ball cannot skip through a paddle between two ticks.
pub fn check_paddles(
    ball: &mut Ball,
    prev_pos: Vec2,
    paddles: &Paddles,
    config: &Config,
    events: &mut Events,
) {
    let half = config.ball_half_size();

    for slot in Slot::ALL {
        // X: +1 when the paddle sends the ball right, -1 when left
        let away = match slot {
            Slot::One => 1.0,
            Slot::Two => -1.0,
        };
        if ball.vel.x * away >= 0.0 {
            continue; // moving away from this paddle
        }

        let face = config.paddle_face_x(slot);
        let prev_lead = prev_pos.x - away * half;
        let lead = ball.pos.x - away * half;

        // Reaching the face exactly counts as a hit
        let crossed = (prev_lead - face) * away >= 0.0 && (lead - face) * away <= 0.0;
        if !crossed {
            continue;
        }

        let travel = lead - prev_lead;
        let t = if travel.abs() > f32::EPSILON {
            ((face - prev_lead) / travel).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let hit_y = prev_pos.y + (ball.pos.y - prev_pos.y) * t;

        let top = paddles.get(slot);
        let paddle_box = Aabb::from_top_left_size(
            Vec2::new(config.paddle_x(slot), top),
            Vec2::new(config.paddle_width, config.paddle_height),
        );
        if !paddle_box.overlaps_y(hit_y - half, hit_y + half) {
            continue;
        }

        // Relative hit position from -1 (top) to 1 (bottom)
        let half_height = config.paddle_height / 2.0;
        let offset = ((hit_y - (top + half_height)) / half_height).clamp(-1.0, 1.0);

        let new_speed = (ball.speed() * config.ball_speed_increase).min(config.ball_speed_max);
        let angle = offset * config.max_deflection_angle;

        ball.vel = Vec2::new(away * angle.cos(), angle.sin()) * new_speed;
        ball.pos = Vec2::new(face + away * half, hit_y);

        events.ball_hit_paddle = Some(slot);
        return;
    }
}
