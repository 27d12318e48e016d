use crate::{Config, Slot};
use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_top_left_size(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    /// Touching ends count as overlap
    pub fn overlaps_y(&self, min_y: f32, max_y: f32) -> bool {
        self.min.y <= max_y && self.max.y >= min_y
    }
}

/// Reflect a velocity off a surface with unit `normal`
pub fn reflect(vel: Vec2, normal: Vec2) -> Vec2 {
    vel - 2.0 * vel.dot(normal) * normal
}

/// Playfield bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.arena_width,
            height: config.arena_height,
        }
    }

    /// Clamp a center Y so an object of `half_height` stays inside the walls
    pub fn clamp_y(&self, y: f32, half_height: f32) -> f32 {
        y.clamp(half_height, self.height - half_height)
    }

    /// Slot whose goal line the ball center has reached, if any
    pub fn goal_crossed(&self, x: f32) -> Option<Slot> {
        if x <= 0.0 {
            Some(Slot::One)
        } else if x >= self.width {
            Some(Slot::Two)
        } else {
            None
        }
    }
}
