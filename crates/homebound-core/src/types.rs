//! Fundamental geometric types for the 2D playfield.
//!
//! The playfield is a side view: x increases toward the oncoming world
//! (rightward on screen), y increases downward toward the ground line.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// AABB overlap test (shared edges do not count as overlap).
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

/// Circle used for projectile hit volumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Circle-vs-rectangle test via the clamped nearest point on the rect.
    pub fn hits_rect(&self, rect: &Rect) -> bool {
        let closest = self.center.clamp(rect.pos, rect.pos + rect.size);
        let delta = self.center - closest;
        delta.length_squared() <= self.radius * self.radius
    }
}
