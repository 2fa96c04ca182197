use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Euclidean distance between two points.
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    Vec2::new(x1, y1).distance(Vec2::new(x2, y2))
}

/// The circular drop target. Radius is not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CauldronZone {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl CauldronZone {
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Closed disk: points exactly on the rim count as inside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        distance(x, y, self.x, self.y) <= self.radius
    }
}

impl Default for CauldronZone {
    fn default() -> Self {
        Self::new(400.0, 350.0, 80.0)
    }
}
