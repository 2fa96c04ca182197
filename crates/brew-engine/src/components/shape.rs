use serde::{Deserialize, Serialize};

/// RGB color, components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as f32 / 255.0,
            g: ((rgb >> 8) & 0xFF) as f32 / 255.0,
            b: (rgb & 0xFF) as f32 / 255.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// What an entity looks like.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled circle, drawn from the circle buffer.
    Circle { radius: f32, color: Color },
    /// Textured quad owned by the page (bottles, cauldron art).
    Image { key: String },
}

impl Shape {
    pub fn circle(radius: f32, color: Color) -> Self {
        Shape::Circle { radius, color }
    }

    pub fn image(key: impl Into<String>) -> Self {
        Shape::Image { key: key.into() }
    }
}
