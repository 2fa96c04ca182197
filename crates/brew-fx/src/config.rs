//! Tuning for the flight and its effects, loadable from the game's JSON.

use brew_engine::{Color, Easing};
use serde::{Deserialize, Serialize};
use crate::zone::CauldronZone;

/// All knobs of the cauldron effects. Every section falls back to its defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    pub cauldron: CauldronZone,
    pub flight: FlightConfig,
    pub splash: SplashConfig,
    pub bubble: BubbleConfig,
    pub gravity: GravityConfig,
    pub shake: ShakeConfig,
}

impl FxConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Bottle flight timings. Spin and shrink run on their own clocks; they only
/// line up with the two legs because the defaults add up to the same 0.7 s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// How far the apex sits above the higher endpoint.
    pub apex_lift: f32,
    pub rise_duration: f32,
    pub rise_easing: Easing,
    pub fall_duration: f32,
    pub fall_easing: Easing,
    pub spin_duration: f32,
    /// Rotation the bottle ends on, in radians.
    pub spin_to: f32,
    pub shrink_duration: f32,
    /// Final scale on both axes, relative to the bottle's native size.
    pub shrink_to: f32,
    pub shrink_easing: Easing,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            apex_lift: 100.0,
            rise_duration: 0.4,
            rise_easing: Easing::CubicOut,
            fall_duration: 0.3,
            fall_easing: Easing::CubicIn,
            spin_duration: 0.7,
            spin_to: std::f32::consts::TAU,
            shrink_duration: 0.7,
            shrink_to: 0.2,
            shrink_easing: Easing::CubicOut,
        }
    }
}

/// Droplets thrown out when a bottle lands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    pub count: u32,
    pub radius: f32,
    pub color: Color,
    pub alpha: f32,
    pub depth: i32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_duration: f32,
    pub max_duration: f32,
    pub easing: Easing,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            count: 6,
            radius: 3.0,
            color: Color::from_hex(0x87CEEB),
            alpha: 0.8,
            depth: 99,
            min_distance: 20.0,
            max_distance: 40.0,
            min_duration: 0.3,
            max_duration: 0.5,
            easing: Easing::CubicOut,
        }
    }
}

/// The single bubble that rises out of a splash.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleConfig {
    pub radius: f32,
    pub color: Color,
    pub alpha: f32,
    pub depth: i32,
    pub rise: f32,
    pub grow_to: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            radius: 8.0,
            color: Color::WHITE,
            alpha: 0.6,
            depth: 98,
            rise: 30.0,
            grow_to: 1.5,
            duration: 0.5,
            easing: Easing::QuadOut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityConfig {
    pub duration: f32,
    pub easing: Easing,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            duration: 0.5,
            easing: Easing::BounceOut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeConfig {
    /// Default sideways offset.
    pub intensity: f32,
    /// Default total length in seconds.
    pub duration: f32,
    /// Seconds for one direction of a wobble.
    pub step: f32,
    /// Milliseconds of requested duration per extra wobble.
    pub repeat_period_ms: u32,
    pub easing: Easing,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            intensity: 5.0,
            duration: 0.3,
            step: 0.05,
            repeat_period_ms: 100,
            easing: Easing::CubicOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = FxConfig::from_json("{}").unwrap();
        assert_eq!(config, FxConfig::default());
        assert_eq!(config.cauldron, CauldronZone::new(400.0, 350.0, 80.0));
        assert_eq!(config.splash.count, 6);
    }

    #[test]
    fn partial_override_with_easing_names() {
        let json = r#"{
            "cauldron": { "x": 120.0, "y": 90.0, "radius": 40.0 },
            "flight": { "rise_duration": 0.5, "rise_easing": "Power1.out" },
            "gravity": { "easing": "Bounce.out" }
        }"#;
        let config = FxConfig::from_json(json).unwrap();
        assert_eq!(config.cauldron.radius, 40.0);
        assert_eq!(config.flight.rise_duration, 0.5);
        assert_eq!(config.flight.rise_easing, Easing::QuadOut);
        assert_eq!(config.flight.fall_duration, 0.3);
        assert_eq!(config.gravity.easing, Easing::BounceOut);
    }

    #[test]
    fn unknown_easing_is_rejected() {
        let err = FxConfig::from_json(r#"{ "shake": { "easing": "Jiggle" } }"#).unwrap_err();
        assert!(err.to_string().contains("Jiggle"));
    }
}
