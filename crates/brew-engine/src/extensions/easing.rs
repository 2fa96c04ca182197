// extensions/easing.rs
//
// Easing curves for tweens. Pure math, no Scene access.
// Names follow the page-side convention ("Power2.out", "Bounce.out") so tuning
// files written for the old front end still parse.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Easing {
    /// Constant velocity.
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    /// Overshoot then settle.
    BackIn,
    BackOut,
    BackInOut,
    /// Lands and bounces, used for falling pieces.
    BounceOut,
    ElasticOut,
}

#[derive(Clone, Copy)]
enum Shape {
    In,
    Out,
    InOut,
}

impl Easing {
    /// Map normalized time `t` in [0, 1] to progress.
    /// Back and Elastic may leave [0, 1] in the middle, every curve hits 0 and 1 at the ends.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,

            Easing::QuadIn => power(t, 2, Shape::In),
            Easing::QuadOut => power(t, 2, Shape::Out),
            Easing::QuadInOut => power(t, 2, Shape::InOut),
            Easing::CubicIn => power(t, 3, Shape::In),
            Easing::CubicOut => power(t, 3, Shape::Out),
            Easing::CubicInOut => power(t, 3, Shape::InOut),
            Easing::QuartIn => power(t, 4, Shape::In),
            Easing::QuartOut => power(t, 4, Shape::Out),
            Easing::QuartInOut => power(t, 4, Shape::InOut),

            Easing::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Easing::SineOut => (t * PI / 2.0).sin(),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,

            Easing::ExpoIn if t == 0.0 => 0.0,
            Easing::ExpoIn => 2.0_f32.powf(10.0 * t - 10.0),
            Easing::ExpoOut if t == 1.0 => 1.0,
            Easing::ExpoOut => 1.0 - 2.0_f32.powf(-10.0 * t),
            Easing::ExpoInOut if t == 0.0 || t == 1.0 => t,
            Easing::ExpoInOut if t < 0.5 => 2.0_f32.powf(20.0 * t - 10.0) / 2.0,
            Easing::ExpoInOut => (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0,

            Easing::BackIn => back_in(t),
            Easing::BackOut => 1.0 - back_in(1.0 - t),
            Easing::BackInOut => {
                const C2: f32 = BACK_OVERSHOOT * 1.525;
                if t < 0.5 {
                    (2.0 * t).powi(2) * ((C2 + 1.0) * 2.0 * t - C2) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((C2 + 1.0) * (t * 2.0 - 2.0) + C2) + 2.0) / 2.0
                }
            }

            Easing::BounceOut => bounce_out(t),

            Easing::ElasticOut if t == 0.0 || t == 1.0 => t,
            Easing::ElasticOut => {
                const C4: f32 = (2.0 * PI) / 3.0;
                2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
            }
        }
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "Linear",
            Easing::QuadIn => "Quad.in",
            Easing::QuadOut => "Quad.out",
            Easing::QuadInOut => "Quad.inOut",
            Easing::CubicIn => "Cubic.in",
            Easing::CubicOut => "Cubic.out",
            Easing::CubicInOut => "Cubic.inOut",
            Easing::QuartIn => "Quart.in",
            Easing::QuartOut => "Quart.out",
            Easing::QuartInOut => "Quart.inOut",
            Easing::SineIn => "Sine.in",
            Easing::SineOut => "Sine.out",
            Easing::SineInOut => "Sine.inOut",
            Easing::ExpoIn => "Expo.in",
            Easing::ExpoOut => "Expo.out",
            Easing::ExpoInOut => "Expo.inOut",
            Easing::BackIn => "Back.in",
            Easing::BackOut => "Back.out",
            Easing::BackInOut => "Back.inOut",
            Easing::BounceOut => "Bounce.out",
            Easing::ElasticOut => "Elastic.out",
        }
    }
}

const BACK_OVERSHOOT: f32 = 1.70158;

#[inline]
fn power(t: f32, p: i32, shape: Shape) -> f32 {
    match shape {
        Shape::In => t.powi(p),
        Shape::Out => 1.0 - (1.0 - t).powi(p),
        Shape::InOut if t < 0.5 => 2.0_f32.powi(p - 1) * t.powi(p),
        Shape::InOut => 1.0 - (-2.0 * t + 2.0).powi(p) / 2.0,
    }
}

#[inline]
fn back_in(t: f32) -> f32 {
    (BACK_OVERSHOOT + 1.0) * t * t * t - BACK_OVERSHOOT * t * t
}

#[inline]
fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    let (t, floor) = if t < 1.0 / D1 {
        (t, 0.0)
    } else if t < 2.0 / D1 {
        (t - 1.5 / D1, 0.75)
    } else if t < 2.5 / D1 {
        (t - 2.25 / D1, 0.9375)
    } else {
        (t - 2.625 / D1, 0.984375)
    };
    N1 * t * t + floor
}

/// Unknown easing name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEasing(pub String);

impl fmt::Display for UnknownEasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown easing '{}'", self.0)
    }
}

impl std::error::Error for UnknownEasing {}

impl FromStr for Easing {
    type Err = UnknownEasing;

    /// Accepts `Family.in|out|inOut` (case-insensitive), where Family is one of
    /// Quad, Cubic, Quart, Sine, Expo, Back, Bounce, Elastic or the PowerN aliases
    /// (Power1 = Quad, Power2 = Cubic, Power3 = Quart). A bare family means `.out`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (family, dir) = lower.split_once('.').unwrap_or((lower.as_str(), "out"));
        let family = match family {
            "power0" | "linear" => return Ok(Easing::Linear),
            "power1" => "quad",
            "power2" => "cubic",
            "power3" => "quart",
            other => other,
        };
        let easing = match (family, dir) {
            ("quad", "in") => Easing::QuadIn,
            ("quad", "out") => Easing::QuadOut,
            ("quad", "inout") => Easing::QuadInOut,
            ("cubic", "in") => Easing::CubicIn,
            ("cubic", "out") => Easing::CubicOut,
            ("cubic", "inout") => Easing::CubicInOut,
            ("quart", "in") => Easing::QuartIn,
            ("quart", "out") => Easing::QuartOut,
            ("quart", "inout") => Easing::QuartInOut,
            ("sine", "in") => Easing::SineIn,
            ("sine", "out") => Easing::SineOut,
            ("sine", "inout") => Easing::SineInOut,
            ("expo", "in") => Easing::ExpoIn,
            ("expo", "out") => Easing::ExpoOut,
            ("expo", "inout") => Easing::ExpoInOut,
            ("back", "in") => Easing::BackIn,
            ("back", "out") => Easing::BackOut,
            ("back", "inout") => Easing::BackInOut,
            ("bounce", "out") => Easing::BounceOut,
            ("elastic", "out") => Easing::ElasticOut,
            _ => return Err(UnknownEasing(s.to_string())),
        };
        Ok(easing)
    }
}

impl TryFrom<String> for Easing {
    type Error = UnknownEasing;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Easing> for String {
    fn from(e: Easing) -> Self {
        e.name().to_string()
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: glam::Vec2, b: glam::Vec2, t: f32) -> glam::Vec2 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}

/// Interpolate Vec2 with easing.
#[inline]
pub fn ease_vec2(a: glam::Vec2, b: glam::Vec2, t: f32, easing: Easing) -> glam::Vec2 {
    lerp_vec2(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 21] = [
        Easing::Linear,
        Easing::QuadIn, Easing::QuadOut, Easing::QuadInOut,
        Easing::CubicIn, Easing::CubicOut, Easing::CubicInOut,
        Easing::QuartIn, Easing::QuartOut, Easing::QuartInOut,
        Easing::SineIn, Easing::SineOut, Easing::SineInOut,
        Easing::ExpoIn, Easing::ExpoOut, Easing::ExpoInOut,
        Easing::BackIn, Easing::BackOut, Easing::BackInOut,
        Easing::BounceOut, Easing::ElasticOut,
    ];

    #[test]
    fn every_curve_hits_both_ends() {
        for e in ALL {
            assert!(e.apply(0.0).abs() < 1e-4, "{:?} at 0 = {}", e, e.apply(0.0));
            assert!((e.apply(1.0) - 1.0).abs() < 1e-4, "{:?} at 1 = {}", e, e.apply(1.0));
        }
    }

    #[test]
    fn out_curves_decelerate_and_in_curves_accelerate() {
        assert!(Easing::CubicOut.apply(0.5) > 0.5);
        assert!(Easing::CubicIn.apply(0.5) < 0.5);
        assert!((Easing::QuadInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn back_out_overshoots() {
        assert!(Easing::BackOut.apply(0.7) > 1.0);
    }

    #[test]
    fn power_aliases_parse() {
        assert_eq!("Power2.out".parse::<Easing>(), Ok(Easing::CubicOut));
        assert_eq!("Power2.in".parse::<Easing>(), Ok(Easing::CubicIn));
        assert_eq!("Power2".parse::<Easing>(), Ok(Easing::CubicOut));
        assert_eq!("Power1.out".parse::<Easing>(), Ok(Easing::QuadOut));
        assert_eq!("Bounce.out".parse::<Easing>(), Ok(Easing::BounceOut));
        assert_eq!("Linear".parse::<Easing>(), Ok(Easing::Linear));
        assert!("Wobble.in".parse::<Easing>().is_err());
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for e in ALL {
            assert_eq!(e.name().parse::<Easing>(), Ok(e));
        }
    }

    #[test]
    fn ease_interpolates() {
        assert!((ease(100.0, 200.0, 0.5, Easing::Linear) - 150.0).abs() < 0.001);
    }
}
