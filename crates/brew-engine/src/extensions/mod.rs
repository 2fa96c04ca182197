// extensions/mod.rs
//
// Animation layer. Decoupled from Entity/Scene internals except through
// EntityId lookups, so the Stage owns scheduling and the math stays testable.

pub mod easing;
pub mod tween;

pub use easing::{Easing, UnknownEasing, lerp, lerp_vec2, ease, ease_vec2};
pub use tween::{
    Callback, Completion, Finished, Tween, TweenGroup, TweenId, TweenState, TweenTarget,
};
