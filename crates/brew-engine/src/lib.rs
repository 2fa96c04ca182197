pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::host::{Animator, Canvas, Host, System};
pub use api::stage::{Stage, StageConfig};
pub use api::types::EntityId;
pub use components::entity::Entity;
pub use components::shape::{Color, Shape};
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use renderer::circle_instance::{CircleBuffer, CircleInstance};
pub use systems::circle_render::build_circle_buffer;

pub use extensions::{
    Easing, UnknownEasing, lerp, lerp_vec2, ease, ease_vec2,
    Callback, Completion, Finished, Tween, TweenGroup, TweenId, TweenState, TweenTarget,
};
