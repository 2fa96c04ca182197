use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::shape::Color;
use crate::extensions::tween::{Tween, TweenGroup, TweenId};

/// Schedules tweens. Completion callbacks run later, from the host's own tick.
pub trait Animator {
    fn schedule(&mut self, entity: EntityId, tween: Tween) -> TweenId;

    /// Drop a pending tween without running its completion.
    fn cancel(&mut self, id: TweenId) -> bool;

    fn new_group(&mut self) -> TweenGroup;

    /// Drop every pending tween of a group. Returns how many were dropped.
    fn cancel_group(&mut self, group: TweenGroup) -> usize;
}

/// Owns drawable entities.
pub trait Canvas {
    /// Spawn a filled circle. The caller keeps the id if it wants to tween it.
    fn spawn_circle(&mut self, pos: Vec2, radius: f32, color: Color, alpha: f32, depth: i32) -> EntityId;

    fn despawn(&mut self, id: EntityId) -> bool;

    fn entity(&self, id: EntityId) -> Option<&Entity>;

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity>;
}

/// Everything an effect or a completion callback may touch.
pub trait Host: Animator + Canvas {
    /// Uniform float in [0, 1).
    fn random(&mut self) -> f32;
}

/// A per-frame participant driven by the host loop.
pub trait System {
    fn update(&mut self, host: &mut dyn Host, dt: f32);
}
