use glam::Vec2;
use serde::{Deserialize, Serialize};
use crate::api::host::{Animator, Canvas, Host, System};
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::shape::{Color, Shape};
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::core::time::FixedTimestep;
use crate::extensions::tween::{Completion, Tween, TweenGroup, TweenId, TweenState};
use crate::renderer::circle_instance::CircleBuffer;
use crate::systems::circle_render::build_circle_buffer;

/// Configuration for a stage, provided by the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// RNG seed. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Initial entity capacity (default: 256).
    pub scene_capacity: usize,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            seed: None,
            scene_capacity: 256,
        }
    }
}

impl StageConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The concrete host: scene, tweens, randomness and the fixed-step clock.
pub struct Stage {
    pub scene: Scene,
    tweens: TweenState,
    rng: Rng,
    circles: CircleBuffer,
    timestep: FixedTimestep,
    next_id: u32,
}

impl Stage {
    pub fn new(config: &StageConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => Rng::new(seed),
            None => Rng::from_entropy(),
        };
        Self {
            scene: Scene::with_capacity(config.scene_capacity),
            tweens: TweenState::new(),
            rng,
            circles: CircleBuffer::new(),
            timestep: FixedTimestep::new(config.fixed_dt),
            next_id: 1,
        }
    }

    /// Stage with a fixed RNG seed, for reproducible effects.
    pub fn seeded(seed: u64) -> Self {
        Self::new(&StageConfig { seed: Some(seed), ..StageConfig::default() })
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Spawn an entity built by the caller, assigning it a fresh ID.
    pub fn spawn(&mut self, build: impl FnOnce(Entity) -> Entity) -> EntityId {
        let id = self.next_id();
        self.scene.spawn(build(Entity::new(id)));
        id
    }

    pub fn tweens(&self) -> &TweenState {
        &self.tweens
    }

    pub fn tweens_mut(&mut self) -> &mut TweenState {
        &mut self.tweens
    }

    /// Advance every tween by `dt` seconds, then run the completions of the
    /// ones that finished, in the order they were scheduled.
    pub fn tick(&mut self, dt: f32) {
        let finished = self.tweens.tick(dt, &mut self.scene);
        for done in finished {
            match done.on_complete {
                None => {}
                Some(Completion::Despawn) => {
                    Canvas::despawn(self, done.entity);
                }
                Some(Completion::Call(callback)) => callback(self),
            }
        }
    }

    /// Feed a variable frame time. Runs `tick` once per whole fixed step and
    /// returns how many steps ran.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let steps = self.timestep.accumulate(frame_dt);
        let dt = self.timestep.dt();
        for _ in 0..steps {
            self.tick(dt);
        }
        steps
    }

    /// Like `advance`, but lets a system update before each fixed step.
    pub fn advance_with(&mut self, system: &mut dyn System, frame_dt: f32) -> u32 {
        let steps = self.timestep.accumulate(frame_dt);
        let dt = self.timestep.dt();
        for _ in 0..steps {
            system.update(self, dt);
            self.tick(dt);
        }
        steps
    }

    /// Rebuild and return this frame's depth-sorted circle list.
    pub fn build_circles(&mut self) -> &CircleBuffer {
        build_circle_buffer(self.scene.iter(), &mut self.circles);
        &self.circles
    }

    /// Drop every entity and tween.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.tweens.clear();
        self.timestep.reset();
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(&StageConfig::default())
    }
}

impl Animator for Stage {
    fn schedule(&mut self, entity: EntityId, tween: Tween) -> TweenId {
        self.tweens.add(entity, tween)
    }

    fn cancel(&mut self, id: TweenId) -> bool {
        self.tweens.remove(id)
    }

    fn new_group(&mut self) -> TweenGroup {
        self.tweens.new_group()
    }

    fn cancel_group(&mut self, group: TweenGroup) -> usize {
        self.tweens.remove_group(group)
    }
}

impl Canvas for Stage {
    fn spawn_circle(&mut self, pos: Vec2, radius: f32, color: Color, alpha: f32, depth: i32) -> EntityId {
        self.spawn(|e| {
            e.with_pos(pos)
                .with_shape(Shape::circle(radius, color))
                .with_alpha(alpha)
                .with_depth(depth)
        })
    }

    /// Removes the entity and any tween still driving it.
    fn despawn(&mut self, id: EntityId) -> bool {
        self.tweens.remove_entity(id);
        self.scene.despawn(id).is_some()
    }

    fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.scene.get(id)
    }

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.scene.get_mut(id)
    }
}

impl Host for Stage {
    fn random(&mut self) -> f32 {
        self.rng.next_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use crate::extensions::easing::Easing;

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config = StageConfig::from_json(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.scene_capacity, 256);
        assert!((config.fixed_dt - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn despawn_completion_removes_entity() {
        let mut stage = Stage::seeded(1);
        let id = stage.spawn_circle(Vec2::ZERO, 3.0, Color::WHITE, 0.8, 99);
        stage.schedule(
            id,
            Tween::alpha(0.8, 0.0, 0.3, Easing::CubicOut).with_on_complete(Completion::Despawn),
        );
        stage.tick(0.2);
        assert!(stage.entity(id).is_some());
        stage.tick(0.2);
        assert!(stage.entity(id).is_none());
        assert!(stage.tweens().is_empty());
    }

    #[test]
    fn callback_can_chain_another_tween() {
        let mut stage = Stage::seeded(1);
        let id = stage.spawn(|e| e.with_pos(Vec2::ZERO));
        let hits = Rc::new(Cell::new(0));
        let seen = hits.clone();
        stage.schedule(
            id,
            Tween::position_x(0.0, 10.0, 0.5, Easing::Linear).with_on_complete(Completion::call(
                move |host| {
                    host.schedule(
                        id,
                        Tween::position_x(10.0, 20.0, 0.5, Easing::Linear).with_on_complete(
                            Completion::call(move |_| seen.set(seen.get() + 1)),
                        ),
                    );
                },
            )),
        );

        stage.tick(0.5);
        assert_eq!(stage.entity(id).unwrap().pos.x, 10.0);
        assert_eq!(hits.get(), 0);
        stage.tick(0.5);
        assert_eq!(stage.entity(id).unwrap().pos.x, 20.0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn despawn_completion_drops_sibling_tweens() {
        let mut stage = Stage::seeded(1);
        let id = stage.spawn_circle(Vec2::ZERO, 3.0, Color::WHITE, 0.8, 99);
        stage.schedule(
            id,
            Tween::alpha(0.8, 0.0, 0.3, Easing::Linear).with_on_complete(Completion::Despawn),
        );
        let spin = stage.schedule(id, Tween::rotation(0.0, 100.0, 60.0, Easing::Linear));

        for _ in 0..60 {
            stage.tick(1.0 / 60.0);
        }
        assert!(stage.entity(id).is_none());
        assert!(stage.tweens().get(spin).is_none());
        assert!(stage.tweens().is_empty());
    }

    #[test]
    fn cancel_group_drops_completion() {
        let mut stage = Stage::seeded(1);
        let id = stage.spawn(|e| e);
        let group = stage.new_group();
        let hit = Rc::new(Cell::new(false));
        let seen = hit.clone();
        stage.schedule(
            id,
            Tween::alpha(1.0, 0.0, 0.1, Easing::Linear)
                .with_group(group)
                .with_on_complete(Completion::call(move |_| seen.set(true))),
        );
        assert_eq!(stage.cancel_group(group), 1);
        stage.tick(1.0);
        assert!(!hit.get());
    }

    struct Counter(u32);

    impl System for Counter {
        fn update(&mut self, _host: &mut dyn Host, _dt: f32) {
            self.0 += 1;
        }
    }

    #[test]
    fn advance_with_runs_system_per_step() {
        let mut stage = Stage::new(&StageConfig { fixed_dt: 0.1, seed: Some(3), ..Default::default() });
        let mut counter = Counter(0);
        assert_eq!(stage.advance_with(&mut counter, 0.35), 3);
        assert_eq!(counter.0, 3);
        assert_eq!(stage.advance(0.06), 1);
    }

    #[test]
    fn circles_are_built_from_scene() {
        let mut stage = Stage::seeded(1);
        stage.spawn_circle(Vec2::new(1.0, 2.0), 8.0, Color::WHITE, 0.6, 98);
        stage.spawn(|e| e.with_shape(Shape::image("bottle")));
        assert_eq!(stage.build_circles().instance_count(), 1);
    }
}
