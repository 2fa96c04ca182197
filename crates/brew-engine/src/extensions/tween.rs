// extensions/tween.rs
//
// Tween registry: animates entity fields by EntityId.
// It never calls back into the host itself: `tick` applies values and hands
// finished tweens back to the Stage, which then runs their completions with
// full `&mut dyn Host` access (so a completion may schedule the next leg).
//
// Usage:
//   let mut tweens = TweenState::new();
//   tweens.add(entity_id, Tween::position(from, to, 0.4, Easing::CubicOut));
//   for done in tweens.tick(dt, &mut scene) { /* run done.on_complete */ }

use std::collections::BTreeMap;
use std::fmt;
use glam::Vec2;
use crate::api::host::Host;
use crate::api::types::EntityId;
use crate::core::scene::Scene;
use super::easing::{Easing, ease, ease_vec2};

/// One animated field with absolute start and end values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenTarget {
    /// Animate Entity.pos
    Position { from: Vec2, to: Vec2 },
    /// Animate Entity.pos.x only
    PositionX { from: f32, to: f32 },
    /// Animate Entity.pos.y only
    PositionY { from: f32, to: f32 },
    /// Animate Entity.rotation
    Rotation { from: f32, to: f32 },
    /// Animate Entity.scale
    Scale { from: Vec2, to: Vec2 },
    ScaleX { from: f32, to: f32 },
    ScaleY { from: f32, to: f32 },
    /// Animate Entity.alpha
    Alpha { from: f32, to: f32 },
}

impl TweenTarget {
    fn apply(&self, entity: &mut crate::components::entity::Entity, t: f32, easing: Easing) {
        match *self {
            TweenTarget::Position { from, to } => entity.pos = ease_vec2(from, to, t, easing),
            TweenTarget::PositionX { from, to } => entity.pos.x = ease(from, to, t, easing),
            TweenTarget::PositionY { from, to } => entity.pos.y = ease(from, to, t, easing),
            TweenTarget::Rotation { from, to } => entity.rotation = ease(from, to, t, easing),
            TweenTarget::Scale { from, to } => entity.scale = ease_vec2(from, to, t, easing),
            TweenTarget::ScaleX { from, to } => entity.scale.x = ease(from, to, t, easing),
            TweenTarget::ScaleY { from, to } => entity.scale.y = ease(from, to, t, easing),
            TweenTarget::Alpha { from, to } => entity.alpha = ease(from, to, t, easing),
        }
    }
}

/// Callback run once a tween finishes. Receives the host so it can chain work.
pub type Callback = Box<dyn FnOnce(&mut dyn Host)>;

/// Action taken when a tween finishes.
pub enum Completion {
    /// Remove the tweened entity from the scene (fire-and-forget effects).
    Despawn,
    /// Run arbitrary follow-up work.
    Call(Callback),
}

impl Completion {
    pub fn call(f: impl FnOnce(&mut dyn Host) + 'static) -> Self {
        Completion::Call(Box::new(f))
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::Despawn => f.write_str("Despawn"),
            Completion::Call(_) => f.write_str("Call(..)"),
        }
    }
}

/// Tag shared by tweens that belong to one logical animation, so they can be
/// cancelled together even if some of them are scheduled later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenGroup(pub u32);

/// A single tween animation. All tracks share one clock and one easing.
#[derive(Debug)]
pub struct Tween {
    pub tracks: Vec<TweenTarget>,
    /// Seconds for one pass (one direction when yoyo is on).
    pub duration: f32,
    pub elapsed: f32,
    pub easing: Easing,
    /// Play back to the start after each forward pass.
    pub yoyo: bool,
    /// Extra cycles to play after the first one.
    pub repeat: u32,
    pub group: Option<TweenGroup>,
    pub on_complete: Option<Completion>,
    forward: bool,
}

impl Tween {
    /// Tween a single field.
    pub fn new(target: TweenTarget, duration: f32, easing: Easing) -> Self {
        Self {
            tracks: vec![target],
            duration,
            elapsed: 0.0,
            easing,
            yoyo: false,
            repeat: 0,
            group: None,
            on_complete: None,
            forward: true,
        }
    }

    pub fn position(from: Vec2, to: Vec2, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::Position { from, to }, duration, easing)
    }

    pub fn position_x(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::PositionX { from, to }, duration, easing)
    }

    pub fn position_y(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::PositionY { from, to }, duration, easing)
    }

    pub fn rotation(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::Rotation { from, to }, duration, easing)
    }

    pub fn scale(from: Vec2, to: Vec2, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::Scale { from, to }, duration, easing)
    }

    pub fn alpha(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self::new(TweenTarget::Alpha { from, to }, duration, easing)
    }

    // -- Builder methods --

    /// Animate another field on the same clock.
    pub fn with(mut self, target: TweenTarget) -> Self {
        self.tracks.push(target);
        self
    }

    pub fn with_yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    pub fn with_repeat(mut self, repeat: u32) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_group(mut self, group: TweenGroup) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_on_complete(mut self, completion: Completion) -> Self {
        self.on_complete = Some(completion);
        self
    }

    /// Normalized progress of the current pass, [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Total seconds until completion.
    pub fn total_duration(&self) -> f32 {
        let passes = if self.yoyo { 2.0 } else { 1.0 };
        self.duration * passes * (self.repeat + 1) as f32
    }

    /// Step the clock, write the eased value, and report whether the tween is done.
    fn advance(&mut self, dt: f32, scene: &mut Scene, entity: EntityId) -> bool {
        self.elapsed += dt;

        let raw_t = if self.duration > 0.0 { self.elapsed / self.duration } else { 1.0 };
        let t = (if self.forward { raw_t } else { 1.0 - raw_t }).clamp(0.0, 1.0);

        if let Some(e) = scene.get_mut(entity) {
            for track in &self.tracks {
                track.apply(e, t, self.easing);
            }
        }

        if self.elapsed < self.duration {
            return false;
        }
        // Carry the overshoot into the next pass so long frames don't stretch repeats.
        self.elapsed = (self.elapsed - self.duration).max(0.0);

        if self.yoyo && self.forward {
            self.forward = false;
            return false;
        }
        if self.repeat > 0 {
            self.repeat -= 1;
            self.forward = true;
            return false;
        }
        true
    }
}

/// Handle to a tween for later reference.
/// Ids grow monotonically, so ordering by id is ordering by scheduling time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(pub u32);

/// A tween that finished during `tick`, handed back with its completion.
#[derive(Debug)]
pub struct Finished {
    pub id: TweenId,
    pub entity: EntityId,
    pub on_complete: Option<Completion>,
}

/// Manages all active tweens.
#[derive(Debug, Default)]
pub struct TweenState {
    tweens: BTreeMap<TweenId, (EntityId, Tween)>,
    next_id: u32,
    next_group: u32,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tween for an entity. Returns a handle for later control.
    pub fn add(&mut self, entity: EntityId, tween: Tween) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.insert(id, (entity, tween));
        id
    }

    /// Allocate a fresh group tag.
    pub fn new_group(&mut self) -> TweenGroup {
        let group = TweenGroup(self.next_group);
        self.next_group += 1;
        group
    }

    /// Remove a tween by handle. Its completion is dropped unrun.
    pub fn remove(&mut self, id: TweenId) -> bool {
        self.tweens.remove(&id).is_some()
    }

    /// Remove every tween tagged with `group`. Returns how many were removed.
    pub fn remove_group(&mut self, group: TweenGroup) -> usize {
        let before = self.tweens.len();
        self.tweens.retain(|_, (_, t)| t.group != Some(group));
        before - self.tweens.len()
    }

    /// Remove all tweens for an entity.
    pub fn remove_entity(&mut self, entity: EntityId) -> usize {
        let before = self.tweens.len();
        self.tweens.retain(|_, (e, _)| *e != entity);
        before - self.tweens.len()
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.get(&id).map(|(_, t)| t)
    }

    pub fn get_mut(&mut self, id: TweenId) -> Option<&mut Tween> {
        self.tweens.get_mut(&id).map(|(_, t)| t)
    }

    /// Whether any tween is still animating `entity`.
    pub fn is_animating(&self, entity: EntityId) -> bool {
        self.tweens.values().any(|(e, _)| *e == entity)
    }

    /// Advance all tweens and apply them to entities in the scene.
    /// Finished tweens are removed and returned in scheduling order.
    pub fn tick(&mut self, dt: f32, scene: &mut Scene) -> Vec<Finished> {
        let mut done = Vec::new();
        for (&id, (entity, tween)) in self.tweens.iter_mut() {
            if tween.advance(dt, scene, *entity) {
                done.push(id);
            }
        }

        done.into_iter()
            .filter_map(|id| self.tweens.remove(&id).map(|(entity, tween)| (id, entity, tween)))
            .map(|(id, entity, tween)| {
                log::trace!("tween {:?} on {:?} finished", id, entity);
                Finished { id, entity, on_complete: tween.on_complete }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }
}
