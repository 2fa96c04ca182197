use brew_engine::{EntityId, Host, System, TweenId};
use serde::{Deserialize, Serialize};
use crate::config::FxConfig;
use crate::flight::{self, FlightHandle};
use crate::motion;
use crate::zone::{self, CauldronZone};

/// The potion ingredient carried by a bottle. Flight and splash look the same
/// for every ingredient; it only shows up in logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u32,
    pub name: String,
}

impl Ingredient {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Cauldron geometry plus the bottle flight and its effects.
///
/// All animation is handed to the [`Host`]; this struct only keeps the zone
/// and tuning, so `update` has nothing to do.
#[derive(Debug, Clone, Default)]
pub struct CauldronFx {
    zone: CauldronZone,
    config: FxConfig,
}

impl CauldronFx {
    pub fn new(config: FxConfig) -> Self {
        Self { zone: config.cauldron, config }
    }

    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    /// Replace the drop target. No validation.
    pub fn set_cauldron_area(&mut self, x: f32, y: f32, radius: f32) {
        self.zone = CauldronZone::new(x, y, radius);
    }

    pub fn cauldron_info(&self) -> CauldronZone {
        self.zone
    }

    /// Inclusive: a point on the rim is in the cauldron.
    pub fn is_in_cauldron(&self, x: f32, y: f32) -> bool {
        self.zone.contains(x, y)
    }

    pub fn distance(&self, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
        zone::distance(x1, y1, x2, y2)
    }

    /// Throw `bottle` into the cauldron. See [`flight::launch`].
    pub fn fly_bottle_to_cauldron(
        &self,
        host: &mut dyn Host,
        bottle: EntityId,
        ingredient: &Ingredient,
        on_complete: impl FnOnce(&mut dyn Host) + 'static,
    ) -> Option<FlightHandle> {
        log::debug!("throwing {} (#{}) into the cauldron", ingredient.name, ingredient.id);
        flight::launch(host, bottle, self.zone.center(), &self.config, on_complete)
    }

    /// Stop an in-flight bottle. Returns how many tweens were dropped.
    pub fn cancel_flight(&self, host: &mut dyn Host, handle: FlightHandle) -> usize {
        flight::cancel(host, handle)
    }

    /// Drop `entity` to `target_y` with a bounce.
    pub fn apply_gravity(
        &self,
        host: &mut dyn Host,
        entity: EntityId,
        target_y: f32,
        callback: Option<Box<dyn FnOnce(&mut dyn Host)>>,
    ) -> Option<TweenId> {
        motion::apply_gravity(host, entity, target_y, &self.config.gravity, callback)
    }

    /// Shake with explicit strength and length (seconds).
    pub fn shake(&self, host: &mut dyn Host, entity: EntityId, intensity: f32, duration: f32) -> Option<TweenId> {
        motion::shake(host, entity, intensity, duration, &self.config.shake)
    }

    /// Shake with the configured strength and length.
    pub fn shake_default(&self, host: &mut dyn Host, entity: EntityId) -> Option<TweenId> {
        let shake = self.config.shake;
        motion::shake(host, entity, shake.intensity, shake.duration, &shake)
    }
}

impl System for CauldronFx {
    fn update(&mut self, _host: &mut dyn Host, _dt: f32) {}
}
