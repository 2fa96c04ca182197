//! Small one-off motions: a bouncy drop and a sideways shake.

use brew_engine::{Completion, EntityId, Host, Tween, TweenId};
use glam::Vec2;
use crate::config::{GravityConfig, ShakeConfig};

/// Extra wobbles for a shake lasting `duration` seconds: whole milliseconds
/// divided by `period_ms`, rounded down. A zero period means no extra wobbles.
pub fn shake_repeats(duration: f32, period_ms: u32) -> u32 {
    if period_ms == 0 {
        return 0;
    }
    let millis = (duration.max(0.0) * 1000.0).round() as u32;
    millis / period_ms
}

/// Drop `entity` to `target_y` with a bounce on landing.
pub fn apply_gravity(
    host: &mut dyn Host,
    entity: EntityId,
    target_y: f32,
    config: &GravityConfig,
    callback: Option<Box<dyn FnOnce(&mut dyn Host)>>,
) -> Option<TweenId> {
    let Some(start_y) = host.entity(entity).map(|e| e.pos.y) else {
        log::warn!("gravity: no entity {:?}", entity);
        return None;
    };
    let mut tween = Tween::position_y(start_y, target_y, config.duration, config.easing);
    if let Some(callback) = callback {
        tween = tween.with_on_complete(Completion::Call(callback));
    }
    Some(host.schedule(entity, tween))
}

/// Wobble `entity` sideways by `intensity`, then put it back exactly where it was.
pub fn shake(
    host: &mut dyn Host,
    entity: EntityId,
    intensity: f32,
    duration: f32,
    config: &ShakeConfig,
) -> Option<TweenId> {
    let Some(origin) = host.entity(entity).map(|e| e.pos) else {
        log::warn!("shake: no entity {:?}", entity);
        return None;
    };
    let repeats = shake_repeats(duration, config.repeat_period_ms);
    let tween = Tween::position_x(origin.x, origin.x + intensity, config.step, config.easing)
        .with_yoyo()
        .with_repeat(repeats)
        .with_on_complete(Completion::call(move |host| restore(host, entity, origin)));
    Some(host.schedule(entity, tween))
}

fn restore(host: &mut dyn Host, entity: EntityId, origin: Vec2) {
    if let Some(e) = host.entity_mut(entity) {
        e.set_position(origin);
    }
}
