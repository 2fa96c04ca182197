//! Bottle flight: two eased legs over an apex, with spin and shrink running
//! alongside on their own clocks.

use brew_engine::{Completion, Easing, EntityId, Host, Tween, TweenGroup};
use glam::Vec2;
use crate::config::FxConfig;
use crate::splash::spawn_splash;

/// The three points of an arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightPlan {
    pub start: Vec2,
    pub apex: Vec2,
    pub end: Vec2,
}

impl FlightPlan {
    /// Apex sits halfway across, `lift` above whichever endpoint is higher
    /// on screen (smaller y).
    pub fn new(start: Vec2, end: Vec2, lift: f32) -> Self {
        let apex = Vec2::new((start.x + end.x) / 2.0, start.y.min(end.y) - lift);
        Self { start, apex, end }
    }
}

/// Returned by a launch so the caller can cancel the flight later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightHandle {
    pub bottle: EntityId,
    pub group: TweenGroup,
}

/// Fly `bottle` from where it stands to `target`.
///
/// `on_complete` runs once, after the second leg has landed and the splash has
/// been spawned. Spin and shrink are not waited on. Returns `None` (and drops
/// `on_complete`) when the bottle isn't in the scene.
pub fn launch(
    host: &mut dyn Host,
    bottle: EntityId,
    target: Vec2,
    config: &FxConfig,
    on_complete: impl FnOnce(&mut dyn Host) + 'static,
) -> Option<FlightHandle> {
    let Some((start, rotation, scale)) = host.entity(bottle).map(|e| (e.pos, e.rotation, e.scale)) else {
        log::warn!("flight: no entity {:?}", bottle);
        return None;
    };

    let flight = config.flight;
    let splash = config.splash;
    let bubble = config.bubble;
    let plan = FlightPlan::new(start, target, flight.apex_lift);
    let group = host.new_group();

    let fall = Tween::position(plan.apex, plan.end, flight.fall_duration, flight.fall_easing)
        .with_group(group)
        .with_on_complete(Completion::call(move |host: &mut dyn Host| {
            log::debug!("flight {:?}: landed", group);
            spawn_splash(host, plan.end, &splash, &bubble);
            on_complete(host);
        }));

    host.schedule(
        bottle,
        Tween::position(plan.start, plan.apex, flight.rise_duration, flight.rise_easing)
            .with_group(group)
            .with_on_complete(Completion::call(move |host: &mut dyn Host| {
                log::debug!("flight {:?}: over the apex", group);
                host.schedule(bottle, fall);
            })),
    );
    host.schedule(
        bottle,
        Tween::rotation(rotation, flight.spin_to, flight.spin_duration, Easing::Linear)
            .with_group(group),
    );
    host.schedule(
        bottle,
        Tween::scale(scale, Vec2::splat(flight.shrink_to), flight.shrink_duration, flight.shrink_easing)
            .with_group(group),
    );

    log::debug!(
        "flight {:?}: {:?} ({:.0}, {:.0}) -> apex ({:.0}, {:.0}) -> ({:.0}, {:.0})",
        group, bottle, plan.start.x, plan.start.y, plan.apex.x, plan.apex.y, plan.end.x, plan.end.y,
    );
    Some(FlightHandle { bottle, group })
}

/// Stop a flight wherever it is. Its completion will never run.
pub fn cancel(host: &mut dyn Host, handle: FlightHandle) -> usize {
    let dropped = host.cancel_group(handle.group);
    log::debug!("flight {:?}: cancelled, {} tweens dropped", handle.group, dropped);
    dropped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apex_is_above_the_higher_end() {
        let plan = FlightPlan::new(Vec2::new(100.0, 100.0), Vec2::new(400.0, 350.0), 100.0);
        assert_eq!(plan.apex, Vec2::new(250.0, 0.0));

        let plan = FlightPlan::new(Vec2::new(600.0, 500.0), Vec2::new(400.0, 350.0), 100.0);
        assert_eq!(plan.apex, Vec2::new(500.0, 250.0));
    }

    #[test]
    fn apex_for_level_endpoints() {
        let plan = FlightPlan::new(Vec2::new(0.0, 300.0), Vec2::new(200.0, 300.0), 40.0);
        assert_eq!(plan.apex, Vec2::new(100.0, 260.0));
        assert_eq!(plan.start, Vec2::new(0.0, 300.0));
        assert_eq!(plan.end, Vec2::new(200.0, 300.0));
    }
}
