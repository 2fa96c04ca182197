//! Arrival effects: droplets thrown outward plus one rising bubble.
//! Everything spawned here despawns itself when its tween ends.

use std::f32::consts::TAU;
use brew_engine::{Completion, EntityId, Host, Tween, TweenTarget};
use glam::Vec2;
use crate::config::{BubbleConfig, SplashConfig};

/// Where droplet `index` of `count` lands when thrown `distance` from `at`.
/// Droplets are spread evenly, the first one heading along +x.
pub fn droplet_target(at: Vec2, index: u32, count: u32, distance: f32) -> Vec2 {
    let angle = TAU / count.max(1) as f32 * index as f32;
    at + Vec2::from_angle(angle) * distance
}

/// Ids of one splash, valid until the effect finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct SplashIds {
    pub droplets: Vec<EntityId>,
    pub bubble: EntityId,
}

/// Throw `splash.count` droplets out of `at` and release a bubble there.
pub fn spawn_splash(
    host: &mut dyn Host,
    at: Vec2,
    splash: &SplashConfig,
    bubble: &BubbleConfig,
) -> SplashIds {
    let droplets = (0..splash.count)
        .map(|i| {
            let reach = splash.min_distance + host.random() * (splash.max_distance - splash.min_distance);
            let duration = splash.min_duration + host.random() * (splash.max_duration - splash.min_duration);
            let id = host.spawn_circle(at, splash.radius, splash.color, splash.alpha, splash.depth);
            host.schedule(
                id,
                Tween::position(at, droplet_target(at, i, splash.count, reach), duration, splash.easing)
                    .with(TweenTarget::Alpha { from: splash.alpha, to: 0.0 })
                    .with_on_complete(Completion::Despawn),
            );
            id
        })
        .collect();

    log::debug!("splash at ({:.1}, {:.1})", at.x, at.y);
    SplashIds {
        droplets,
        bubble: spawn_bubble(host, at, bubble),
    }
}

/// One translucent bubble that floats up, swells and fades out.
pub fn spawn_bubble(host: &mut dyn Host, at: Vec2, bubble: &BubbleConfig) -> EntityId {
    let id = host.spawn_circle(at, bubble.radius, bubble.color, bubble.alpha, bubble.depth);
    host.schedule(
        id,
        Tween::position_y(at.y, at.y - bubble.rise, bubble.duration, bubble.easing)
            .with(TweenTarget::Scale { from: Vec2::ONE, to: Vec2::splat(bubble.grow_to) })
            .with(TweenTarget::Alpha { from: bubble.alpha, to: 0.0 })
            .with_on_complete(Completion::Despawn),
    );
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use brew_engine::{Canvas, Stage};

    #[test]
    fn droplets_fan_out_evenly() {
        let at = Vec2::new(400.0, 350.0);
        let first = droplet_target(at, 0, 6, 20.0);
        assert!((first - Vec2::new(420.0, 350.0)).length() < 1e-4);

        let fourth = droplet_target(at, 3, 6, 30.0);
        assert!((fourth - Vec2::new(370.0, 350.0)).length() < 1e-3);

        for i in 0..6 {
            let d = droplet_target(at, i, 6, 25.0).distance(at);
            assert!((d - 25.0).abs() < 1e-3);
        }
    }

    #[test]
    fn splash_spawns_six_droplets_and_a_bubble() {
        let mut stage = Stage::seeded(11);
        let ids = spawn_splash(&mut stage, Vec2::new(400.0, 350.0), &SplashConfig::default(), &BubbleConfig::default());

        assert_eq!(ids.droplets.len(), 6);
        assert_eq!(stage.scene.len(), 7);
        assert_eq!(stage.tweens().len(), 7);
        for id in &ids.droplets {
            assert_eq!(stage.entity(*id).unwrap().depth, 99);
        }
        assert_eq!(stage.entity(ids.bubble).unwrap().depth, 98);
    }

    #[test]
    fn droplets_travel_within_reach_and_fade() {
        let mut stage = Stage::seeded(5);
        let at = Vec2::new(100.0, 100.0);
        let ids = spawn_splash(&mut stage, at, &SplashConfig::default(), &BubbleConfig::default());

        // Shortest possible droplet lasts 0.3 s, so all are still alive here.
        stage.tick(0.25);
        for (i, id) in ids.droplets.iter().enumerate() {
            let e = stage.entity(*id).unwrap();
            let offset = e.pos - at;
            assert!(offset.length() > 0.0 && offset.length() < 40.0);
            let expected = droplet_target(Vec2::ZERO, i as u32, 6, 1.0);
            assert!(offset.normalize().dot(expected) > 0.999, "droplet {} off its ray", i);
            assert!(e.alpha < 0.8);
        }
    }

    #[test]
    fn everything_cleans_itself_up() {
        let mut stage = Stage::seeded(99);
        spawn_splash(&mut stage, Vec2::new(10.0, 10.0), &SplashConfig::default(), &BubbleConfig::default());
        for _ in 0..40 {
            stage.tick(1.0 / 60.0);
        }
        assert!(stage.scene.is_empty());
        assert!(stage.tweens().is_empty());
    }

    #[test]
    fn bubble_rises_and_grows() {
        let mut stage = Stage::seeded(1);
        let config = BubbleConfig::default();
        let id = spawn_bubble(&mut stage, Vec2::new(50.0, 200.0), &config);

        stage.tick(0.4);
        let e = stage.entity(id).unwrap();
        assert!(e.pos.y < 200.0 && e.pos.y > 170.0);
        assert!(e.scale.x > 1.0 && e.scale.x < 1.5);

        stage.tick(0.1);
        assert!(stage.entity(id).is_none());
    }
}
