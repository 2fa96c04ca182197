use crate::components::entity::Entity;
use crate::components::shape::Shape;
use crate::renderer::circle_instance::{CircleBuffer, CircleInstance};

/// Collect every visible circle entity, lowest depth first.
pub fn build_circle_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut CircleBuffer,
) {
    buffer.clear();
    for entity in entities {
        if !entity.active || entity.alpha <= 0.0 {
            continue;
        }
        let (radius, color) = match &entity.shape {
            Some(Shape::Circle { radius, color }) => (*radius, *color),
            _ => continue,
        };
        buffer.push(CircleInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            radius: radius * entity.scale.x,
            alpha: entity.alpha,
            r: color.r,
            g: color.g,
            b: color.b,
            depth: entity.depth as f32,
        });
    }
    buffer.sort_by_depth();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::shape::Color;
    use glam::Vec2;

    #[test]
    fn sorted_by_depth_and_scaled() {
        let entities = vec![
            Entity::new(EntityId(1))
                .with_shape(Shape::circle(3.0, Color::from_hex(0x87CEEB)))
                .with_depth(99),
            Entity::new(EntityId(2))
                .with_shape(Shape::circle(8.0, Color::WHITE))
                .with_scale(Vec2::splat(1.5))
                .with_depth(98),
        ];
        let mut buffer = CircleBuffer::new();
        build_circle_buffer(entities.iter(), &mut buffer);

        let out = buffer.instances();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].depth, 98.0);
        assert_eq!(out[0].radius, 12.0);
        assert_eq!(out[1].radius, 3.0);
    }

    #[test]
    fn skips_images_inactive_and_faded() {
        let mut inactive = Entity::new(EntityId(2)).with_shape(Shape::circle(1.0, Color::WHITE));
        inactive.active = false;
        let entities = vec![
            Entity::new(EntityId(1)).with_shape(Shape::image("bottle_red")),
            inactive,
            Entity::new(EntityId(3)).with_shape(Shape::circle(1.0, Color::WHITE)).with_alpha(0.0),
            Entity::new(EntityId(4)).with_shape(Shape::circle(1.0, Color::WHITE)),
        ];
        let mut buffer = CircleBuffer::new();
        build_circle_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
    }
}
