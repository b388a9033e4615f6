use bevy::math::bounding::{BoundingSphere, RayCast3d};
use bevy::prelude::*;

/// Bounding sphere a line trace can hit, centred on the entity's translation.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Traceable {
    pub radius: f32,
}

impl Traceable {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    pub fn bounds(&self, center: Vec3) -> BoundingSphere {
        BoundingSphere::new(center, self.radius)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceHit {
    pub entity: Entity,
    pub point: Vec3,
    pub distance: f32,
}

/// Nearest sphere hit along `ray`, up to `max_distance`.
///
/// Rays starting inside a sphere hit it at the origin.
pub fn line_trace(
    ray: Ray3d,
    max_distance: f32,
    candidates: impl IntoIterator<Item = (Entity, Vec3, Traceable)>,
) -> Option<TraceHit> {
    let cast = RayCast3d::from_ray(ray, max_distance);

    candidates
        .into_iter()
        .filter_map(|(entity, center, traceable)| {
            let distance = cast.sphere_intersection_at(&traceable.bounds(center))?;
            Some(TraceHit {
                entity,
                point: ray.get_point(distance),
                distance,
            })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
