use bevy::prelude::*;

use crate::components::{line_trace, LineTraceEvent, TraceRequest, Traceable};
use crate::resources::ControllerConfig;

/// Fires a line trace for each request, deprojecting viewport positions
/// through the active camera.
pub fn line_trace_system(
    mut requests: EventReader<TraceRequest>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    targets: Query<(Entity, &GlobalTransform, &Traceable)>,
    config: Res<ControllerConfig>,
    mut traces: EventWriter<LineTraceEvent>,
) {
    for request in requests.read() {
        let ray = match *request {
            TraceRequest::Ray(ray) => Some(ray),
            TraceRequest::Viewport(position) => cameras
                .iter()
                .filter(|(camera, _)| camera.is_active)
                .find_map(|(camera, transform)| camera.viewport_to_world(transform, position).ok()),
        };
        let Some(ray) = ray else {
            warn!("No active camera to trace {:?}", request);
            continue;
        };

        let hit = line_trace(
            ray,
            config.trace_distance,
            targets
                .iter()
                .map(|(entity, transform, traceable)| (entity, transform.translation(), *traceable)),
        );

        match &hit {
            Some(hit) => info!(
                "Trace hit {} at {} ({:.1} units)",
                hit.entity, hit.point, hit.distance
            ),
            None => info!("Trace miss from {} towards {}", ray.origin, *ray.direction),
        }

        traces.send(LineTraceEvent {
            origin: ray.origin,
            direction: *ray.direction,
            hit,
        });
    }
}
