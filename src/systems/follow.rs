use bevy::prelude::*;

use crate::components::{CharacterMovement, ControlRotation, FollowPath};
use crate::resources::ControllerConfig;

/// Steers every following character towards its current path marker.
pub fn follow_path_system(
    time: Res<Time>,
    config: Res<ControllerConfig>,
    mut paths: Query<(Entity, &mut FollowPath)>,
    mut followers: Query<(&Transform, &mut CharacterMovement, Option<&mut ControlRotation>)>,
) {
    let dt = time.delta_secs();

    for (owner, mut path) in paths.iter_mut() {
        if !path.is_following() {
            continue;
        }
        let Some(follower) = path.follower() else {
            debug!("Follow path {owner} has no follower");
            continue;
        };
        let Ok((transform, mut movement, control)) = followers.get_mut(follower) else {
            continue;
        };

        let Some(direction) = path.steer(transform.translation, config.arrive_distance) else {
            continue;
        };
        movement.add_movement_input(direction * config.tour_speed * dt);

        // Face the direction of travel, keeping the current pitch.
        if let (Some(mut control), Some(heading)) =
            (control, ControlRotation::looking_at(Vec3::ZERO, direction))
        {
            if control.yaw != heading.yaw {
                control.yaw = heading.yaw;
            }
        }
    }
}
