use bevy::prelude::*;

use crate::components::CharacterMovement;

/// Applies the displacement queued this frame and records the resulting velocity.
pub fn character_movement_system(
    time: Res<Time>,
    mut movers: Query<(&mut Transform, &mut CharacterMovement)>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut movement) in movers.iter_mut() {
        let displacement = movement.consume();
        if displacement != Vec3::ZERO {
            transform.translation += displacement;
        }
        movement.velocity = if dt > 0.0 {
            displacement / dt
        } else {
            Vec3::ZERO
        };
    }
}
