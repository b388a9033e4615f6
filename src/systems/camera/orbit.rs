use bevy::prelude::*;

use crate::components::{ControlRotation, OrbitAngles, PlayerController};
use crate::utils::{orbit_offset, to_vec3};

/// Scene entities the player refers to, excluding the player itself.
pub type SceneTransforms<'w, 's> = Query<'w, 's, &'static Transform, Without<PlayerController>>;

/// Place the player on the orbit sphere around `anchor` and face the anchor.
pub fn orbit_reposition(
    angles: &OrbitAngles,
    radius: f32,
    anchor: Vec3,
    transform: &mut Transform,
    control: &mut ControlRotation,
) {
    let offset = orbit_offset(angles.pitch, angles.yaw, radius);
    transform.translation = anchor + to_vec3(&offset);

    if let Some(look) = ControlRotation::looking_at(transform.translation, anchor) {
        *control = look;
    }
}

/// World position of an optional scene reference.
pub fn scene_position(entity: Option<Entity>, scene: &SceneTransforms) -> Option<Vec3> {
    scene.get(entity?).ok().map(|transform| transform.translation)
}
