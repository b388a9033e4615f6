mod dispatch;
mod modes;
mod orbit;

pub use dispatch::{apply_drag, drag_dispatch_system, DragResponse};
pub use modes::camera_mode_request_system;
pub use orbit::{orbit_reposition, scene_position, SceneTransforms};

use bevy::prelude::*;

use crate::components::ControlRotation;

/// Writes the control rotation onto the entity's transform.
pub fn apply_control_rotation_system(
    mut query: Query<(&ControlRotation, &mut Transform), Changed<ControlRotation>>,
) {
    for (control, mut transform) in query.iter_mut() {
        transform.rotation = control.to_quat();
    }
}
