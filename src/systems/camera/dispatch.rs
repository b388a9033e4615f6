use bevy::prelude::*;

use crate::components::{
    CameraMode, CameraModeState, ControlRotation, DragInput, PitchLimits, PlayerController,
    SceneBindings,
};
use crate::resources::ControllerConfig;
use crate::systems::camera::orbit::{orbit_reposition, scene_position, SceneTransforms};

/// What a drag did to the player's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragResponse {
    /// Control rotation changed
    Look,
    /// Orbit angles changed; the player must be repositioned
    Reposition,
    /// The current mode does not take drag input
    Ignored,
}

/// Route one drag delta according to the current camera mode.
pub fn apply_drag(
    state: &mut CameraModeState,
    control: &mut ControlRotation,
    drag: DragInput,
    limits: Option<PitchLimits>,
) -> DragResponse {
    match (state.mode, drag) {
        (CameraMode::FreeRun | CameraMode::Panorama, DragInput::Horizontal(value)) => {
            control.add_yaw_input(value);
            DragResponse::Look
        }
        (CameraMode::FreeRun | CameraMode::Panorama, DragInput::Vertical(value)) => {
            control.add_pitch_input(value);
            DragResponse::Look
        }
        (CameraMode::Orbit, DragInput::Horizontal(value)) => {
            state.orbit.add_yaw(value);
            DragResponse::Reposition
        }
        (CameraMode::Orbit, DragInput::Vertical(value)) => {
            state.orbit.sub_pitch(value, limits);
            DragResponse::Reposition
        }
        (CameraMode::Tour, _) => DragResponse::Ignored,
    }
}

/// Applies queued drag input to the active player.
pub fn drag_dispatch_system(
    mut drags: EventReader<DragInput>,
    mut players: Query<(
        &PlayerController,
        &SceneBindings,
        &mut CameraModeState,
        &mut ControlRotation,
        &mut Transform,
    )>,
    scene: SceneTransforms,
    config: Res<ControllerConfig>,
) {
    let Ok((controller, bindings, mut state, mut control, mut transform)) =
        players.get_single_mut()
    else {
        drags.clear();
        return;
    };
    if !controller.active {
        drags.clear();
        return;
    }

    for drag in drags.read() {
        let response = apply_drag(&mut state, &mut control, *drag, config.orbit_pitch_limits);
        if response != DragResponse::Reposition {
            continue;
        }

        let Some(anchor) = scene_position(bindings.rotation_object, &scene) else {
            debug!("Orbit drag without a rotation object");
            continue;
        };
        orbit_reposition(
            &state.orbit,
            config.orbit_radius,
            anchor,
            &mut transform,
            &mut control,
        );
    }
}
