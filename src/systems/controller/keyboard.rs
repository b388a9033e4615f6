use bevy::prelude::*;

use crate::components::{
    CameraMode, CameraModeRequest, CameraModeState, CharacterMovement, ControlRotation,
    PlayerController,
};
use crate::resources::ControllerConfig;

/// Walks the player with WASD or the arrow keys while in free-run mode.
///
/// Forward and right follow the control yaw. Diagonal input is limited to
/// unit length before scaling by the walk speed.
pub fn keyboard_movement_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<ControllerConfig>,
    mut players: Query<(
        &PlayerController,
        &CameraModeState,
        &ControlRotation,
        &mut CharacterMovement,
    )>,
) {
    let Ok((controller, state, control, mut movement)) = players.get_single_mut() else {
        return;
    };
    if !controller.active || state.mode != CameraMode::FreeRun {
        return;
    }

    let forward = axis(
        &keyboard,
        [KeyCode::KeyW, KeyCode::ArrowUp],
        [KeyCode::KeyS, KeyCode::ArrowDown],
    );
    let right = axis(
        &keyboard,
        [KeyCode::KeyD, KeyCode::ArrowRight],
        [KeyCode::KeyA, KeyCode::ArrowLeft],
    );
    if forward == 0.0 && right == 0.0 {
        return;
    }

    let input =
        (control.forward_flat() * forward + control.right_flat() * right).clamp_length_max(1.0);
    movement.add_movement_input(input * config.walk_speed * time.delta_secs());
}

/// Number keys 1-4 select free run, overview, tour and panorama.
pub fn camera_mode_keys_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: EventWriter<CameraModeRequest>,
) {
    let bindings = [
        (KeyCode::Digit1, CameraModeRequest::FreeRun),
        (KeyCode::Digit2, CameraModeRequest::Overview),
        (KeyCode::Digit3, CameraModeRequest::Tour),
        (KeyCode::Digit4, CameraModeRequest::Panorama),
    ];

    for (key, request) in bindings {
        if keyboard.just_pressed(key) {
            requests.send(request);
        }
    }
}

fn axis(keyboard: &ButtonInput<KeyCode>, positive: [KeyCode; 2], negative: [KeyCode; 2]) -> f32 {
    let mut value = 0.0;
    if keyboard.any_pressed(positive) {
        value += 1.0;
    }
    if keyboard.any_pressed(negative) {
        value -= 1.0;
    }
    value
}
