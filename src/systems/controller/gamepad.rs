use bevy::prelude::*;

use crate::components::DragInput;
use crate::resources::ControllerConfig;
use crate::systems::controller::send_drag;

/// Right stick turns and looks at a rate.
///
/// The stick value is a normalized rate, so the drag for this frame is
/// rate * base rate * frame time. Pushing up looks up.
pub fn gamepad_look_system(
    gamepads: Query<&Gamepad>,
    time: Res<Time>,
    config: Res<ControllerConfig>,
    mut drags: EventWriter<DragInput>,
) {
    let dt = time.delta_secs();

    for gamepad in gamepads.iter() {
        let stick = gamepad.right_stick();
        let delta = Vec2::new(
            stick.x * config.base_turn_rate * dt,
            -stick.y * config.base_look_up_rate * dt,
        );
        send_drag(&mut drags, delta);
    }
}
