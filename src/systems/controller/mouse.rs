use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use crate::components::DragInput;
use crate::resources::ControllerConfig;
use crate::systems::controller::send_drag;

/// Turns mouse motion into drag input while the drag button is held.
pub fn mouse_drag_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    config: Res<ControllerConfig>,
    mut drags: EventWriter<DragInput>,
) {
    let delta: Vec2 = motion.read().map(|event| event.delta).sum();
    if !buttons.pressed(config.drag_button.into()) {
        return;
    }

    send_drag(&mut drags, delta * config.mouse_sensitivity);
}
