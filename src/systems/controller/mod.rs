mod gamepad;
mod keyboard;
mod mouse;
mod touch;

pub use gamepad::gamepad_look_system;
pub use keyboard::{camera_mode_keys_system, keyboard_movement_system};
pub use mouse::mouse_drag_system;
pub use touch::touch_drag_system;

use bevy::prelude::*;

use crate::components::DragInput;

/// Send the non-zero axes of a drag delta.
fn send_drag(drags: &mut EventWriter<DragInput>, delta: Vec2) {
    if delta.x != 0.0 {
        drags.send(DragInput::Horizontal(delta.x));
    }
    if delta.y != 0.0 {
        drags.send(DragInput::Vertical(delta.y));
    }
}
