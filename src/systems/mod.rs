pub mod camera;
pub mod controller;
mod follow;
mod movement;
mod startup;
mod trace;

pub use camera::{
    apply_control_rotation_system, apply_drag, camera_mode_request_system, drag_dispatch_system,
    orbit_reposition, DragResponse,
};
pub use controller::{
    camera_mode_keys_system, gamepad_look_system, keyboard_movement_system, mouse_drag_system,
    touch_drag_system,
};
pub use follow::follow_path_system;
pub use movement::character_movement_system;
pub use startup::{activate_initial_mode, bind_follow_paths, build_follow_path_markers};
pub use trace::line_trace_system;
