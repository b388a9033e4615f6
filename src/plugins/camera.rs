use bevy::prelude::*;

use crate::components::{CameraModeRequest, DragInput, LineTraceEvent, TapEvent, TraceRequest};
use crate::plugins::{StartupSequencePlugin, StartupStage};
use crate::resources::{ControllerConfig, TouchTracker};
use crate::systems::{
    activate_initial_mode, apply_control_rotation_system, bind_follow_paths,
    build_follow_path_markers, camera_mode_keys_system, camera_mode_request_system,
    character_movement_system, drag_dispatch_system, follow_path_system, gamepad_look_system,
    keyboard_movement_system, line_trace_system, mouse_drag_system, touch_drag_system,
};

/// Per-frame ordering of the controller.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum ControllerSet {
    Input,
    Modes,
    Dispatch,
    Follow,
    Movement,
    Sync,
}

/// Camera modes, input dispatch and the tour follower.
///
/// Input systems read `ButtonInput`, `Touches` and mouse events, so the app
/// needs the engine's `InputPlugin` (part of `DefaultPlugins`).
pub struct CameraControllerPlugin {
    config: ControllerConfig,
}

impl CameraControllerPlugin {
    pub fn new() -> Self {
        Self {
            config: ControllerConfig::default(),
        }
    }

    pub fn with_config(config: ControllerConfig) -> Self {
        Self { config }
    }
}

impl Default for CameraControllerPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for CameraControllerPlugin {
    fn build(&self, app: &mut App) {
        if let Err(e) = self.config.validate() {
            error!("Invalid controller config: {}. Falling back to defaults", e);
            app.insert_resource(ControllerConfig::default());
        } else {
            app.insert_resource(self.config.clone());
        }

        app.init_resource::<TouchTracker>()
            .add_event::<DragInput>()
            .add_event::<CameraModeRequest>()
            .add_event::<TapEvent>()
            .add_event::<TraceRequest>()
            .add_event::<LineTraceEvent>()
            .add_plugins(StartupSequencePlugin)
            .add_systems(
                PostStartup,
                (
                    build_follow_path_markers.in_set(StartupStage::BuildPaths),
                    bind_follow_paths.in_set(StartupStage::BindPlayers),
                    activate_initial_mode.in_set(StartupStage::ActivateMode),
                ),
            )
            .configure_sets(
                Update,
                (
                    ControllerSet::Input,
                    ControllerSet::Modes,
                    ControllerSet::Dispatch,
                    ControllerSet::Follow,
                    ControllerSet::Movement,
                    ControllerSet::Sync,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    keyboard_movement_system,
                    camera_mode_keys_system,
                    mouse_drag_system,
                    touch_drag_system,
                    gamepad_look_system,
                )
                    .in_set(ControllerSet::Input),
            )
            .add_systems(
                Update,
                camera_mode_request_system.in_set(ControllerSet::Modes),
            )
            .add_systems(
                Update,
                (drag_dispatch_system, line_trace_system).in_set(ControllerSet::Dispatch),
            )
            .add_systems(Update, follow_path_system.in_set(ControllerSet::Follow))
            .add_systems(
                Update,
                character_movement_system.in_set(ControllerSet::Movement),
            )
            .add_systems(
                Update,
                apply_control_rotation_system.in_set(ControllerSet::Sync),
            );
    }
}
