pub mod camera;
mod staging;

pub use camera::{CameraControllerPlugin, ControllerSet};
pub use staging::{StartupSequencePlugin, StartupStage};
