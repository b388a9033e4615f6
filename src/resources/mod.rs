pub mod config;
pub mod errors;
mod touch;

pub use config::{ControllerConfig, DragButton};
pub use errors::ConfigError;
pub use touch::{TouchRelease, TouchTracker};
