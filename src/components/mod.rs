pub mod camera;
pub mod controller;
pub mod events;
pub mod follow;
pub mod trace;

pub use camera::{CameraMode, CameraModeState, ControlRotation, OrbitAngles, PitchLimits};
pub use controller::{CharacterMovement, PlayerController, SceneBindings};
pub use events::{CameraModeRequest, DragInput, LineTraceEvent, TapEvent, TraceRequest};
pub use follow::FollowPath;
pub use trace::{line_trace, TraceHit, Traceable};
