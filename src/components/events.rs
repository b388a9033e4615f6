use bevy::prelude::*;

use crate::components::TraceHit;

/// A drag delta routed to the player's current camera mode.
///
/// Positive horizontal values drag right, positive vertical values drag down.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum DragInput {
    Horizontal(f32),
    Vertical(f32),
}

/// Request to switch the player's camera mode, e.g. from a UI button.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraModeRequest {
    FreeRun,
    /// Orbit around the rotation object
    Overview,
    /// Follow the camera path
    Tour,
    /// Skybox view
    Panorama,
}

/// A touch that was released without moving, in viewport coordinates.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TapEvent {
    pub position: Vec2,
}

/// Where to fire a line trace from.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum TraceRequest {
    /// Deproject a viewport position through the active camera
    Viewport(Vec2),
    /// Trace along a world-space ray
    Ray(Ray3d),
}

/// Result of a line trace.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct LineTraceEvent {
    pub origin: Vec3,
    pub direction: Vec3,
    pub hit: Option<TraceHit>,
}
