use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{from_vec3, look_at_angles, wrap_degrees, MAX_VIEW_PITCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// First-person walking with free look
    #[default]
    FreeRun,
    /// Orbiting the rotation object
    Orbit,
    /// Looking around from the skybox centre
    Panorama,
    /// Following the scripted camera path
    Tour,
}

/// Inclusive pitch range for orbit angles, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchLimits {
    pub min: f32,
    pub max: f32,
}

impl PitchLimits {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, pitch: f32) -> f32 {
        pitch.clamp(self.min, self.max)
    }

    pub fn contains(&self, pitch: f32) -> bool {
        (self.min..=self.max).contains(&pitch)
    }
}

/// Accumulated drag angles while orbiting, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrbitAngles {
    pub pitch: f32,
    pub yaw: f32,
}

impl OrbitAngles {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn add_yaw(&mut self, delta: f32) {
        self.yaw += delta;
    }

    /// Dragging down lowers the viewpoint, so the delta is subtracted.
    pub fn sub_pitch(&mut self, delta: f32, limits: Option<PitchLimits>) {
        self.pitch -= delta;
        if let Some(limits) = limits {
            self.pitch = limits.clamp(self.pitch);
        }
    }
}

#[derive(Component, Debug, Clone, Default)]
pub struct CameraModeState {
    pub mode: CameraMode,
    pub orbit: OrbitAngles,
}

impl CameraModeState {
    pub fn new(mode: CameraMode) -> Self {
        Self {
            mode,
            ..default()
        }
    }
}

/// View orientation owned by the player controller, in degrees.
///
/// Yaw turns about +Y (counter-clockwise seen from above), pitch about the
/// local right axis. Zero yaw and pitch looks down -Z.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlRotation {
    pub yaw: f32,
    pub pitch: f32,
}

impl ControlRotation {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw: wrap_degrees(yaw),
            pitch: pitch.clamp(-MAX_VIEW_PITCH, MAX_VIEW_PITCH),
        }
    }

    /// Rotation looking from `from` towards `to`, or `None` if they coincide.
    pub fn looking_at(from: Vec3, to: Vec3) -> Option<Self> {
        look_at_angles(&from_vec3(from), &from_vec3(to)).map(|(yaw, pitch)| Self::new(yaw, pitch))
    }

    /// Positive input turns right.
    pub fn add_yaw_input(&mut self, value: f32) {
        self.yaw = wrap_degrees(self.yaw - value);
    }

    /// Positive input looks down.
    pub fn add_pitch_input(&mut self, value: f32) {
        self.pitch = (self.pitch - value).clamp(-MAX_VIEW_PITCH, MAX_VIEW_PITCH);
    }

    pub fn to_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            0.0,
        )
    }

    /// Horizontal forward direction, ignoring pitch.
    pub fn forward_flat(&self) -> Vec3 {
        Quat::from_rotation_y(self.yaw.to_radians()) * Vec3::NEG_Z
    }

    /// Horizontal right direction, ignoring pitch.
    pub fn right_flat(&self) -> Vec3 {
        Quat::from_rotation_y(self.yaw.to_radians()) * Vec3::X
    }
}
