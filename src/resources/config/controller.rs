use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::PitchLimits;
use crate::resources::errors::{ConfigError, Result};
use crate::utils::{
    DEFAULT_ARRIVE_DISTANCE, DEFAULT_ORBIT_RADIUS, DEFAULT_TOUR_SPEED, DEFAULT_TRACE_DISTANCE,
    DEFAULT_WALK_SPEED, KILOGRAPH_TURN_RATE, UNREAL_APP_TURN_RATE,
};

/// Mouse button that turns mouse motion into drag input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl From<DragButton> for MouseButton {
    fn from(button: DragButton) -> Self {
        match button {
            DragButton::Left => MouseButton::Left,
            DragButton::Right => MouseButton::Right,
            DragButton::Middle => MouseButton::Middle,
        }
    }
}

/// Tuning for the viewer controller.
///
/// Distances are in world units, rates in degrees per second.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Scale applied to touch deltas and gamepad yaw rate
    pub base_turn_rate: f32,
    /// Scale applied to gamepad pitch rate
    pub base_look_up_rate: f32,
    /// Degrees of drag per pixel of mouse motion
    pub mouse_sensitivity: f32,
    pub drag_button: DragButton,
    /// Distance kept from the rotation object in orbit mode
    pub orbit_radius: f32,
    /// Orbit pitch range; unlimited when absent
    pub orbit_pitch_limits: Option<PitchLimits>,
    pub walk_speed: f32,
    pub tour_speed: f32,
    /// Distance at which a tour marker counts as reached
    pub arrive_distance: f32,
    /// Length of the line trace fired by a tap
    pub trace_distance: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::kilograph()
    }
}

impl ControllerConfig {
    /// Touch-first viewer with a bounded orbit.
    pub fn kilograph() -> Self {
        Self {
            base_turn_rate: KILOGRAPH_TURN_RATE,
            base_look_up_rate: KILOGRAPH_TURN_RATE,
            mouse_sensitivity: 0.2,
            drag_button: DragButton::Left,
            orbit_radius: DEFAULT_ORBIT_RADIUS,
            orbit_pitch_limits: Some(PitchLimits::new(-10.0, 80.0)),
            walk_speed: DEFAULT_WALK_SPEED,
            tour_speed: DEFAULT_TOUR_SPEED,
            arrive_distance: DEFAULT_ARRIVE_DISTANCE,
            trace_distance: DEFAULT_TRACE_DISTANCE,
        }
    }

    /// The plain template: slower turning and an unbounded orbit.
    pub fn unreal_app() -> Self {
        Self {
            base_turn_rate: UNREAL_APP_TURN_RATE,
            base_look_up_rate: UNREAL_APP_TURN_RATE,
            orbit_pitch_limits: None,
            ..Self::kilograph()
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            Some("json") => Self::from_json_str(&contents),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("base_turn_rate", self.base_turn_rate),
            ("base_look_up_rate", self.base_look_up_rate),
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("orbit_radius", self.orbit_radius),
            ("walk_speed", self.walk_speed),
            ("tour_speed", self.tour_speed),
            ("arrive_distance", self.arrive_distance),
            ("trace_distance", self.trace_distance),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(name, value));
            }
        }

        if let Some(limits) = self.orbit_pitch_limits {
            if !limits.min.is_finite() || !limits.max.is_finite() || limits.min > limits.max {
                return Err(ConfigError::invalid(
                    "orbit_pitch_limits",
                    format!("{}..{}", limits.min, limits.max),
                ));
            }
        }

        Ok(())
    }
}
