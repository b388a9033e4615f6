use bevy::math::Vec3;
use nalgebra::{UnitQuaternion, Vector3};

/// Convert an nalgebra vector into the engine's vector type
#[inline]
pub fn to_vec3(v: &Vector3<f32>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

/// Convert an engine vector into an nalgebra vector
#[inline]
pub fn from_vec3(v: Vec3) -> Vector3<f32> {
    Vector3::new(v.x, v.y, v.z)
}

/// Wrap an angle in degrees into the range (-180, 180]
pub fn wrap_degrees(deg: f32) -> f32 {
    let wrapped = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

/// Offset of an orbiting viewpoint from its anchor.
///
/// The reference axis is +Z (towards the viewer in the engine's right-handed,
/// Y-up frame). Pitch lifts the viewpoint above the anchor's horizon, yaw
/// turns it about the vertical axis. Both angles are in degrees.
pub fn orbit_offset(pitch_deg: f32, yaw_deg: f32, radius: f32) -> Vector3<f32> {
    let yaw = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw_deg.to_radians());
    let pitch = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -pitch_deg.to_radians());

    (yaw * pitch) * Vector3::new(0.0, 0.0, radius)
}

/// Yaw and pitch (degrees) of a view at `from` looking at `to`.
///
/// Forward is -Z. Returns `None` when the two points coincide.
pub fn look_at_angles(from: &Vector3<f32>, to: &Vector3<f32>) -> Option<(f32, f32)> {
    let direction = (to - from).try_normalize(f32::EPSILON)?;

    let yaw = (-direction.x).atan2(-direction.z).to_degrees();
    let pitch = direction.y.clamp(-1.0, 1.0).asin().to_degrees();

    Some((yaw, pitch))
}
