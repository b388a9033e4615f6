pub const MAX_VIEW_PITCH: f32 = 89.0; // Control rotation pitch limit (degrees)

pub const DEFAULT_ARRIVE_DISTANCE: f32 = 100.0; // Path marker reached within this distance (units)
pub const DEFAULT_TRACE_DISTANCE: f32 = 10_000.0; // Line trace length (units)
pub const DEFAULT_ORBIT_RADIUS: f32 = 1_500.0; // Orbit distance from the rotation object (units)

pub const KILOGRAPH_TURN_RATE: f32 = 90.0; // Base turn rate (degrees/s)
pub const UNREAL_APP_TURN_RATE: f32 = 45.0; // Base turn rate (degrees/s)

pub const DEFAULT_WALK_SPEED: f32 = 600.0; // Free-run walking speed (units/s)
pub const DEFAULT_TOUR_SPEED: f32 = 300.0; // Tour following speed (units/s)
