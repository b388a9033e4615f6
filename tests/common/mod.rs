mod test_app;

// Re-export
pub use assertions::{assert_faces, assert_position_eq};
pub use test_app::{TestApp, TestAppBuilder, FRAME_TIME};
