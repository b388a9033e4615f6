use bevy::prelude::*;
use kilograph::{
    components::{CameraMode, CameraModeRequest, CameraModeState, ControlRotation, DragInput},
    resources::ControllerConfig,
};
use pretty_assertions::assert_eq;

use crate::common::{TestAppBuilder, FRAME_TIME};

fn tour_config() -> ControllerConfig {
    ControllerConfig {
        tour_speed: 600.0,
        ..ControllerConfig::kilograph()
    }
}

#[test]
fn test_tour_moves_towards_first_marker() {
    let mut app = TestAppBuilder::new()
        .with_config(tour_config())
        .with_follow_path(Vec3::ZERO, vec![Vec3::new(0.0, 0.0, -1000.0)])
        .build();

    app.send_and_run(CameraModeRequest::Tour);
    assert_eq!(app.player::<CameraModeState>().mode, CameraMode::Tour);
    assert!(app.follow_path().is_following());

    app.run_steps(9);

    // Ten ticks at 600 units/s
    let expected = 10.0 * 600.0 * FRAME_TIME;
    let position = app.player_position();
    assert!(position.x.abs() < 1e-3);
    assert!((position.z + expected).abs() < 1.0, "z = {}", position.z);
}

#[test]
fn test_tour_faces_direction_of_travel() {
    let mut app = TestAppBuilder::new()
        .with_config(tour_config())
        .with_follow_path(Vec3::ZERO, vec![Vec3::new(-1000.0, 0.0, 0.0)])
        .build();

    app.send_and_run(CameraModeRequest::Tour);
    app.run_frame();

    let control = app.player::<ControlRotation>();
    assert!((control.yaw - 90.0).abs() < 1e-3);
}

#[test]
fn test_tour_loops_through_markers() {
    let mut app = TestAppBuilder::new()
        .with_config(tour_config())
        .with_player_at(Vec3::new(0.0, 0.0, 300.0))
        .with_follow_path(
            Vec3::ZERO,
            vec![Vec3::ZERO, Vec3::new(300.0, 0.0, 0.0)],
        )
        .build();

    app.send_and_run(CameraModeRequest::Tour);

    let mut visited = Vec::new();
    for _ in 0..400 {
        app.run_frame();
        let index = app.follow_path().current_index();
        assert!(index < 2);
        if visited.last() != Some(&index) {
            visited.push(index);
        }
    }

    assert!(visited.len() >= 3, "Visited {:?}", visited);
    assert_eq!(&visited[..3], &[0, 1, 0]);
}

#[test]
fn test_drag_ignored_during_tour() {
    let mut app = TestAppBuilder::new()
        .with_config(tour_config())
        .with_follow_path(Vec3::ZERO, vec![Vec3::new(0.0, 0.0, -1000.0)])
        .build();

    app.send_and_run(CameraModeRequest::Tour);
    let control_before = *app.player::<ControlRotation>();

    app.send_and_run(DragInput::Vertical(25.0));

    assert_eq!(app.player::<ControlRotation>().pitch, control_before.pitch);
}

#[test]
fn test_stopping_tour_halts_player() {
    let mut app = TestAppBuilder::new()
        .with_config(tour_config())
        .with_follow_path(Vec3::ZERO, vec![Vec3::new(0.0, 0.0, -1000.0)])
        .build();

    app.send_and_run(CameraModeRequest::Tour);
    app.run_steps(3);
    app.send_and_run(CameraModeRequest::FreeRun);
    let stopped_at = app.player_position();

    app.run_steps(10);

    assert_eq!(app.player_position(), stopped_at);
    assert!(!app.follow_path().is_following());
}

#[test]
fn test_resuming_tour_keeps_cursor() {
    let mut app = TestAppBuilder::new()
        .with_config(tour_config())
        .with_follow_path(
            Vec3::ZERO,
            vec![Vec3::new(0.0, 0.0, -50.0), Vec3::new(0.0, 0.0, -2000.0)],
        )
        .build();

    app.send_and_run(CameraModeRequest::Tour);
    assert_eq!(app.follow_path().current_index(), 1);

    app.send_and_run(CameraModeRequest::FreeRun);
    app.send_and_run(CameraModeRequest::Tour);
    assert_eq!(app.follow_path().current_index(), 1);
}
