use bevy::prelude::*;
use std::env;

use kilograph::{
    components::{
        CameraModeState, CharacterMovement, ControlRotation, FollowPath, PlayerController,
        SceneBindings, Traceable,
    },
    plugins::CameraControllerPlugin,
    resources::ControllerConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match env::args().nth(1) {
        Some(path) => ControllerConfig::from_file(&path)?,
        None => ControllerConfig::default(),
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Kilograph Viewer".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(CameraControllerPlugin::with_config(config))
        .add_systems(Startup, setup_scene)
        .run();

    Ok(())
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let stone = materials.add(StandardMaterial {
        base_color: Color::srgb(0.75, 0.72, 0.68),
        ..default()
    });
    let glass = materials.add(StandardMaterial {
        base_color: Color::srgba(0.45, 0.65, 0.9, 0.35),
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    let marker = materials.add(StandardMaterial {
        base_color: Color::srgb(0.95, 0.55, 0.1),
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(8000.0, 8000.0))),
        MeshMaterial3d(stone.clone()),
        Name::new("Ground"),
    ));

    let building = commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::new(600.0, 900.0, 600.0))),
            MeshMaterial3d(stone.clone()),
            Transform::from_xyz(0.0, 450.0, 0.0),
            Traceable::new(550.0),
            Name::new("Building"),
        ))
        .id();

    // Panels around the skybox centre, visible only in panorama mode
    let skybox = commands
        .spawn((
            Transform::from_xyz(2500.0, 160.0, 2500.0),
            Visibility::default(),
            Name::new("Skybox Center"),
        ))
        .with_children(|parent| {
            for i in 0..6 {
                let angle = i as f32 * std::f32::consts::TAU / 6.0;
                parent.spawn((
                    Mesh3d(meshes.add(Cuboid::new(400.0, 400.0, 10.0))),
                    MeshMaterial3d(glass.clone()),
                    Transform::from_xyz(angle.sin() * 500.0, 0.0, angle.cos() * 500.0)
                        .looking_at(Vec3::ZERO, Vec3::Y),
                    Visibility::Hidden,
                ));
            }
        })
        .id();

    let tour = commands
        .spawn((
            FollowPath::new(),
            Transform::from_xyz(0.0, 160.0, 0.0),
            Visibility::default(),
            Name::new("Tour Path"),
        ))
        .with_children(|parent| {
            for position in [
                Vec3::new(-1200.0, 0.0, 1200.0),
                Vec3::new(1200.0, 0.0, 1200.0),
                Vec3::new(1200.0, 0.0, -1200.0),
                Vec3::new(-1200.0, 0.0, -1200.0),
            ] {
                parent.spawn((
                    Mesh3d(meshes.add(Sphere::new(20.0))),
                    MeshMaterial3d(marker.clone()),
                    Transform::from_translation(position),
                ));
            }
        })
        .id();

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(1000.0, 3000.0, 2000.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            far: 20_000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 160.0, 2000.0),
        PlayerController::new(),
        CameraModeState::default(),
        ControlRotation::default(),
        CharacterMovement::default(),
        SceneBindings::new()
            .with_rotation_object(building)
            .with_skybox_center(skybox)
            .with_follow_path_owner(tour),
        Name::new("Player"),
    ));

    info!("Keys: 1 free run, 2 overview, 3 tour, 4 panorama");
}
