use bevy::input::gamepad::GamepadAxis;
use bevy::input::keyboard::{Key, KeyboardInput, NativeKey};
use bevy::input::{ButtonState, InputPlugin};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::window::{PrimaryWindow, WindowResolution};
use std::time::Duration;

use kilograph::{
    components::{
        CameraModeState, CharacterMovement, ControlRotation, FollowPath, PlayerController,
        SceneBindings, Traceable,
    },
    plugins::CameraControllerPlugin,
    resources::ControllerConfig,
};

pub const FRAME_TIME: f32 = 1.0 / 60.0;

// Builder for a headless app with a player and an optional scene around it
pub struct TestAppBuilder {
    config: ControllerConfig,
    player_position: Vec3,
    rotation_object: Option<Vec3>,
    skybox: Option<(Vec3, usize)>,
    follow_path: Option<(Vec3, Vec<Vec3>)>,
    traceables: Vec<(Vec3, f32)>,
    window: Option<Vec2>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: ControllerConfig::kilograph(),
            player_position: Vec3::ZERO,
            rotation_object: None,
            skybox: None,
            follow_path: None,
            traceables: Vec::new(),
            window: None,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_player_at(mut self, position: Vec3) -> Self {
        self.player_position = position;
        self
    }

    pub fn with_rotation_object(mut self, position: Vec3) -> Self {
        self.rotation_object = Some(position);
        self
    }

    pub fn with_skybox(mut self, center: Vec3, panels: usize) -> Self {
        self.skybox = Some((center, panels));
        self
    }

    /// Markers are given relative to the path owner's position
    pub fn with_follow_path(mut self, owner: Vec3, markers: Vec<Vec3>) -> Self {
        self.follow_path = Some((owner, markers));
        self
    }

    pub fn with_traceable(mut self, position: Vec3, radius: f32) -> Self {
        self.traceables.push((position, radius));
        self
    }

    pub fn with_window(mut self, width: f32, height: f32) -> Self {
        self.window = Some(Vec2::new(width, height));
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(InputPlugin)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
                FRAME_TIME,
            )))
            .add_plugins(CameraControllerPlugin::with_config(self.config));

        let world = app.world_mut();

        if let Some(size) = self.window {
            world.spawn((
                Window {
                    resolution: WindowResolution::new(size.x, size.y),
                    ..default()
                },
                PrimaryWindow,
            ));
        }

        let mut bindings = SceneBindings::new();

        let rotation_object = self.rotation_object.map(|position| {
            world
                .spawn((Transform::from_translation(position), Name::new("Rotation Object")))
                .id()
        });
        if let Some(entity) = rotation_object {
            bindings = bindings.with_rotation_object(entity);
        }

        let mut skybox_panels = Vec::new();
        let skybox = self.skybox.map(|(center, panels)| {
            let mut skybox = world.spawn((
                Transform::from_translation(center),
                Visibility::default(),
                Name::new("Skybox"),
            ));
            skybox.with_children(|parent| {
                for i in 0..panels {
                    let panel = parent
                        .spawn((
                            Transform::from_xyz(i as f32 * 10.0, 0.0, 0.0),
                            Visibility::Inherited,
                        ))
                        .id();
                    skybox_panels.push(panel);
                }
            });
            skybox.id()
        });
        if let Some(entity) = skybox {
            bindings = bindings.with_skybox_center(entity);
        }

        let path_owner = self.follow_path.map(|(owner, markers)| {
            let mut path = world.spawn((
                FollowPath::new(),
                Transform::from_translation(owner),
                Name::new("Follow Path"),
            ));
            path.with_children(|parent| {
                for marker in markers {
                    parent.spawn(Transform::from_translation(marker));
                }
            });
            path.id()
        });
        if let Some(entity) = path_owner {
            bindings = bindings.with_follow_path_owner(entity);
        }

        // No transform propagation under MinimalPlugins
        let traceables = self
            .traceables
            .into_iter()
            .map(|(position, radius)| {
                world
                    .spawn((
                        Transform::from_translation(position),
                        GlobalTransform::from_translation(position),
                        Traceable::new(radius),
                    ))
                    .id()
            })
            .collect();

        let player = world
            .spawn((
                Transform::from_translation(self.player_position),
                PlayerController::new(),
                CameraModeState::default(),
                ControlRotation::default(),
                CharacterMovement::default(),
                bindings,
                Name::new("Player"),
            ))
            .id();

        // Run an initial update to initialize everything
        app.update();

        TestApp {
            app,
            player,
            rotation_object,
            skybox,
            skybox_panels,
            path_owner,
            traceables,
        }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub player: Entity,
    pub rotation_object: Option<Entity>,
    pub skybox: Option<Entity>,
    pub skybox_panels: Vec<Entity>,
    pub path_owner: Option<Entity>,
    pub traceables: Vec<Entity>,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    /// Send an event and run one frame
    pub fn send_and_run<E: Event>(&mut self, event: E) {
        self.send(event);
        self.run_frame();
    }

    pub fn component<T: Component>(&self, entity: Entity) -> &T {
        self.app
            .world()
            .get::<T>(entity)
            .expect("Component missing from entity")
    }

    pub fn player<T: Component>(&self) -> &T {
        self.component::<T>(self.player)
    }

    pub fn player_position(&self) -> Vec3 {
        self.player::<Transform>().translation
    }

    pub fn rotation_object_position(&self) -> Vec3 {
        let entity = self.rotation_object.expect("No rotation object in this scene");
        self.component::<Transform>(entity).translation
    }

    pub fn skybox_position(&self) -> Vec3 {
        let entity = self.skybox.expect("No skybox in this scene");
        self.component::<Transform>(entity).translation
    }

    pub fn follow_path(&self) -> &FollowPath {
        let owner = self.path_owner.expect("No follow path in this scene");
        self.component::<FollowPath>(owner)
    }

    pub fn press_key(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
    }

    /// Queue a raw key event, read by the input plugin next frame
    pub fn key_event(&mut self, key: KeyCode, state: ButtonState) {
        self.send(KeyboardInput {
            key_code: key,
            logical_key: Key::Unidentified(NativeKey::Unidentified),
            state,
            repeat: false,
            window: Entity::PLACEHOLDER,
        });
    }

    /// Spawn a gamepad holding its right stick at `stick`
    pub fn spawn_gamepad(&mut self, stick: Vec2) -> Entity {
        let mut gamepad = Gamepad::default();
        gamepad.analog_mut().set(GamepadAxis::RightStickX, stick.x);
        gamepad.analog_mut().set(GamepadAxis::RightStickY, stick.y);
        self.app.world_mut().spawn(gamepad).id()
    }

    pub fn press_mouse(&mut self, button: MouseButton) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(button);
    }

    /// Events of type `E` sent during the last frame
    pub fn events<E: Event + Clone>(&self) -> Vec<E> {
        self.app
            .world()
            .resource::<Events<E>>()
            .iter_current_update_events()
            .cloned()
            .collect()
    }
}
