use bevy::prelude::*;

use crate::components::{
    CameraMode, CameraModeRequest, CameraModeState, CharacterMovement, ControlRotation,
    FollowPath, PlayerController, SceneBindings,
};
use crate::resources::ControllerConfig;
use crate::systems::camera::orbit::{orbit_reposition, scene_position, SceneTransforms};

/// Switches the player between camera modes on request.
pub fn camera_mode_request_system(
    mut requests: EventReader<CameraModeRequest>,
    mut players: Query<
        (
            Entity,
            &SceneBindings,
            &mut CameraModeState,
            &mut ControlRotation,
            &mut Transform,
            &mut CharacterMovement,
        ),
        With<PlayerController>,
    >,
    scene: SceneTransforms,
    mut paths: Query<&mut FollowPath>,
    children: Query<&Children>,
    mut visibility: Query<&mut Visibility>,
    config: Res<ControllerConfig>,
) {
    let Ok((player, bindings, mut state, mut control, mut transform, mut movement)) =
        players.get_single_mut()
    else {
        if !requests.is_empty() {
            warn!("Camera mode requested but no player is spawned");
        }
        requests.clear();
        return;
    };

    for request in requests.read() {
        match request {
            CameraModeRequest::Overview => {
                movement.stop_movement_immediately();
                set_following(&mut paths, bindings, player, false);

                state.mode = CameraMode::Orbit;
                state.orbit.reset();
                match scene_position(bindings.rotation_object, &scene) {
                    Some(anchor) => orbit_reposition(
                        &state.orbit,
                        config.orbit_radius,
                        anchor,
                        &mut transform,
                        &mut control,
                    ),
                    None => warn!("Overview mode without a rotation object"),
                }

                set_skybox_hidden(bindings.skybox_center, true, &children, &mut visibility);
            }
            CameraModeRequest::Tour => {
                state.mode = CameraMode::Tour;
                set_following(&mut paths, bindings, player, true);
                set_skybox_hidden(bindings.skybox_center, true, &children, &mut visibility);
            }
            CameraModeRequest::Panorama => {
                state.mode = CameraMode::Panorama;
                movement.stop_movement_immediately();
                set_following(&mut paths, bindings, player, false);

                match scene_position(bindings.skybox_center, &scene) {
                    Some(center) => transform.translation = center,
                    None => warn!("Panorama mode without a skybox center"),
                }

                set_skybox_hidden(bindings.skybox_center, false, &children, &mut visibility);
            }
            CameraModeRequest::FreeRun => {
                state.mode = CameraMode::FreeRun;
                set_following(&mut paths, bindings, player, false);
                set_skybox_hidden(bindings.skybox_center, true, &children, &mut visibility);
            }
        }

        info!("Camera mode set to {:?}", state.mode);
    }
}

fn set_following(
    paths: &mut Query<&mut FollowPath>,
    bindings: &SceneBindings,
    player: Entity,
    following: bool,
) {
    let Some(owner) = bindings.follow_path_owner else {
        if following {
            warn!("Tour requested without a follow path");
        }
        return;
    };
    let Ok(mut path) = paths.get_mut(owner) else {
        warn!("Follow path owner {owner} has no FollowPath");
        return;
    };

    if following {
        if path.follower().is_none() {
            path.set_follower(player);
        }
        path.start_following();
    } else {
        path.stop_following();
    }
}

/// Hide or show every node below the skybox root.
fn set_skybox_hidden(
    skybox: Option<Entity>,
    hidden: bool,
    children: &Query<&Children>,
    visibility: &mut Query<&mut Visibility>,
) {
    let Some(skybox) = skybox else {
        return;
    };
    let value = if hidden {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    };

    for node in children.iter_descendants(skybox) {
        if let Ok(mut node_visibility) = visibility.get_mut(node) {
            *node_visibility = value;
        }
    }
}
