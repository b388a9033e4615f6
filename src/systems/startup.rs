use bevy::prelude::*;

use crate::components::{CameraModeRequest, FollowPath, PlayerController, SceneBindings};

/// Fills each empty follow path with its children's positions, in child order.
pub fn build_follow_path_markers(
    mut paths: Query<(Entity, &mut FollowPath, &Transform, Option<&Children>)>,
    nodes: Query<&Transform, Without<FollowPath>>,
) {
    for (owner, mut path, owner_transform, children) in paths.iter_mut() {
        if !path.markers().is_empty() {
            continue;
        }
        let Some(children) = children else {
            warn!("Follow path {owner} has no marker nodes");
            continue;
        };

        let markers: Vec<Vec3> = children
            .iter()
            .filter_map(|child| nodes.get(*child).ok())
            .map(|node| owner_transform.transform_point(node.translation))
            .collect();

        info!("Follow path {owner} built with {} markers", markers.len());
        path.set_markers(markers);
    }
}

/// Attaches each player to the follow path it references.
pub fn bind_follow_paths(
    players: Query<(Entity, &SceneBindings), With<PlayerController>>,
    mut paths: Query<&mut FollowPath>,
) {
    for (player, bindings) in players.iter() {
        let Some(owner) = bindings.follow_path_owner else {
            continue;
        };
        match paths.get_mut(owner) {
            Ok(mut path) => path.set_follower(player),
            Err(_) => warn!("Follow path owner {owner} has no FollowPath"),
        }
    }
}

/// Players with a rotation object start in overview mode.
pub fn activate_initial_mode(
    players: Query<&SceneBindings, With<PlayerController>>,
    mut requests: EventWriter<CameraModeRequest>,
) {
    if players
        .iter()
        .any(|bindings| bindings.rotation_object.is_some())
    {
        requests.send(CameraModeRequest::Overview);
    }
}
