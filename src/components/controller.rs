use bevy::prelude::*;

/// Marks the entity driven by the local player's input.
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    pub active: bool,
}

impl PlayerController {
    pub fn new() -> Self {
        Self { active: true }
    }

    pub fn disabled() -> Self {
        Self { active: false }
    }

    pub fn enable(&mut self) {
        self.active = true;
    }

    pub fn disable(&mut self) {
        self.active = false;
    }
}

/// Scene entities the player's camera modes refer to.
///
/// Every reference is optional; a mode that needs a missing one skips that
/// part of its work.
#[derive(Component, Debug, Clone, Default)]
pub struct SceneBindings {
    /// Object the player orbits around in overview mode
    pub rotation_object: Option<Entity>,
    /// Root of the skybox; the panorama view is taken from its position
    pub skybox_center: Option<Entity>,
    /// Entity carrying the `FollowPath` used by the tour
    pub follow_path_owner: Option<Entity>,
}

impl SceneBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rotation_object(mut self, entity: Entity) -> Self {
        self.rotation_object = Some(entity);
        self
    }

    pub fn with_skybox_center(mut self, entity: Entity) -> Self {
        self.skybox_center = Some(entity);
        self
    }

    pub fn with_follow_path_owner(mut self, entity: Entity) -> Self {
        self.follow_path_owner = Some(entity);
        self
    }
}

/// Movement requested this frame, consumed by the movement system.
#[derive(Component, Debug, Clone, Default)]
pub struct CharacterMovement {
    pending: Vec3,
    /// Velocity produced by the last applied frame [units/s]
    pub velocity: Vec3,
}

impl CharacterMovement {
    /// Queue a world-space displacement for this frame.
    pub fn add_movement_input(&mut self, displacement: Vec3) {
        self.pending += displacement;
    }

    pub fn pending(&self) -> Vec3 {
        self.pending
    }

    pub fn consume(&mut self) -> Vec3 {
        std::mem::take(&mut self.pending)
    }

    pub fn stop_movement_immediately(&mut self) {
        self.pending = Vec3::ZERO;
        self.velocity = Vec3::ZERO;
    }
}
