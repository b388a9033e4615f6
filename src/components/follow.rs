use bevy::prelude::*;

/// A looping camera path and the cursor walking along it.
///
/// Markers are world positions taken from the owner's child nodes once at
/// startup. While following, the cursor always indexes a valid marker and
/// wraps back to the first one after the last.
#[derive(Component, Debug, Clone, Default)]
pub struct FollowPath {
    markers: Vec<Vec3>,
    current_index: usize,
    following: bool,
    follower: Option<Entity>,
}

impl FollowPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markers(markers: Vec<Vec3>) -> Self {
        Self {
            markers,
            ..default()
        }
    }

    pub fn set_markers(&mut self, markers: Vec<Vec3>) {
        self.markers = markers;
        self.current_index = 0;
    }

    pub fn markers(&self) -> &[Vec3] {
        &self.markers
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_target(&self) -> Option<Vec3> {
        self.markers.get(self.current_index).copied()
    }

    pub fn is_following(&self) -> bool {
        self.following
    }

    pub fn follower(&self) -> Option<Entity> {
        self.follower
    }

    pub fn set_follower(&mut self, follower: Entity) {
        self.follower = Some(follower);
    }

    pub fn start_following(&mut self) {
        self.following = true;
    }

    pub fn stop_following(&mut self) {
        self.following = false;
    }

    /// Direction the follower at `position` should move in this tick.
    ///
    /// Advances to the next marker first when the current one is closer than
    /// `arrive_distance`. Returns `None` when not following, when there are no
    /// markers, or when the follower sits exactly on its target.
    pub fn steer(&mut self, position: Vec3, arrive_distance: f32) -> Option<Vec3> {
        if !self.following {
            return None;
        }

        let mut to_target = self.current_target()? - position;
        if to_target.length() < arrive_distance {
            self.advance();
            to_target = self.current_target()? - position;
        }

        to_target.try_normalize()
    }

    fn advance(&mut self) {
        if self.markers.is_empty() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.markers.len();
    }
}
