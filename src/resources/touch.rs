use bevy::prelude::*;

/// How a finger release ended the tracked touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchRelease {
    /// No touch was being tracked
    Idle,
    /// The touch ended after dragging, or another finger lifted
    Released,
    /// The tracked finger lifted without moving
    Tap,
}

/// Tracks the single touch that drives drag input.
///
/// Only the first finger down is followed; others are ignored until it lifts.
#[derive(Resource, Debug, Clone, Default)]
pub struct TouchTracker {
    pressed: bool,
    finger: u64,
    location: Vec2,
    moved: bool,
}

impl TouchTracker {
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn has_moved(&self) -> bool {
        self.moved
    }

    pub fn begin(&mut self, finger: u64, location: Vec2) {
        if self.pressed {
            return;
        }
        self.pressed = true;
        self.finger = finger;
        self.location = location;
        self.moved = false;
    }

    /// Delta since the last update, scaled by viewport size and turn rate.
    ///
    /// Returns `None` for untracked fingers. A zero component means no drag
    /// on that axis.
    pub fn update(
        &mut self,
        finger: u64,
        location: Vec2,
        viewport: Vec2,
        turn_rate: f32,
    ) -> Option<Vec2> {
        if !self.pressed || self.finger != finger {
            return None;
        }
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            self.location = location;
            return None;
        }

        let scaled = (location - self.location) / viewport * turn_rate;
        if scaled != Vec2::ZERO {
            self.moved = true;
        }
        self.location = location;

        Some(scaled)
    }

    /// Release a finger. Any release ends the tracked touch.
    pub fn end(&mut self, finger: u64) -> TouchRelease {
        if !self.pressed {
            return TouchRelease::Idle;
        }
        self.pressed = false;

        if finger == self.finger && !self.moved {
            TouchRelease::Tap
        } else {
            TouchRelease::Released
        }
    }
}
