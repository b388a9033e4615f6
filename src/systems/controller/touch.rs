use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::components::{DragInput, TapEvent, TraceRequest};
use crate::resources::{ControllerConfig, TouchRelease, TouchTracker};
use crate::systems::controller::send_drag;

/// Tracks the primary touch, emitting drags while it moves.
///
/// Every release of a tracked touch requests a line trace at the release
/// point; a release without movement is also a tap.
pub fn touch_drag_system(
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    config: Res<ControllerConfig>,
    mut tracker: ResMut<TouchTracker>,
    mut drags: EventWriter<DragInput>,
    mut taps: EventWriter<TapEvent>,
    mut traces: EventWriter<TraceRequest>,
) {
    let viewport = windows
        .get_single()
        .map(|window| Vec2::new(window.width(), window.height()))
        .unwrap_or(Vec2::ZERO);

    for touch in touches.iter_just_pressed() {
        tracker.begin(touch.id(), touch.position());
    }

    for touch in touches.iter() {
        if let Some(delta) =
            tracker.update(touch.id(), touch.position(), viewport, config.base_turn_rate)
        {
            send_drag(&mut drags, delta);
        }
    }

    for touch in touches.iter_just_released() {
        let position = touch.position();
        match tracker.end(touch.id()) {
            TouchRelease::Idle => continue,
            TouchRelease::Released => {}
            TouchRelease::Tap => {
                taps.send(TapEvent { position });
            }
        }
        traces.send(TraceRequest::Viewport(position));
    }
}
