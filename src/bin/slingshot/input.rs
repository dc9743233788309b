use macroquad::prelude::*;
use slingshot_rust::core::flight::FlightEvent;
use slingshot_rust::core::window::Viewport;

use crate::constants::DISMISS_KEYS;
use crate::model::PointerTracker;

/// This frame's pointer edges in scene coordinates, in press, move, release
/// order. The tracker always follows the mouse so a modal frame doesn't turn
/// into a huge jump once input resumes.
pub(crate) fn poll_pointer_events(
    tracker: &mut PointerTracker,
    viewport: &Viewport,
) -> Vec<FlightEvent> {
    let mouse = mouse_position();
    let screen = vec2(mouse.0, mouse.1);
    let scene = viewport.to_scene(screen);

    let mut events = Vec::with_capacity(3);
    if is_mouse_button_pressed(MouseButton::Left) {
        events.push(FlightEvent::PointerDown(scene));
    }
    if tracker.last_screen != Some(screen) {
        events.push(FlightEvent::PointerMove(scene));
    }
    if is_mouse_button_released(MouseButton::Left) {
        events.push(FlightEvent::PointerUp(scene));
    }

    tracker.last_screen = Some(screen);
    events
}

pub(crate) fn dismiss_pressed() -> bool {
    is_mouse_button_pressed(MouseButton::Left) || DISMISS_KEYS.into_iter().any(is_key_pressed)
}
