use std::time::Duration;

use chrono::Local;
use slingshot_rust::core::flight::{FlightEvent, FlightResponse, Outcome};
use tracing::debug;

use crate::model::OutcomeRecord;
use crate::state::AppRuntime;

pub(crate) fn apply_pointer_events(state: &mut AppRuntime, events: &[FlightEvent]) {
    for &event in events {
        let response = state
            .controller
            .handle(event, &state.scene, &mut state.stage);
        match response {
            FlightResponse::DragStarted => state.status_line = "Release to launch".to_string(),
            FlightResponse::Launched { velocity } => {
                state.status_line = format!("Launched at ({:.1}, {:.1})", velocity.x, velocity.y);
            }
            _ => {}
        }
    }
}

/// Run every 20 ms tick that is due this frame. Stops early the moment the
/// controller stops the timer.
pub(crate) fn step_active_flight(state: &mut AppRuntime, frame_dt: f32) {
    let due = state
        .stage
        .timer
        .advance(Duration::from_secs_f32(frame_dt.max(0.0)));
    if due > 1 {
        debug!(due, "catching up on flight ticks");
    }

    while state.stage.timer.take_tick() {
        let response = state
            .controller
            .handle(FlightEvent::Tick, &state.scene, &mut state.stage);
        if let FlightResponse::Landed(outcome) = response {
            record_outcome(state, outcome);
            break;
        }
    }
}

fn record_outcome(state: &mut AppRuntime, outcome: Outcome) {
    state.last_outcome = Some(OutcomeRecord {
        outcome,
        ticks: state.controller.trail().len(),
        bounces: state.controller.bounces(),
        at: Local::now(),
    });
    state.status_line = match outcome {
        Outcome::Hit => "Pig down! Drag the bird to go again".to_string(),
        Outcome::Miss => "Splat. Drag the bird to try again".to_string(),
        Outcome::OutOfBounds => "Flew off the map. Drag the bird to try again".to_string(),
    };
}
