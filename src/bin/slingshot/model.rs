use chrono::{DateTime, Local};
use macroquad::prelude::*;
use slingshot_rust::core::effects::{FlightEffects, ObjectId};
use slingshot_rust::core::flight::{Marker, Outcome};
use slingshot_rust::core::timer::TickTimer;
use tracing::trace;

/// What is on screen, as last told by the flight controller.
pub(crate) struct Stage {
    pub(crate) bird_position: Vec2,
    pub(crate) markers: Vec<Marker>,
    pub(crate) message: Option<String>,
    pub(crate) timer: TickTimer,
}

impl Stage {
    pub(crate) fn new(bird_position: Vec2, marker_count: usize, timer: TickTimer) -> Self {
        Self {
            bird_position,
            markers: vec![
                Marker {
                    position: Vec2::ZERO,
                    visible: false,
                };
                marker_count
            ],
            message: None,
            timer,
        }
    }

    pub(crate) fn is_modal(&self) -> bool {
        self.message.is_some()
    }
}

impl FlightEffects for Stage {
    fn set_position(&mut self, object: ObjectId, top_left: Vec2) {
        match object {
            ObjectId::Projectile => self.bird_position = top_left,
            ObjectId::Marker(i) => {
                if let Some(marker) = self.markers.get_mut(i) {
                    marker.position = top_left;
                }
            }
        }
    }

    fn set_visibility(&mut self, marker: usize, visible: bool) {
        if let Some(marker) = self.markers.get_mut(marker) {
            marker.visible = visible;
        }
    }

    fn show_message(&mut self, text: &str) {
        self.message = Some(text.to_string());
    }

    fn start_timer(&mut self) {
        trace!("flight timer started");
        self.timer.start();
    }

    fn stop_timer(&mut self) {
        trace!("flight timer stopped");
        self.timer.stop();
    }
}

#[derive(Clone, Copy)]
pub(crate) struct OutcomeRecord {
    pub(crate) outcome: Outcome,
    pub(crate) ticks: usize,
    pub(crate) bounces: u32,
    pub(crate) at: DateTime<Local>,
}

/// Turns polled mouse state into press/move/release edges.
#[derive(Default)]
pub(crate) struct PointerTracker {
    pub(crate) last_screen: Option<Vec2>,
}
