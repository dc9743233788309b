use macroquad::prelude::*;
use slingshot_rust::core::config::GameConfig;
use slingshot_rust::core::flight::{FlightController, FlightPhase};
use slingshot_rust::core::scene::Scene;
use slingshot_rust::core::timer::TickTimer;
use slingshot_rust::core::window::Viewport;

use crate::model::{OutcomeRecord, PointerTracker, Stage};

pub(crate) struct AppRuntime {
    /// Layout as configured; `scene` is the live copy whose canvas tracks the window.
    pub(crate) design: Scene,
    pub(crate) scene: Scene,
    pub(crate) controller: FlightController,
    pub(crate) stage: Stage,
    pub(crate) viewport: Viewport,
    pub(crate) pointer: PointerTracker,
    pub(crate) last_outcome: Option<OutcomeRecord>,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new(config: GameConfig) -> Self {
        let GameConfig { physics, scene } = config;
        let timer = TickTimer::new(physics.tick_interval());
        let stage = Stage::new(scene.bird.position(), physics.preview_points, timer);
        let controller = FlightController::new(physics, &scene);
        Self {
            design: scene.clone(),
            scene,
            controller,
            stage,
            viewport: Viewport::default(),
            pointer: PointerTracker::default(),
            last_outcome: None,
            status_line: "Drag the bird to aim".to_string(),
        }
    }

    /// Refit the viewport and hand the controller the canvas it can see.
    pub(crate) fn resize(&mut self, screen_w: f32, screen_h: f32) {
        self.viewport = Viewport::fit(self.design.canvas_size(), vec2(screen_w, screen_h));
        let visible = self.viewport.visible_scene();
        self.scene.canvas_width = visible.x;
        self.scene.canvas_height = visible.y;
    }

    pub(crate) fn phase_text(&self) -> &'static str {
        match self.controller.phase() {
            FlightPhase::Idle => "Aiming",
            FlightPhase::Dragging { .. } => "Pulling back",
            FlightPhase::Airborne => "Flying",
        }
    }
}
