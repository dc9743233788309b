//! The flight controller: drag to aim, release to launch, tick to fly.
//!
//! All input arrives as a [`FlightEvent`] through [`FlightController::handle`];
//! all output leaves through a [`FlightEffects`] sink. The controller owns
//! the projectile, the drag session and the preview markers. The scene is
//! borrowed read-only on every call, so the caller may resize the canvas
//! between events.

use macroquad::math::{Rect, Vec2, vec2};
use tracing::{debug, info};

use crate::core::config::{GameConfig, PhysicsConfig};
use crate::core::constants::{HIT_MESSAGE, MISS_MESSAGE};
use crate::core::effects::{EffectLog, FlightEffects, ObjectId};
use crate::core::preview::{marker_top_left, sample_trajectory};
use crate::core::scene::{Scene, SceneObject, collision_rect_at, rects_intersect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlightEvent {
    PointerDown(Vec2),
    PointerMove(Vec2),
    PointerUp(Vec2),
    Tick,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlightPhase {
    Idle,
    Dragging { anchor: Vec2 },
    Airborne,
}

/// How a flight ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    Miss,
    OutOfBounds,
}

impl Outcome {
    pub fn message(self) -> Option<&'static str> {
        match self {
            Outcome::Hit => Some(HIT_MESSAGE),
            Outcome::Miss => Some(MISS_MESSAGE),
            Outcome::OutOfBounds => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Hit => "hit",
            Outcome::Miss => "miss",
            Outcome::OutOfBounds => "out of bounds",
        }
    }
}

/// What a single event did to the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlightResponse {
    Ignored,
    DragStarted,
    Dragged,
    Launched { velocity: Vec2 },
    Flying,
    Bounced,
    Landed(Outcome),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    /// Top-left of the bird sprite in scene coordinates.
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub position: Vec2,
    pub visible: bool,
}

pub struct FlightController {
    physics: PhysicsConfig,
    projectile: Projectile,
    phase: FlightPhase,
    markers: Vec<Marker>,
    trail: Vec<Vec2>,
    bounces: u32,
}

impl FlightController {
    pub fn new(physics: PhysicsConfig, scene: &Scene) -> Self {
        let markers = vec![
            Marker {
                position: Vec2::ZERO,
                visible: false,
            };
            physics.preview_points
        ];
        Self {
            physics,
            projectile: Projectile {
                position: scene.bird.position(),
                velocity: Vec2::ZERO,
            },
            phase: FlightPhase::Idle,
            markers,
            trail: Vec::new(),
            bounces: 0,
        }
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }

    pub fn projectile(&self) -> Projectile {
        self.projectile
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Positions after each tick of the current (or most recent) flight.
    pub fn trail(&self) -> &[Vec2] {
        &self.trail
    }

    pub fn bounces(&self) -> u32 {
        self.bounces
    }

    pub fn is_airborne(&self) -> bool {
        self.phase == FlightPhase::Airborne
    }

    pub fn projectile_center(&self, scene: &Scene) -> Vec2 {
        self.projectile.position + scene.bird_size() / 2.0
    }

    pub fn handle(
        &mut self,
        event: FlightEvent,
        scene: &Scene,
        effects: &mut impl FlightEffects,
    ) -> FlightResponse {
        match event {
            FlightEvent::PointerDown(p) => self.pointer_down(p, scene),
            FlightEvent::PointerMove(p) => self.pointer_move(p, scene, effects),
            FlightEvent::PointerUp(p) => self.pointer_up(p, effects),
            FlightEvent::Tick => self.tick(scene, effects),
        }
    }

    fn pointer_down(&mut self, p: Vec2, scene: &Scene) -> FlightResponse {
        if self.phase != FlightPhase::Idle {
            debug!(?p, phase = ?self.phase, "press ignored outside idle");
            return FlightResponse::Ignored;
        }

        let radius = self.physics.grab_radius;
        if p.distance_squared(self.projectile_center(scene)) > radius * radius {
            debug!(?p, "press outside grab radius");
            return FlightResponse::Ignored;
        }

        self.phase = FlightPhase::Dragging { anchor: p };
        FlightResponse::DragStarted
    }

    fn pointer_move(
        &mut self,
        p: Vec2,
        scene: &Scene,
        effects: &mut impl FlightEffects,
    ) -> FlightResponse {
        let FlightPhase::Dragging { anchor } = self.phase else {
            return FlightResponse::Ignored;
        };

        let drag = anchor - p;
        let half = scene.bird_size() / 2.0;
        self.projectile.position = anchor - half - drag;
        effects.set_position(ObjectId::Projectile, self.projectile.position);

        self.update_preview(self.projectile.position + half, drag, effects);
        FlightResponse::Dragged
    }

    fn pointer_up(&mut self, p: Vec2, effects: &mut impl FlightEffects) -> FlightResponse {
        let FlightPhase::Dragging { anchor } = self.phase else {
            return FlightResponse::Ignored;
        };

        let launch = anchor - p;
        self.projectile.velocity = launch / self.physics.launch_scale;
        self.clear_preview(effects);
        self.trail.clear();
        self.bounces = 0;
        self.phase = FlightPhase::Airborne;
        effects.start_timer();

        info!(
            from = ?self.projectile.position,
            velocity = ?self.projectile.velocity,
            "bird launched"
        );
        FlightResponse::Launched {
            velocity: self.projectile.velocity,
        }
    }

    fn tick(&mut self, scene: &Scene, effects: &mut impl FlightEffects) -> FlightResponse {
        if self.phase != FlightPhase::Airborne {
            return FlightResponse::Ignored;
        }

        self.projectile.position += self.projectile.velocity;
        self.projectile.velocity.y += self.physics.gravity;
        self.trail.push(self.projectile.position);
        effects.set_position(ObjectId::Projectile, self.projectile.position);

        self.check_collisions(scene, effects)
    }

    fn check_collisions(
        &mut self,
        scene: &Scene,
        effects: &mut impl FlightEffects,
    ) -> FlightResponse {
        let bird = collision_rect_at(
            self.projectile.position,
            scene.bird_size(),
            scene.bird.shrink,
        );

        if touches_any(&bird, &[scene.pig]) {
            return self.land(Outcome::Hit, scene, effects);
        }
        if touches_any(&bird, &scene.ground()) {
            return self.land(Outcome::Miss, scene, effects);
        }

        let bounced = touches_any(&bird, &scene.bouncers());
        if bounced {
            self.projectile.velocity.y = -self.projectile.velocity.y * self.physics.bounce_damping;
            self.bounces += 1;
            debug!(velocity = ?self.projectile.velocity, bounces = self.bounces, "bounce");
        }

        // Only the far edges count; leaving through the top or left keeps flying.
        let position = self.projectile.position;
        if position.y > scene.canvas_height || position.x > scene.canvas_width {
            return self.land(Outcome::OutOfBounds, scene, effects);
        }

        if bounced {
            FlightResponse::Bounced
        } else {
            FlightResponse::Flying
        }
    }

    fn land(
        &mut self,
        outcome: Outcome,
        scene: &Scene,
        effects: &mut impl FlightEffects,
    ) -> FlightResponse {
        effects.stop_timer();
        if let Some(message) = outcome.message() {
            effects.show_message(message);
        }
        info!(
            outcome = outcome.label(),
            ticks = self.trail.len(),
            bounces = self.bounces,
            at = ?self.projectile.position,
            "flight over"
        );
        self.phase = FlightPhase::Idle;
        self.reset(scene, effects);
        FlightResponse::Landed(outcome)
    }

    /// Put the bird back on the slingshot. Velocity is left alone; the next
    /// release overwrites it.
    pub fn reset(&mut self, scene: &Scene, effects: &mut impl FlightEffects) {
        self.projectile.position = scene.start_position();
        effects.set_position(ObjectId::Projectile, self.projectile.position);
    }

    fn update_preview(&mut self, center: Vec2, drag: Vec2, effects: &mut impl FlightEffects) {
        let velocity = drag / self.physics.launch_scale;
        let points = sample_trajectory(
            center,
            velocity,
            self.physics.gravity,
            self.markers.len(),
            self.physics.preview_time_step,
        );
        for (i, (marker, point)) in self.markers.iter_mut().zip(points).enumerate() {
            marker.position = marker_top_left(point, self.physics.marker_size);
            marker.visible = true;
            effects.set_position(ObjectId::Marker(i), marker.position);
            effects.set_visibility(i, true);
        }
    }

    fn clear_preview(&mut self, effects: &mut impl FlightEffects) {
        for (i, marker) in self.markers.iter_mut().enumerate() {
            marker.visible = false;
            effects.set_visibility(i, false);
        }
    }
}

fn touches_any(bird: &Rect, objects: &[SceneObject]) -> bool {
    objects
        .iter()
        .any(|object| rects_intersect(bird, &object.collision_rect()))
}

/// Result of a headless shot.
#[derive(Clone, Debug, PartialEq)]
pub struct ShotReport {
    pub launch_velocity: Vec2,
    pub final_velocity: Vec2,
    /// `None` when `max_ticks` ran out first.
    pub outcome: Option<Outcome>,
    pub ticks: usize,
    pub bounces: u32,
    pub path: Vec<Vec2>,
    pub messages: Vec<String>,
}

/// Grab the bird at its centre, release it `drag` away (anchor minus release)
/// and tick until the flight ends or `max_ticks` pass.
pub fn simulate_shot(config: &GameConfig, drag: Vec2, max_ticks: usize) -> ShotReport {
    let scene = &config.scene;
    let mut controller = FlightController::new(config.physics.clone(), scene);
    let mut effects = EffectLog::new();

    let anchor = controller.projectile_center(scene);
    controller.handle(FlightEvent::PointerDown(anchor), scene, &mut effects);
    let launch_velocity = match controller.handle(
        FlightEvent::PointerUp(anchor - drag),
        scene,
        &mut effects,
    ) {
        FlightResponse::Launched { velocity } => velocity,
        _ => vec2(0.0, 0.0),
    };

    let mut outcome = None;
    for _ in 0..max_ticks {
        let response = controller.handle(FlightEvent::Tick, scene, &mut effects);
        // The trail already holds the path; only messages are reported from the log.
        effects.retain_messages();
        if let FlightResponse::Landed(landed) = response {
            outcome = Some(landed);
            break;
        }
    }

    ShotReport {
        launch_velocity,
        final_velocity: controller.projectile().velocity,
        outcome,
        ticks: controller.trail().len(),
        bounces: controller.bounces(),
        path: controller.trail().to_vec(),
        messages: effects.messages().into_iter().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::effects::Effect;

    fn assert_close(actual: f32, expected: f32, tolerance: f32) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    /// Default scene with every obstacle pushed far off the canvas.
    fn empty_scene() -> Scene {
        let far = SceneObject::new(10_000.0, 10_000.0, 1.0, 1.0, 1.0);
        Scene {
            pig: far,
            grass1: far,
            grass2: far,
            barn: far,
            sun: far,
            ..Scene::default()
        }
    }

    fn controller(scene: &Scene) -> FlightController {
        FlightController::new(PhysicsConfig::default(), scene)
    }

    fn launch(
        controller: &mut FlightController,
        scene: &Scene,
        effects: &mut EffectLog,
        drag: Vec2,
    ) -> FlightResponse {
        let anchor = controller.projectile_center(scene);
        assert_eq!(
            controller.handle(FlightEvent::PointerDown(anchor), scene, effects),
            FlightResponse::DragStarted
        );
        controller.handle(FlightEvent::PointerUp(anchor - drag), scene, effects)
    }

    #[test]
    fn grab_radius_is_inclusive() {
        let scene = Scene::default();
        let center = vec2(125.0, 325.0);

        let mut effects = EffectLog::new();

        let mut ctl = controller(&scene);
        let on_edge = FlightEvent::PointerDown(center + vec2(70.0, 0.0));
        assert_eq!(
            ctl.handle(on_edge, &scene, &mut effects),
            FlightResponse::DragStarted
        );

        let mut ctl = controller(&scene);
        let just_outside = FlightEvent::PointerDown(center + vec2(42.0, 56.1));
        assert_eq!(
            ctl.handle(just_outside, &scene, &mut effects),
            FlightResponse::Ignored
        );
        assert_eq!(ctl.phase(), FlightPhase::Idle);
    }

    #[test]
    fn move_and_release_without_session_are_noops() {
        let scene = Scene::default();
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();

        assert_eq!(
            ctl.handle(FlightEvent::PointerMove(vec2(5.0, 5.0)), &scene, &mut effects),
            FlightResponse::Ignored
        );
        assert_eq!(
            ctl.handle(FlightEvent::PointerUp(vec2(5.0, 5.0)), &scene, &mut effects),
            FlightResponse::Ignored
        );
        assert_eq!(ctl.handle(FlightEvent::Tick, &scene, &mut effects), FlightResponse::Ignored);
        assert!(effects.effects.is_empty());
    }

    #[test]
    fn release_divides_drag_by_ten() {
        let scene = empty_scene();
        let mut ctl = controller(&scene);
        let response = launch(&mut ctl, &scene, &mut EffectLog::new(), vec2(-37.0, 84.0));

        assert_eq!(
            response,
            FlightResponse::Launched {
                velocity: vec2(-3.7, 8.4)
            }
        );
        assert!(ctl.is_airborne());
    }

    #[test]
    fn drag_moves_sprite_under_pointer_and_shows_every_marker() {
        let scene = Scene::default();
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();
        let anchor = vec2(125.0, 325.0);
        ctl.handle(FlightEvent::PointerDown(anchor), &scene, &mut effects);

        let pointer = vec2(60.0, 360.0);
        ctl.handle(FlightEvent::PointerMove(pointer), &scene, &mut effects);

        assert_eq!(ctl.projectile().position, vec2(35.0, 335.0));
        assert_eq!(effects.last_position(ObjectId::Projectile), Some(vec2(35.0, 335.0)));
        assert_eq!(ctl.markers().len(), 50);
        assert!(ctl.markers().iter().all(|m| m.visible));
        assert_eq!(effects.count(&Effect::SetVisibility(49, true)), 1);
        // First marker is centred on the bird centre (= pointer).
        assert_eq!(ctl.markers()[0].position, vec2(57.5, 357.5));
        // Velocity is not applied during the preview.
        assert_eq!(ctl.projectile().velocity, Vec2::ZERO);
    }

    #[test]
    fn every_marker_follows_the_closed_form_path() {
        let scene = Scene::default();
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();
        ctl.handle(FlightEvent::PointerDown(vec2(125.0, 325.0)), &scene, &mut effects);
        ctl.handle(FlightEvent::PointerMove(vec2(60.0, 360.0)), &scene, &mut effects);

        // drag = (65, -35), so velocity (6.5, -3.5) from the centre (60, 360).
        for (i, marker) in ctl.markers().iter().enumerate() {
            let t = i as f32 * 4.0;
            let x = 60.0 + 6.5 * t;
            let y = 360.0 - 3.5 * t + 0.5 * 0.5 * t * t;
            let tolerance = 1e-3 * y.abs().max(1.0);
            assert_close(marker.position.x, x - 2.5, tolerance);
            assert_close(marker.position.y, y - 2.5, tolerance);
            assert_eq!(
                effects.last_position(ObjectId::Marker(i)),
                Some(marker.position)
            );
        }
    }

    #[test]
    fn release_hides_markers_and_starts_timer() {
        let scene = Scene::default();
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();
        let anchor = vec2(125.0, 325.0);
        ctl.handle(FlightEvent::PointerDown(anchor), &scene, &mut effects);
        ctl.handle(FlightEvent::PointerMove(vec2(100.0, 350.0)), &scene, &mut effects);
        effects.clear();

        ctl.handle(FlightEvent::PointerUp(vec2(100.0, 350.0)), &scene, &mut effects);

        assert!(ctl.markers().iter().all(|m| !m.visible));
        for i in 0..50 {
            assert_eq!(effects.count(&Effect::SetVisibility(i, false)), 1);
        }
        assert_eq!(effects.effects.last(), Some(&Effect::StartTimer));
        // Flight starts from where the sprite was dragged to.
        assert_eq!(ctl.projectile().position, vec2(75.0, 325.0));
    }

    #[test]
    fn euler_ticks_match_the_worked_example() {
        let scene = empty_scene();
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();
        launch(&mut ctl, &scene, &mut effects, vec2(100.0, 50.0));
        let start = ctl.projectile().position;

        assert_eq!(ctl.handle(FlightEvent::Tick, &scene, &mut effects), FlightResponse::Flying);
        assert_eq!(ctl.projectile().position, start + vec2(10.0, 5.0));
        assert_eq!(ctl.projectile().velocity.y, 5.5);

        ctl.handle(FlightEvent::Tick, &scene, &mut effects);
        assert_eq!(ctl.projectile().position, start + vec2(20.0, 10.5));
        assert_eq!(ctl.projectile().velocity.y, 6.0);
    }

    #[test]
    fn gravity_accumulates_per_tick() {
        let scene = empty_scene();
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();
        launch(&mut ctl, &scene, &mut effects, vec2(-20.0, -300.0));
        let start = ctl.projectile().position;

        let mut expected = start;
        let mut vy = -30.0;
        for _ in 0..20 {
            expected += vec2(-2.0, vy);
            vy += 0.5;
            ctl.handle(FlightEvent::Tick, &scene, &mut effects);
        }
        assert_close(ctl.projectile().velocity.y, -30.0 + 0.5 * 20.0, 1e-4);
        assert_close(ctl.projectile().position.x, expected.x, 1e-3);
        assert_close(ctl.projectile().position.y, expected.y, 1e-3);
        assert_eq!(ctl.trail().len(), 20);
    }

    #[test]
    fn pig_hit_stops_timer_shows_message_and_resets() {
        let mut scene = empty_scene();
        scene.pig = SceneObject::new(110.0, 300.0, 60.0, 60.0, 1.5);
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();
        launch(&mut ctl, &scene, &mut effects, vec2(-100.0, 0.0));
        effects.clear();

        let response = ctl.handle(FlightEvent::Tick, &scene, &mut effects);

        assert_eq!(response, FlightResponse::Landed(Outcome::Hit));
        assert_eq!(
            effects.effects[1..],
            [
                Effect::StopTimer,
                Effect::ShowMessage(HIT_MESSAGE.to_string()),
                Effect::SetPosition(ObjectId::Projectile, vec2(100.0, 300.0)),
            ]
        );
        assert_eq!(ctl.phase(), FlightPhase::Idle);
        assert_eq!(ctl.projectile().position, vec2(100.0, 300.0));
    }

    #[test]
    fn pig_wins_over_grass_on_the_same_tick() {
        let mut scene = empty_scene();
        scene.pig = SceneObject::new(100.0, 300.0, 60.0, 60.0, 1.5);
        scene.grass1 = SceneObject::new(0.0, 300.0, 400.0, 50.0, 1.0);
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();
        launch(&mut ctl, &scene, &mut effects, vec2(0.0, 0.0));

        assert_eq!(
            ctl.handle(FlightEvent::Tick, &scene, &mut effects),
            FlightResponse::Landed(Outcome::Hit)
        );
        assert_eq!(effects.messages(), vec![HIT_MESSAGE]);
    }

    #[test]
    fn grass_is_a_miss() {
        let scene = Scene::default();
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();
        // Straight down onto grass1.
        launch(&mut ctl, &scene, &mut effects, vec2(0.0, 100.0));

        let mut last = FlightResponse::Flying;
        for _ in 0..50 {
            last = ctl.handle(FlightEvent::Tick, &scene, &mut effects);
            if matches!(last, FlightResponse::Landed(_)) {
                break;
            }
        }
        assert_eq!(last, FlightResponse::Landed(Outcome::Miss));
        assert_eq!(effects.messages(), vec![MISS_MESSAGE]);
        assert_eq!(effects.count(&Effect::StopTimer), 1);
        assert_eq!(ctl.projectile().position, scene.start_position());
    }

    #[test]
    fn barn_bounce_flips_and_damps_vertical_velocity() {
        let mut scene = empty_scene();
        scene.barn = SceneObject::new(100.0, 310.0, 200.0, 20.0, 1.0);
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();
        launch(&mut ctl, &scene, &mut effects, vec2(30.0, 40.0));

        let response = ctl.handle(FlightEvent::Tick, &scene, &mut effects);

        assert_eq!(response, FlightResponse::Bounced);
        assert_close(ctl.projectile().velocity.y, -(4.0 + 0.5) * 0.9, 1e-5);
        assert_eq!(ctl.projectile().velocity.x, 3.0);
        assert!(ctl.is_airborne());
        assert_eq!(ctl.bounces(), 1);
        assert!(effects.messages().is_empty());
        assert_eq!(effects.count(&Effect::StopTimer), 0);
    }

    #[test]
    fn sun_bounces_like_the_barn() {
        let mut scene = empty_scene();
        scene.sun = SceneObject::new(100.0, 320.0, 90.0, 90.0, 1.5);
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();
        launch(&mut ctl, &scene, &mut effects, vec2(0.0, 40.0));

        assert_eq!(ctl.handle(FlightEvent::Tick, &scene, &mut effects), FlightResponse::Bounced);
        assert_close(ctl.projectile().velocity.y, -4.05, 1e-5);
        assert_eq!(ctl.projectile().velocity.x, 0.0);
        assert!(ctl.is_airborne());
    }

    #[test]
    fn second_grass_strip_is_a_miss_too() {
        let mut scene = empty_scene();
        scene.grass2 = SceneObject::new(0.0, 340.0, 800.0, 50.0, 1.0);
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();
        launch(&mut ctl, &scene, &mut effects, vec2(0.0, 100.0));

        assert_eq!(
            ctl.handle(FlightEvent::Tick, &scene, &mut effects),
            FlightResponse::Landed(Outcome::Miss)
        );
        assert_eq!(effects.messages(), vec![MISS_MESSAGE]);
        assert_eq!(ctl.projectile().position, scene.start_position());
    }

    #[test]
    fn falling_past_the_bottom_edge_resets_silently() {
        let mut scene = empty_scene();
        scene.canvas_height = 320.0;
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();
        launch(&mut ctl, &scene, &mut effects, vec2(0.0, 300.0));

        assert_eq!(
            ctl.handle(FlightEvent::Tick, &scene, &mut effects),
            FlightResponse::Landed(Outcome::OutOfBounds)
        );
        assert!(effects.messages().is_empty());
        assert_eq!(effects.count(&Effect::StopTimer), 1);
        assert_eq!(ctl.projectile().position, vec2(100.0, 300.0));
    }

    #[test]
    fn bounce_then_out_of_bounds_on_one_tick_ends_the_flight() {
        let mut scene = empty_scene();
        scene.barn = SceneObject::new(0.0, 320.0, 800.0, 200.0, 1.0);
        scene.canvas_height = 320.0;
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();
        launch(&mut ctl, &scene, &mut effects, vec2(0.0, 300.0));

        assert_eq!(
            ctl.handle(FlightEvent::Tick, &scene, &mut effects),
            FlightResponse::Landed(Outcome::OutOfBounds)
        );
        assert_eq!(ctl.bounces(), 1);
        assert_eq!(ctl.phase(), FlightPhase::Idle);
        assert_eq!(ctl.projectile().position, scene.start_position());
    }

    #[test]
    fn leaving_right_or_bottom_edge_resets_silently() {
        let mut scene = empty_scene();
        scene.canvas_width = 150.0;
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();
        launch(&mut ctl, &scene, &mut effects, vec2(600.0, 0.0));

        assert_eq!(
            ctl.handle(FlightEvent::Tick, &scene, &mut effects),
            FlightResponse::Landed(Outcome::OutOfBounds)
        );
        assert!(effects.messages().is_empty());
        assert_eq!(effects.count(&Effect::StopTimer), 1);
        assert_eq!(ctl.projectile().position, scene.start_position());
    }

    #[test]
    fn leaving_top_or_left_edge_keeps_flying() {
        let scene = empty_scene();
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();
        launch(&mut ctl, &scene, &mut effects, vec2(-2_000.0, -4_000.0));

        assert_eq!(ctl.handle(FlightEvent::Tick, &scene, &mut effects), FlightResponse::Flying);
        assert!(ctl.projectile().position.x < 0.0);
        assert!(ctl.projectile().position.y < 0.0);
    }

    #[test]
    fn presses_during_flight_are_ignored() {
        let scene = empty_scene();
        let mut ctl = controller(&scene);
        let mut effects = EffectLog::new();
        launch(&mut ctl, &scene, &mut effects, vec2(10.0, -10.0));
        ctl.handle(FlightEvent::Tick, &scene, &mut effects);

        let center = ctl.projectile_center(&scene);
        assert_eq!(
            ctl.handle(FlightEvent::PointerDown(center), &scene, &mut effects),
            FlightResponse::Ignored
        );
        assert!(ctl.is_airborne());
    }

    #[test]
    fn simulate_shot_reports_a_default_scene_miss() {
        let report = simulate_shot(&GameConfig::default(), vec2(0.0, 50.0), 500);
        assert_eq!(report.launch_velocity, vec2(0.0, 5.0));
        assert_eq!(report.outcome, Some(Outcome::Miss));
        assert_eq!(report.messages, vec![MISS_MESSAGE.to_string()]);
        assert_eq!(report.path.len(), report.ticks);
    }

    #[test]
    fn simulate_shot_stops_at_tick_budget() {
        let report = simulate_shot(&GameConfig::default(), vec2(0.0, -200.0), 3);
        assert_eq!(report.outcome, None);
        assert_eq!(report.ticks, 3);
    }

    #[test]
    fn simulate_shot_reports_the_hit_message() {
        let mut config = GameConfig::default();
        config.scene = empty_scene();
        config.scene.pig = SceneObject::new(150.0, 300.0, 60.0, 60.0, 1.5);
        // 10 units per tick: the shrunk bird box reaches x = 150 on tick 2.
        let report = simulate_shot(&config, vec2(100.0, 0.0), 100);
        assert_eq!(report.outcome, Some(Outcome::Hit));
        assert_eq!(report.messages, vec![HIT_MESSAGE.to_string()]);
        assert_eq!(report.ticks, 2);
    }
}
