use macroquad::prelude::*;
use slingshot_rust::core::scene::{Scene, SceneObject};
use slingshot_rust::core::window::Viewport;

use crate::constants::{
    BARN_COLOR, BARN_TRIM_COLOR, BEAK_COLOR, BIRD_COLOR, GRASS_COLOR, MARKER_COLOR, PIG_COLOR,
    SKY_COLOR, SLING_COLOR, SUN_COLOR, TRAIL_COLOR, TRAIL_DOT_RADIUS,
};
use crate::model::Stage;

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

fn screen_rect(object: &SceneObject, viewport: &Viewport) -> Rect {
    let p = viewport.to_screen(object.position());
    let size = viewport.size_to_screen(object.size());
    Rect::new(p.x, p.y, size.x, size.y)
}

fn draw_round_sprite(rect: Rect, color: Color) {
    let r = rect.w.min(rect.h) * 0.5;
    draw_circle(rect.x + rect.w * 0.5, rect.y + rect.h * 0.5, r, color);
}

pub(crate) fn draw_scene(scene: &Scene, viewport: &Viewport) {
    clear_background(SKY_COLOR);

    let sun = screen_rect(&scene.sun, viewport);
    draw_round_sprite(sun, SUN_COLOR);

    let barn = screen_rect(&scene.barn, viewport);
    let roof_h = barn.h * 0.3;
    draw_rectangle(barn.x, barn.y + roof_h, barn.w, barn.h - roof_h, BARN_COLOR);
    draw_triangle(
        vec2(barn.x, barn.y + roof_h),
        vec2(barn.x + barn.w, barn.y + roof_h),
        vec2(barn.x + barn.w * 0.5, barn.y),
        BARN_COLOR,
    );
    let door_w = barn.w * 0.36;
    let door_h = (barn.h - roof_h) * 0.55;
    draw_rectangle_lines(
        barn.x + (barn.w - door_w) * 0.5,
        barn.y + barn.h - door_h,
        door_w,
        door_h,
        3.0,
        BARN_TRIM_COLOR,
    );

    for grass in scene.ground() {
        let rect = screen_rect(&grass, viewport);
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, GRASS_COLOR);
    }

    let pig = screen_rect(&scene.pig, viewport);
    draw_round_sprite(pig, PIG_COLOR);
    let snout = pig.w.min(pig.h) * 0.14;
    draw_circle(pig.x + pig.w * 0.5, pig.y + pig.h * 0.58, snout, DARKGREEN);

    let start = viewport.to_screen(scene.start_position() + scene.bird_size() * vec2(0.5, 1.0));
    let post_w = 8.0 * viewport.scale;
    draw_rectangle(
        start.x - post_w * 0.5,
        start.y,
        post_w,
        (scene.grass1.y - scene.start_y - scene.bird.h).max(0.0) * viewport.scale,
        SLING_COLOR,
    );
}

pub(crate) fn draw_trail(trail: &[Vec2], scene: &Scene, viewport: &Viewport) {
    let half = scene.bird_size() * 0.5;
    for point in trail {
        let p = viewport.to_screen(*point + half);
        draw_circle(p.x, p.y, TRAIL_DOT_RADIUS * viewport.scale, TRAIL_COLOR);
    }
}

pub(crate) fn draw_markers(stage: &Stage, marker_size: f32, viewport: &Viewport) {
    let r = marker_size * 0.5;
    for marker in stage.markers.iter().filter(|m| m.visible) {
        let c = viewport.to_screen(marker.position + Vec2::splat(r));
        draw_circle(c.x, c.y, r * viewport.scale, MARKER_COLOR);
    }
}

pub(crate) fn draw_bird(stage: &Stage, scene: &Scene, viewport: &Viewport) {
    let top_left = viewport.to_screen(stage.bird_position);
    let size = viewport.size_to_screen(scene.bird_size());
    let rect = Rect::new(top_left.x, top_left.y, size.x, size.y);
    draw_round_sprite(rect, BIRD_COLOR);

    let cx = rect.x + rect.w * 0.5;
    let cy = rect.y + rect.h * 0.5;
    let r = rect.w.min(rect.h) * 0.5;
    draw_triangle(
        vec2(cx + r * 0.7, cy - r * 0.15),
        vec2(cx + r * 0.7, cy + r * 0.25),
        vec2(cx + r * 1.15, cy + r * 0.05),
        BEAK_COLOR,
    );
    draw_circle(cx + r * 0.35, cy - r * 0.3, r * 0.16, WHITE);
    draw_circle(cx + r * 0.4, cy - r * 0.3, r * 0.07, BLACK);
}
