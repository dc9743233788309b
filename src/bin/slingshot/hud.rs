use macroquad::prelude::*;

use crate::constants::{
    BANNER_BG, BANNER_FONT_SIZE, BANNER_HEIGHT, BANNER_WIDTH, DISMISS_HINT, HUD_FONT_SIZE,
    HUD_MARGIN,
};
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, screen_h: f32, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_ui_text(
        &format!("{} | {}", state.phase_text(), state.status_line),
        HUD_MARGIN,
        HUD_MARGIN + HUD_FONT_SIZE as f32,
        HUD_FONT_SIZE,
        header_color,
        font,
    );

    if let Some(record) = state.last_outcome {
        draw_ui_text(
            &format!(
                "Last shot: {} at {} after {} ticks, {} bounce(s)",
                record.outcome.label(),
                record.at.format("%H:%M:%S"),
                record.ticks,
                record.bounces
            ),
            HUD_MARGIN,
            screen_h - HUD_MARGIN,
            HUD_FONT_SIZE - 2,
            DARKGRAY,
            font,
        );
    }
}

/// Blocks the game like a message box until the player acknowledges it.
pub(crate) fn draw_message_banner(
    message: &str,
    screen_w: f32,
    screen_h: f32,
    font: Option<&Font>,
) {
    let rect = Rect::new(
        (screen_w - BANNER_WIDTH) * 0.5,
        (screen_h - BANNER_HEIGHT) * 0.5,
        BANNER_WIDTH,
        BANNER_HEIGHT,
    );
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, BANNER_BG);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.5, WHITE);

    let size = measure_text(message, font, BANNER_FONT_SIZE, 1.0);
    draw_ui_text(
        message,
        rect.x + (rect.w - size.width) * 0.5,
        rect.y + rect.h * 0.45,
        BANNER_FONT_SIZE,
        WHITE,
        font,
    );

    let hint_size = measure_text(DISMISS_HINT, font, HUD_FONT_SIZE, 1.0);
    draw_ui_text(
        DISMISS_HINT,
        rect.x + (rect.w - hint_size.width) * 0.5,
        rect.y + rect.h - 24.0,
        HUD_FONT_SIZE,
        LIGHTGRAY,
        font,
    );
}
