use macroquad::prelude::*;
use slingshot_rust::core::config::GameConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::constants::{INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, MSAA_SAMPLES, UI_FONT_PATH};
use crate::gameplay::{apply_pointer_events, step_active_flight};
use crate::hud::{draw_hud, draw_message_banner};
use crate::input::{dismiss_pressed, poll_pointer_events};
use crate::render::{draw_bird, draw_markers, draw_scene, draw_trail};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Slingshot".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("slingshot_rust=info,slingshot=info")),
        )
        .init();
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let config = GameConfig::load_or_default(GameConfig::default_path());
    info!(
        tick_ms = config.physics.tick_interval_ms,
        gravity = config.physics.gravity,
        "starting slingshot"
    );
    let mut state = AppRuntime::new(config);

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();
        state.resize(screen_w, screen_h);

        let events = poll_pointer_events(&mut state.pointer, &state.viewport);
        if state.stage.is_modal() {
            if dismiss_pressed() {
                state.stage.message = None;
            }
        } else {
            apply_pointer_events(&mut state, &events);
        }

        step_active_flight(&mut state, frame_dt);

        draw_scene(&state.scene, &state.viewport);
        draw_trail(state.controller.trail(), &state.scene, &state.viewport);
        draw_markers(
            &state.stage,
            state.controller.physics().marker_size,
            &state.viewport,
        );
        draw_bird(&state.stage, &state.scene, &state.viewport);
        draw_hud(&state, screen_h, ui_font.as_ref());

        if let Some(message) = &state.stage.message {
            draw_message_banner(message, screen_w, screen_h, ui_font.as_ref());
        }

        next_frame().await;
    }
}
