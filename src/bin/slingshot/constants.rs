use macroquad::prelude::{Color, KeyCode};

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 720;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const SKY_COLOR: Color = Color::new(0.68, 0.85, 0.97, 1.0);
pub const SUN_COLOR: Color = Color::new(0.98, 0.80, 0.08, 1.0);
pub const BARN_COLOR: Color = Color::new(0.72, 0.11, 0.11, 1.0);
pub const BARN_TRIM_COLOR: Color = Color::new(0.96, 0.94, 0.90, 1.0);
pub const GRASS_COLOR: Color = Color::new(0.09, 0.64, 0.29, 1.0);
pub const PIG_COLOR: Color = Color::new(0.53, 0.94, 0.67, 1.0);
pub const BIRD_COLOR: Color = Color::new(0.86, 0.15, 0.15, 1.0);
pub const BEAK_COLOR: Color = Color::new(0.98, 0.75, 0.14, 1.0);
pub const MARKER_COLOR: Color = Color::new(0.45, 0.45, 0.45, 1.0);
pub const TRAIL_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.45);
pub const BANNER_BG: Color = Color::new(0.10, 0.10, 0.12, 0.88);
pub const SLING_COLOR: Color = Color::new(0.36, 0.22, 0.10, 1.0);

pub const HUD_MARGIN: f32 = 16.0;
pub const HUD_FONT_SIZE: u16 = 20;
pub const BANNER_FONT_SIZE: u16 = 36;
pub const BANNER_WIDTH: f32 = 460.0;
pub const BANNER_HEIGHT: f32 = 150.0;
pub const TRAIL_DOT_RADIUS: f32 = 1.5;

/// Besides a left click, these close the message banner.
pub const DISMISS_KEYS: [KeyCode; 2] = [KeyCode::Enter, KeyCode::Space];
pub const DISMISS_HINT: &str = "Click, Enter or Space";
