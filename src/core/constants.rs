// Physics, in scene units per tick.
pub const GRAVITY_PER_TICK: f32 = 0.5;
pub const LAUNCH_SCALE: f32 = 10.0; // drag distance -> velocity divisor
pub const BOUNCE_DAMPING: f32 = 0.9;
pub const GRAB_RADIUS: f32 = 70.0;
pub const TICK_INTERVAL_MS: u64 = 20;
pub const MAX_TICKS_PER_FRAME: u32 = 5;

// Trajectory preview.
pub const PREVIEW_POINTS: usize = 50;
pub const PREVIEW_TIME_STEP: f32 = 4.0;
pub const MARKER_SIZE: f32 = 5.0;

// Sprite shrink factors applied to collision rectangles.
pub const ROUND_SPRITE_SHRINK: f32 = 1.5;
pub const RECT_SPRITE_SHRINK: f32 = 1.0;

// Scene layout.
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 450.0;
/// Upper bound for either canvas dimension read from a config file.
pub const MAX_CANVAS_SIZE: f32 = 8192.0;
pub const START_X: f32 = 100.0;
pub const START_Y: f32 = 300.0;

pub const BIRD_SIZE: f32 = 50.0;
pub const PIG_X: f32 = 640.0;
pub const PIG_Y: f32 = 340.0;
pub const PIG_SIZE: f32 = 60.0;
pub const GROUND_Y: f32 = 400.0;
pub const GRASS_HEIGHT: f32 = 50.0;
pub const BARN_X: f32 = 420.0;
pub const BARN_Y: f32 = 260.0;
pub const BARN_WIDTH: f32 = 110.0;
pub const BARN_HEIGHT: f32 = 140.0;
pub const SUN_X: f32 = 620.0;
pub const SUN_Y: f32 = 20.0;
pub const SUN_SIZE: f32 = 90.0;

pub const HIT_MESSAGE: &str = "You hit the pig!";
pub const MISS_MESSAGE: &str = "You fell :(";

pub const CONFIG_FILE: &str = "slingshot.toml";
pub const CONFIG_ENV_VAR: &str = "SLINGSHOT_CONFIG";
