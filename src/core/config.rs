//! Game configuration.
//!
//! Every tunable has a default in [`crate::core::constants`]; a TOML file can
//! override any subset of them.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::constants::{
    BOUNCE_DAMPING, CONFIG_ENV_VAR, CONFIG_FILE, GRAB_RADIUS, GRAVITY_PER_TICK, LAUNCH_SCALE,
    MARKER_SIZE, MAX_CANVAS_SIZE, PREVIEW_POINTS, PREVIEW_TIME_STEP, TICK_INTERVAL_MS,
};
use crate::core::error::ConfigError;
use crate::core::scene::{Scene, SceneObject};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to vertical velocity once per tick.
    pub gravity: f32,
    /// Drag distance is divided by this to get launch velocity.
    pub launch_scale: f32,
    pub bounce_damping: f32,
    pub grab_radius: f32,
    pub tick_interval_ms: u64,
    pub preview_points: usize,
    pub preview_time_step: f32,
    pub marker_size: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY_PER_TICK,
            launch_scale: LAUNCH_SCALE,
            bounce_damping: BOUNCE_DAMPING,
            grab_radius: GRAB_RADIUS,
            tick_interval_ms: TICK_INTERVAL_MS,
            preview_points: PREVIEW_POINTS,
            preview_time_step: PREVIEW_TIME_STEP,
            marker_size: MARKER_SIZE,
        }
    }
}

impl PhysicsConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub scene: Scene,
}

impl GameConfig {
    /// `$SLINGSHOT_CONFIG` if set, otherwise `slingshot.toml` in the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate();
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Never fails: a missing file means defaults, a broken one means
    /// defaults plus a warning.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("{err}; falling back to defaults");
                Self::default()
            }
        }
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Clamp values that would stall or break the simulation. Gravity must
    /// stay positive, otherwise a throw up and to the left never comes down.
    pub fn validate(&mut self) {
        let physics = &mut self.physics;
        if !(physics.gravity.is_finite() && physics.gravity > 0.0) {
            warn!(gravity = physics.gravity, "gravity must be positive; using default");
            physics.gravity = GRAVITY_PER_TICK;
        }
        physics.launch_scale = physics.launch_scale.max(0.01);
        physics.bounce_damping = if physics.bounce_damping.is_finite() {
            physics.bounce_damping.clamp(0.0, 1.0)
        } else {
            BOUNCE_DAMPING
        };
        physics.grab_radius = physics.grab_radius.max(0.0);
        physics.tick_interval_ms = physics.tick_interval_ms.clamp(1, 1000);
        physics.preview_points = physics.preview_points.clamp(1, 500);
        physics.preview_time_step = physics.preview_time_step.max(0.0);
        physics.marker_size = physics.marker_size.max(1.0);

        let scene = &mut self.scene;
        scene.canvas_width = scene.canvas_width.max(1.0).min(MAX_CANVAS_SIZE);
        scene.canvas_height = scene.canvas_height.max(1.0).min(MAX_CANVAS_SIZE);
        for object in [
            &mut scene.bird,
            &mut scene.pig,
            &mut scene.grass1,
            &mut scene.grass2,
            &mut scene.barn,
            &mut scene.sun,
        ] {
            clamp_object(object);
        }
    }
}

fn clamp_object(object: &mut SceneObject) {
    object.w = object.w.max(0.0);
    object.h = object.h.max(0.0);
    object.shrink = object.shrink.max(1.0);
}
