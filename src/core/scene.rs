use macroquad::math::{Rect, Vec2, vec2};
use serde::{Deserialize, Serialize};

use crate::core::constants::{
    BARN_HEIGHT, BARN_WIDTH, BARN_X, BARN_Y, BIRD_SIZE, CANVAS_HEIGHT, CANVAS_WIDTH, GRASS_HEIGHT,
    GROUND_Y, PIG_SIZE, PIG_X, PIG_Y, RECT_SPRITE_SHRINK, ROUND_SPRITE_SHRINK, START_X, START_Y,
    SUN_SIZE, SUN_X, SUN_Y,
};

/// A sprite placed on the canvas. `x`/`y` is the top-left corner; `shrink`
/// divides the size when building the collision rectangle so round sprites
/// don't collide on their transparent corners.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub shrink: f32,
}

impl SceneObject {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, shrink: f32) -> Self {
        Self { x, y, w, h, shrink }
    }

    pub fn position(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.w, self.h)
    }

    pub fn collision_rect(&self) -> Rect {
        collision_rect_at(self.position(), self.size(), self.shrink)
    }
}

pub fn collision_rect_at(top_left: Vec2, size: Vec2, shrink: f32) -> Rect {
    Rect::new(top_left.x, top_left.y, size.x / shrink, size.y / shrink)
}

/// Touching edges count as an intersection.
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    a.x <= b.x + b.w && a.x + a.w >= b.x && a.y <= b.y + b.h && a.y + a.h >= b.y
}

/// Everything the flight controller reads but never mutates: the canvas
/// extent, the launch spot and the static sprites. `bird` gives the sprite
/// size and where it first appears; every reset goes to `start_x`/`start_y`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub start_x: f32,
    pub start_y: f32,
    pub bird: SceneObject,
    pub pig: SceneObject,
    pub grass1: SceneObject,
    pub grass2: SceneObject,
    pub barn: SceneObject,
    pub sun: SceneObject,
}

impl Default for Scene {
    fn default() -> Self {
        let half_width = CANVAS_WIDTH / 2.0;
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            start_x: START_X,
            start_y: START_Y,
            bird: SceneObject::new(START_X, START_Y, BIRD_SIZE, BIRD_SIZE, ROUND_SPRITE_SHRINK),
            pig: SceneObject::new(PIG_X, PIG_Y, PIG_SIZE, PIG_SIZE, ROUND_SPRITE_SHRINK),
            grass1: SceneObject::new(0.0, GROUND_Y, half_width, GRASS_HEIGHT, RECT_SPRITE_SHRINK),
            grass2: SceneObject::new(
                half_width,
                GROUND_Y,
                half_width,
                GRASS_HEIGHT,
                RECT_SPRITE_SHRINK,
            ),
            barn: SceneObject::new(BARN_X, BARN_Y, BARN_WIDTH, BARN_HEIGHT, RECT_SPRITE_SHRINK),
            sun: SceneObject::new(SUN_X, SUN_Y, SUN_SIZE, SUN_SIZE, ROUND_SPRITE_SHRINK),
        }
    }
}

impl Scene {
    pub fn start_position(&self) -> Vec2 {
        vec2(self.start_x, self.start_y)
    }

    pub fn canvas_size(&self) -> Vec2 {
        vec2(self.canvas_width, self.canvas_height)
    }

    pub fn bird_size(&self) -> Vec2 {
        self.bird.size()
    }

    pub fn ground(&self) -> [SceneObject; 2] {
        [self.grass1, self.grass2]
    }

    pub fn bouncers(&self) -> [SceneObject; 2] {
        [self.barn, self.sun]
    }
}
