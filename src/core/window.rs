use macroquad::math::{Vec2, vec2};

/// Maps scene units to screen pixels with one uniform scale, anchored at the
/// top-left corner. The whole design canvas always fits on screen; any extra
/// window space extends the visible scene to the right or bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub screen: Vec2,
}

impl Viewport {
    pub fn fit(design: Vec2, screen: Vec2) -> Self {
        let design = design.max(Vec2::ONE);
        let screen = screen.max(Vec2::ONE);
        let scale = (screen.x / design.x).min(screen.y / design.y);
        Self { scale, screen }
    }

    /// Scene extent currently on screen; this is what the out-of-bounds test
    /// compares against.
    pub fn visible_scene(&self) -> Vec2 {
        self.screen / self.scale
    }

    pub fn to_screen(&self, scene: Vec2) -> Vec2 {
        scene * self.scale
    }

    pub fn to_scene(&self, screen: Vec2) -> Vec2 {
        screen / self.scale
    }

    pub fn size_to_screen(&self, size: Vec2) -> Vec2 {
        size * self.scale
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            screen: vec2(1.0, 1.0),
        }
    }
}
