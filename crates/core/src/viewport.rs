//! Projection from the symmetric world window onto the pixel rectangle.

use tui_spin_types::WORLD_WINDOW;

/// Surface dimensions in pixels, read once at startup and constant for
/// the lifetime of the program (no resize handling).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Map a world point to pixel space.
    ///
    /// The world window `[-WORLD_WINDOW/2, WORLD_WINDOW/2]²` maps to
    /// `[0, width] × [height, 0]`. The Y axis flips because pixel rows
    /// grow downward while world Y grows upward.
    pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
        let half = WORLD_WINDOW / 2.0;
        let px = (x + half) * self.width / WORLD_WINDOW;
        let py = (-y + half) * self.height / WORLD_WINDOW;
        (px, py)
    }
}
