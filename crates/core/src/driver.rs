//! The animation driver: owns the rotation angle and the tick loop state.

use tui_spin_types::{FULL_TURN_DEGREES, SPIN_STEP_DEGREES};

use crate::render::render_frame;
use crate::surface::Surface;
use crate::viewport::Viewport;

/// Fixed-step animation state machine.
///
/// Each [`tick`](SpinDriver::tick) renders the current angle, then
/// decrements it by the fixed step, then applies the sawtooth wrap. The
/// host scheduler calls `tick` once per display refresh and checks
/// [`is_running`](SpinDriver::is_running) before scheduling the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinDriver {
    angle_deg: f64,
    running: bool,
}

impl SpinDriver {
    pub fn new() -> Self {
        Self {
            angle_deg: 0.0,
            running: true,
        }
    }

    /// The angle the next frame will render with. Always in `[-360, 0]`.
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop scheduling further ticks. Idempotent; an in-flight frame that
    /// already rendered is unaffected.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Render one frame and advance the angle. Does nothing once stopped.
    pub fn tick(&mut self, surface: &mut dyn Surface, viewport: Viewport, pivot_index: usize) {
        if !self.running {
            return;
        }
        render_frame(surface, viewport, pivot_index, self.angle_deg);
        self.advance();
    }

    /// Post-render angle update: subtract the step, then snap back to 0
    /// once the angle passes -360. The snap is an exact reset, not modulo:
    /// the crossing point need not land on a step multiple.
    pub fn advance(&mut self) {
        self.angle_deg -= SPIN_STEP_DEGREES;
        if self.angle_deg < -FULL_TURN_DEGREES {
            self.angle_deg = 0.0;
        }
    }
}

impl Default for SpinDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_spin_types::Rgb;

    /// Surface that counts frames and remembers nothing else.
    #[derive(Default)]
    struct CountingSurface {
        frames: usize,
    }

    impl Surface for CountingSurface {
        fn fill(&mut self, _color: Rgb) {
            self.frames += 1;
        }
        fn begin_path(&mut self) {}
        fn move_to(&mut self, _x: f64, _y: f64) {}
        fn line_to(&mut self, _x: f64, _y: f64) {}
        fn close_path(&mut self) {}
        fn fill_path(&mut self, _color: Rgb) {}
    }

    #[test]
    fn angle_sequence_is_an_exact_sawtooth() {
        let mut driver = SpinDriver::new();
        let mut surface = CountingSurface::default();
        let viewport = Viewport::new(100.0, 100.0);

        // Ticks 0..=179 render -2k.
        for k in 0..180i32 {
            assert_eq!(driver.angle_deg(), f64::from(-2 * k));
            driver.tick(&mut surface, viewport, 0);
        }
        // Tick 180 renders exactly -360, then the post-decrement check
        // resets to 0 for tick 181.
        assert_eq!(driver.angle_deg(), -360.0);
        driver.tick(&mut surface, viewport, 0);
        assert_eq!(driver.angle_deg(), 0.0);
        assert_eq!(surface.frames, 181);
    }

    #[test]
    fn exactly_minus_360_does_not_wrap_early() {
        let mut driver = SpinDriver::new();
        for _ in 0..180 {
            driver.advance();
        }
        // 180 steps of 2 degrees reach -360, which is rendered, not reset.
        assert_eq!(driver.angle_deg(), -360.0);
        driver.advance();
        assert_eq!(driver.angle_deg(), 0.0);
    }

    #[test]
    fn stop_halts_ticks_and_is_idempotent() {
        let mut driver = SpinDriver::new();
        let mut surface = CountingSurface::default();
        let viewport = Viewport::new(50.0, 50.0);

        driver.tick(&mut surface, viewport, 0);
        assert_eq!(surface.frames, 1);

        driver.stop();
        driver.stop();
        assert!(!driver.is_running());

        let angle_at_stop = driver.angle_deg();
        driver.tick(&mut surface, viewport, 0);
        assert_eq!(surface.frames, 1, "stopped driver must not render");
        assert_eq!(driver.angle_deg(), angle_at_stop);
    }
}
