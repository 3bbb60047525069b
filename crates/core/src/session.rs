//! Owned session context: viewport, pivot, and driver in one place.
//!
//! Bundling the mutable state into one struct (instead of process-wide
//! globals) keeps the key handler and the render tick on a single owner,
//! so their interleaving is the host loop's run-to-completion order.

use tui_spin_types::SpinAction;

use crate::driver::SpinDriver;
use crate::pivot::PivotSelector;
use crate::surface::Surface;
use crate::viewport::Viewport;

#[derive(Debug, Clone, PartialEq)]
pub struct SpinSession {
    viewport: Viewport,
    pivot: PivotSelector,
    driver: SpinDriver,
}

impl SpinSession {
    /// Viewport dimensions are captured here once and never change.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            pivot: PivotSelector::new(),
            driver: SpinDriver::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pivot_index(&self) -> usize {
        self.pivot.current()
    }

    pub fn angle_deg(&self) -> f64 {
        self.driver.angle_deg()
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    /// Feed one input action. Effective from the next tick onward.
    pub fn apply(&mut self, action: SpinAction) {
        self.pivot.apply(action);
    }

    /// Render one frame with the current pivot and advance the angle.
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        let pivot_index = self.pivot.current();
        self.driver.tick(surface, self.viewport, pivot_index);
    }
}
