//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Animation timing (milliseconds per display tick, ~60 Hz).
pub const TICK_MS: u32 = 16;

/// Degrees subtracted from the rotation angle on every tick.
pub const SPIN_STEP_DEGREES: f64 = 2.0;

/// One full revolution in degrees. The angle saws between 0 and -360:
/// once it drops below -360 it snaps back to 0. Never modulo arithmetic;
/// the reset point is not guaranteed to land on a step multiple.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Side length of the symmetric world window mapped onto the surface.
/// World coordinates live in `[-WORLD_WINDOW/2, WORLD_WINDOW/2]` on both axes.
pub const WORLD_WINDOW: f64 = 5.0;

/// Number of vertices in the square (two triangles sharing a diagonal).
pub const SQUARE_VERTEX_COUNT: usize = 4;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Frame background, painted over the full surface every frame.
pub const BACKGROUND: Rgb = Rgb::new(255, 255, 255);

/// Fill color of the square.
pub const SQUARE_FILL: Rgb = Rgb::new(0, 128, 128);

/// Discrete actions the input boundary can feed into a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinAction {
    /// Select the rotation pivot vertex by index (0..=3).
    SelectPivot(usize),
}

impl SpinAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpinAction::SelectPivot(0) => "selectPivot0",
            SpinAction::SelectPivot(1) => "selectPivot1",
            SpinAction::SelectPivot(2) => "selectPivot2",
            SpinAction::SelectPivot(3) => "selectPivot3",
            SpinAction::SelectPivot(_) => "selectPivot?",
        }
    }
}
