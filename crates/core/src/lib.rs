//! Core animation logic - pure, deterministic, and testable
//!
//! This crate contains the shape data, coordinate mapping, pivot state,
//! frame rendering, and the tick-driven animation state machine. It has
//! **zero dependencies** on terminals, timers, or I/O, making it:
//!
//! - **Deterministic**: N ticks always produce the same angle sequence
//! - **Testable**: every frame can be driven by hand, no real timer needed
//! - **Portable**: any [`Surface`] binding works (terminal raster, tests)
//!
//! # Module Structure
//!
//! - [`geometry`]: the four square vertices with modulo-wrapped indexing
//! - [`viewport`]: world window to pixel-rectangle projection
//! - [`pivot`]: which vertex the square rotates about
//! - [`transform`]: 2D affine rotation about an arbitrary pixel point
//! - [`surface`]: the drawing-surface capability trait
//! - [`render`]: paints one frame onto a surface
//! - [`driver`]: owns the rotation angle and the tick/stop state machine
//! - [`session`]: owned context bundling viewport, pivot, and driver

pub mod driver;
pub mod geometry;
pub mod pivot;
pub mod render;
pub mod session;
pub mod surface;
pub mod transform;
pub mod viewport;

pub use driver::SpinDriver;
pub use geometry::{vertex_at, vertex_count, Vertex, SQUARE_VERTICES};
pub use pivot::PivotSelector;
pub use render::render_frame;
pub use session::SpinSession;
pub use surface::Surface;
pub use transform::Transform2D;
pub use viewport::Viewport;
