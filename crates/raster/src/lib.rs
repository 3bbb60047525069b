//! In-memory RGB raster implementing the core drawing surface.
//!
//! This is the software-rasterizer binding of the surface boundary: the
//! core renders into a [`Canvas`], and presentation layers read its
//! pixels back out. Pure and deterministic, so pixel output can be
//! asserted in tests.

pub mod canvas;

pub use canvas::Canvas;
