//! Terminal presentation layer.
//!
//! The core draws into an RGB canvas; this crate gets those pixels onto a
//! real terminal. Two canvas rows collapse into one `▀` half-block cell
//! (foreground = top pixel, background = bottom pixel), which keeps the
//! square roughly isotropic despite tall terminal glyphs.
//!
//! Goals:
//! - Keep `core` and `raster` free of terminal concerns
//! - Flush frames with per-cell diffing so a mostly-static background is
//!   cheap to present

pub mod fb;
pub mod pixel_view;
pub mod renderer;

pub use fb::{Cell, FrameBuffer};
pub use pixel_view::PixelView;
pub use renderer::TerminalRenderer;
