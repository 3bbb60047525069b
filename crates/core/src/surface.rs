//! The drawing-surface boundary.

use tui_spin_types::Rgb;

/// Immediate-mode 2D drawing capabilities the renderer needs.
///
/// Any binding works: an in-memory raster, a software rasterizer, a test
/// double recording calls. The renderer never assumes more than this.
pub trait Surface {
    /// Paint the entire surface one opaque color.
    fn fill(&mut self, color: Rgb);

    /// Start a fresh path, discarding any previous one.
    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Close the current path back to its first point.
    fn close_path(&mut self);

    /// Fill the closed path with an opaque color.
    fn fill_path(&mut self, color: Rgb);
}
