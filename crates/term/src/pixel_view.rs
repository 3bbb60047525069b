//! PixelView: maps a raster canvas into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_spin_raster::Canvas;
use tui_spin_types::Rgb;

use crate::fb::{Cell, FrameBuffer};

/// Upper-half-block glyph: foreground paints the top pixel of the cell,
/// background paints the bottom one.
const HALF_BLOCK: char = '▀';

/// Renders canvas pixels as half-block cells with a one-line status footer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelView;

impl PixelView {
    /// Fill `fb` from `canvas`: cell `(x, y)` shows canvas rows `2y` and
    /// `2y + 1` of column `x`. The last framebuffer row carries `status`.
    ///
    /// The framebuffer is sized to the canvas plus the footer; callers
    /// reuse one framebuffer across frames.
    pub fn render_into(&self, canvas: &Canvas, status: &str, fb: &mut FrameBuffer) {
        let cols = canvas.width() as u16;
        // Round up so an odd final canvas row still gets a cell (its
        // missing partner repeats the top pixel).
        let pixel_rows = (canvas.height() as u16 + 1) / 2;
        fb.resize(cols, pixel_rows + 1);

        for y in 0..pixel_rows {
            for x in 0..cols {
                let top = canvas.get(x as usize, (y as usize) * 2).unwrap_or_default();
                let bottom = canvas
                    .get(x as usize, (y as usize) * 2 + 1)
                    .unwrap_or(top);
                fb.set(
                    x,
                    y,
                    Cell {
                        ch: HALF_BLOCK,
                        fg: top,
                        bg: bottom,
                    },
                );
            }
        }

        let footer = Cell {
            ch: ' ',
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
        };
        for x in 0..cols {
            fb.set(x, pixel_rows, footer);
        }
        fb.put_str(0, pixel_rows, status, footer.fg, footer.bg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_spin_core::Surface;

    #[test]
    fn two_canvas_rows_share_one_cell() {
        let mut canvas = Canvas::new(2, 4);
        canvas.fill(Rgb::new(9, 9, 9));
        let view = PixelView;
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(&canvas, "", &mut fb);

        assert_eq!((fb.width(), fb.height()), (2, 3)); // 2 pixel rows + footer
        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.ch, HALF_BLOCK);
        assert_eq!(cell.fg, Rgb::new(9, 9, 9));
        assert_eq!(cell.bg, Rgb::new(9, 9, 9));
    }

    #[test]
    fn top_and_bottom_pixels_land_in_fg_and_bg() {
        // Paint canvas row 0 red; row 1 keeps the default color.
        let mut canvas = Canvas::new(1, 2);
        canvas.begin_path();
        canvas.move_to(-1.0, -1.0);
        canvas.line_to(2.0, -1.0);
        canvas.line_to(2.0, 1.0);
        canvas.line_to(-1.0, 1.0);
        canvas.close_path();
        canvas.fill_path(Rgb::new(255, 0, 0)); // covers row 0 only
        let view = PixelView;
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(&canvas, "", &mut fb);

        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.fg, Rgb::new(255, 0, 0));
        assert_eq!(cell.bg, Rgb::default());
    }

    #[test]
    fn status_text_lands_on_the_footer_row() {
        let canvas = Canvas::new(10, 4);
        let view = PixelView;
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(&canvas, "pivot 2", &mut fb);

        let footer_y = fb.height() - 1;
        assert_eq!(fb.get(0, footer_y).unwrap().ch, 'p');
        assert_eq!(fb.get(6, footer_y).unwrap().ch, '2');
    }

    #[test]
    fn odd_canvas_height_still_renders_the_last_row() {
        let mut canvas = Canvas::new(2, 3);
        canvas.fill(Rgb::new(1, 2, 3));
        let view = PixelView;
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(&canvas, "", &mut fb);

        assert_eq!((fb.width(), fb.height()), (2, 3));
        let last = fb.get(0, 1).unwrap();
        assert_eq!(last.fg, Rgb::new(1, 2, 3));
        // Missing bottom partner repeats the top pixel.
        assert_eq!(last.bg, Rgb::new(1, 2, 3));
    }
}
