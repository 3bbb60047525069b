//! Pixel canvas with path recording and scanline polygon fill.

use arrayvec::ArrayVec;

use tui_spin_core::Surface;
use tui_spin_types::Rgb;

/// The renderer emits one closed square outline per frame; leave headroom.
const MAX_PATH_POINTS: usize = 16;

/// A width x height grid of RGB pixels.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
    path: ArrayVec<(f64, f64), MAX_PATH_POINTS>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); width * height],
            path: ArrayVec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Fill every pixel whose center lies inside the recorded path
    /// (even-odd rule), one scanline at a time.
    fn fill_polygon(&mut self, color: Rgb) {
        let n = self.path.len();
        if n < 3 || self.width == 0 || self.height == 0 {
            return;
        }

        let min_y = self
            .path
            .iter()
            .map(|p| p.1)
            .fold(f64::INFINITY, f64::min)
            .floor()
            .max(0.0);
        let max_y = self
            .path
            .iter()
            .map(|p| p.1)
            .fold(f64::NEG_INFINITY, f64::max)
            .ceil()
            .min(self.height as f64 - 1.0);
        if min_y > max_y {
            return;
        }

        for row in (min_y as usize)..=(max_y as usize) {
            let sample_y = row as f64 + 0.5;

            // Crossings of the closed outline with this scanline. The path
            // is treated cyclically, so the closing edge is always there.
            let mut crossings = ArrayVec::<f64, MAX_PATH_POINTS>::new();
            for i in 0..n {
                let (x0, y0) = self.path[i];
                let (x1, y1) = self.path[(i + 1) % n];
                let spans = (y0 <= sample_y && y1 > sample_y) || (y1 <= sample_y && y0 > sample_y);
                if spans {
                    let t = (sample_y - y0) / (y1 - y0);
                    let _ = crossings.try_push(x0 + t * (x1 - x0));
                }
            }
            crossings.sort_unstable_by(|a, b| a.total_cmp(b));

            for pair in crossings.chunks_exact(2) {
                let start = (pair[0] - 0.5).ceil().max(0.0) as usize;
                let end = (pair[1] - 0.5).floor().min(self.width as f64 - 1.0);
                if end < 0.0 {
                    continue;
                }
                for x in start..=(end as usize) {
                    self.pixels[row * self.width + x] = color;
                }
            }
        }
    }
}

impl Surface for Canvas {
    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let _ = self.path.try_push((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let _ = self.path.try_push((x, y));
    }

    fn close_path(&mut self) {
        // The fill already treats the outline cyclically, so the closing
        // edge back to the first point is always present.
    }

    fn fill_path(&mut self, color: Rgb) {
        self.fill_polygon(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Rgb = Rgb::new(10, 200, 100);
    const PAPER: Rgb = Rgb::new(255, 255, 255);

    fn square_path(canvas: &mut Canvas, x0: f64, y0: f64, x1: f64, y1: f64) {
        canvas.begin_path();
        canvas.move_to(x0, y0);
        canvas.line_to(x1, y0);
        canvas.line_to(x1, y1);
        canvas.line_to(x0, y1);
        canvas.close_path();
    }

    #[test]
    fn fill_paints_every_pixel() {
        let mut canvas = Canvas::new(4, 3);
        canvas.fill(INK);
        assert!(canvas.pixels().iter().all(|&p| p == INK));
    }

    #[test]
    fn axis_aligned_square_fills_inside_and_leaves_outside() {
        let mut canvas = Canvas::new(20, 20);
        canvas.fill(PAPER);
        square_path(&mut canvas, 5.0, 5.0, 15.0, 15.0);
        canvas.fill_path(INK);

        assert_eq!(canvas.get(10, 10), Some(INK));
        assert_eq!(canvas.get(5, 5), Some(INK));
        assert_eq!(canvas.get(2, 10), Some(PAPER));
        assert_eq!(canvas.get(10, 17), Some(PAPER));
        assert_eq!(canvas.get(17, 3), Some(PAPER));
    }

    #[test]
    fn triangle_fill_respects_the_diagonal() {
        let mut canvas = Canvas::new(20, 20);
        canvas.fill(PAPER);
        canvas.begin_path();
        canvas.move_to(0.0, 0.0);
        canvas.line_to(19.0, 0.0);
        canvas.line_to(0.0, 19.0);
        canvas.close_path();
        canvas.fill_path(INK);

        assert_eq!(canvas.get(3, 3), Some(INK));
        assert_eq!(canvas.get(16, 16), Some(PAPER));
    }

    #[test]
    fn degenerate_paths_paint_nothing() {
        let mut canvas = Canvas::new(8, 8);
        canvas.fill(PAPER);

        canvas.begin_path();
        canvas.move_to(2.0, 2.0);
        canvas.line_to(6.0, 6.0);
        canvas.close_path();
        canvas.fill_path(INK);
        assert!(canvas.pixels().iter().all(|&p| p == PAPER));
    }

    #[test]
    fn polygon_fully_off_canvas_paints_nothing() {
        let mut canvas = Canvas::new(8, 8);
        canvas.fill(PAPER);
        square_path(&mut canvas, 20.0, 20.0, 30.0, 30.0);
        canvas.fill_path(INK);
        assert!(canvas.pixels().iter().all(|&p| p == PAPER));
    }

    #[test]
    fn polygon_partly_off_canvas_is_clipped() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill(PAPER);
        square_path(&mut canvas, -5.0, -5.0, 5.0, 5.0);
        canvas.fill_path(INK);

        assert_eq!(canvas.get(0, 0), Some(INK));
        assert_eq!(canvas.get(3, 3), Some(INK));
        assert_eq!(canvas.get(7, 7), Some(PAPER));
    }

    #[test]
    fn zero_sized_canvas_accepts_all_calls() {
        let mut canvas = Canvas::new(0, 0);
        canvas.fill(INK);
        square_path(&mut canvas, 0.0, 0.0, 4.0, 4.0);
        canvas.fill_path(INK);
        assert!(canvas.pixels().is_empty());
    }

    #[test]
    fn begin_path_discards_the_previous_outline() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill(PAPER);
        square_path(&mut canvas, 0.0, 0.0, 9.0, 9.0);
        square_path(&mut canvas, 4.0, 4.0, 6.0, 6.0);
        canvas.fill_path(INK);

        assert_eq!(canvas.get(1, 1), Some(PAPER));
        assert_eq!(canvas.get(5, 5), Some(INK));
    }
}
