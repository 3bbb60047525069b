//! Frame rendering: project, rotate about the pivot, paint.
//!
//! This module is pure over its inputs and keeps no per-call state:
//! rendering the same angle twice produces identical output.

use tui_spin_types::{BACKGROUND, SQUARE_FILL, SQUARE_VERTEX_COUNT};

use crate::geometry::SQUARE_VERTICES;
use crate::surface::Surface;
use crate::transform::Transform2D;
use crate::viewport::Viewport;

/// Paint one frame of the square rotated `angle_deg` about the vertex at
/// `pivot_index`.
///
/// Steps, in order: clear to the background, project every vertex, build
/// the rotation about the projected pivot point, transform all points
/// (the pivot maps to itself), then trace and fill the closed outline in
/// original vertex order.
pub fn render_frame(
    surface: &mut dyn Surface,
    viewport: Viewport,
    pivot_index: usize,
    angle_deg: f64,
) {
    surface.fill(BACKGROUND);

    let mut projected = [(0.0f64, 0.0f64); SQUARE_VERTEX_COUNT];
    for (slot, &(x, y)) in projected.iter_mut().zip(SQUARE_VERTICES.iter()) {
        *slot = viewport.project(x, y);
    }

    let (pivot_x, pivot_y) = projected[pivot_index];
    let rotation = Transform2D::rotation_about(pivot_x, pivot_y, angle_deg);

    surface.begin_path();
    for (i, &point) in projected.iter().enumerate() {
        let (x, y) = rotation.apply(point);
        if i == 0 {
            surface.move_to(x, y);
        } else {
            surface.line_to(x, y);
        }
    }
    surface.close_path();
    surface.fill_path(SQUARE_FILL);
}
