//! Square geometry: an immutable vertex table with wrapped indexing.

use tui_spin_types::SQUARE_VERTEX_COUNT;

/// A shape-space point, both coordinates in `[-0.5, 0.5]`.
pub type Vertex = (f64, f64);

/// The square's vertices, counter-clockwise from the bottom-left corner.
/// The order forms two triangles `(0,1,2)` and `(0,2,3)` sharing the 0-2
/// diagonal, and closes into a single drawable outline.
pub const SQUARE_VERTICES: [Vertex; SQUARE_VERTEX_COUNT] = [
    (-0.5, -0.5),
    (0.5, -0.5),
    (0.5, 0.5),
    (-0.5, 0.5),
];

pub fn vertex_count() -> usize {
    SQUARE_VERTICES.len()
}

/// Vertex lookup with true mathematical modulo: any integer index is
/// legal, including negatives, and wraps to `i mod 4`.
pub fn vertex_at(i: i64) -> Vertex {
    let wrapped = i.rem_euclid(SQUARE_VERTICES.len() as i64) as usize;
    SQUARE_VERTICES[wrapped]
}
