//! Pointer-space to grid-cell coordinate mapping.

use crate::grid::Cell;
use kurbo::{Point, Rect};

/// Map a pointer position to the grid cell underneath it.
///
/// `viewport` is the drawing surface's bounding rectangle in the same
/// coordinate space as `point`; the logical surface size is
/// `dimension * cell_size` per axis, so a surface displayed smaller or
/// larger than its logical size is scaled accordingly.
///
/// Returns `None` when the position falls outside the grid or when the
/// viewport is degenerate (zero or negative extent). Neither is an error;
/// callers ignore the position silently.
pub fn map_to_cell(point: Point, viewport: Rect, dimension: usize, cell_size: f64) -> Option<Cell> {
    if viewport.width() <= 0.0 || viewport.height() <= 0.0 {
        return None;
    }

    let logical = dimension as f64 * cell_size;
    let scale_x = logical / viewport.width();
    let scale_y = logical / viewport.height();

    let local_x = (point.x - viewport.x0) * scale_x;
    let local_y = (point.y - viewport.y0) * scale_y;

    let col = (local_x / cell_size).floor();
    let row = (local_y / cell_size).floor();

    let dim = dimension as f64;
    if col >= 0.0 && col < dim && row >= 0.0 && row < dim {
        Some(Cell::new(row as i32, col as i32))
    } else {
        None
    }
}
