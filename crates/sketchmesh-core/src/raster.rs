//! Discrete line rasterization.

use crate::grid::Cell;

/// Every grid cell on the straight line from `from` to `to`, inclusive of
/// both endpoints and ordered start to end (Bresenham).
///
/// Pure and deterministic; identical input yields identical output. When
/// `from == to` the result is the single point. Consecutive output cells
/// differ by at most one in each of row and col.
pub fn line_cells(from: Cell, to: Cell) -> Vec<Cell> {
    let dx = (to.col - from.col).abs();
    let dy = (to.row - from.row).abs();
    let sx = if from.col < to.col { 1 } else { -1 };
    let sy = if from.row < to.row { 1 } else { -1 };

    let mut err = dx - dy;
    let mut col = from.col;
    let mut row = from.row;

    let mut cells = Vec::with_capacity((dx.max(dy) + 1) as usize);
    loop {
        cells.push(Cell::new(row, col));
        if col == to.col && row == to.row {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            col += sx;
        }
        if e2 < dx {
            err += dx;
            row += sy;
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point() {
        let cells = line_cells(Cell::new(2, 3), Cell::new(2, 3));
        assert_eq!(cells, vec![Cell::new(2, 3)]);
    }

    #[test]
    fn test_horizontal_line() {
        let cells = line_cells(Cell::new(1, 0), Cell::new(1, 3));
        assert_eq!(
            cells,
            vec![
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(1, 2),
                Cell::new(1, 3),
            ]
        );
    }

    #[test]
    fn test_vertical_line() {
        let cells = line_cells(Cell::new(3, 1), Cell::new(0, 1));
        assert_eq!(
            cells,
            vec![
                Cell::new(3, 1),
                Cell::new(2, 1),
                Cell::new(1, 1),
                Cell::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_diagonal_line() {
        let cells = line_cells(Cell::new(0, 0), Cell::new(3, 3));
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 1),
                Cell::new(2, 2),
                Cell::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_endpoints_and_adjacency() {
        let pairs = [
            (Cell::new(0, 0), Cell::new(5, 13)),
            (Cell::new(-4, 7), Cell::new(9, -2)),
            (Cell::new(3, 3), Cell::new(3, 3)),
            (Cell::new(10, 0), Cell::new(0, 1)),
        ];
        for (a, b) in pairs {
            let cells = line_cells(a, b);
            assert_eq!(*cells.first().unwrap(), a);
            assert_eq!(*cells.last().unwrap(), b);
            for pair in cells.windows(2) {
                let dr = (pair[1].row - pair[0].row).abs();
                let dc = (pair[1].col - pair[0].col).abs();
                assert!(dr <= 1 && dc <= 1, "skipped cell between {:?} and {:?}", pair[0], pair[1]);
                assert!(dr + dc > 0, "duplicate cell {:?}", pair[0]);
            }
        }
    }

    #[test]
    fn test_reverse_symmetry() {
        let a = Cell::new(1, 2);
        let b = Cell::new(7, 11);
        let forward = line_cells(a, b);
        let mut backward = line_cells(b, a);
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_deterministic() {
        let a = Cell::new(0, 0);
        let b = Cell::new(4, 9);
        assert_eq!(line_cells(a, b), line_cells(a, b));
    }
}
