//! Paint surface abstraction and the incremental painter.

use crate::grid::{Cell, SketchGrid};
use crate::tool::Tool;
use serde::{Deserialize, Serialize};

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
}

/// Background/foreground pair selected by the host's dark-mode signal.
///
/// Rendering only; the scheme never affects grid contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub background: Color,
    pub foreground: Color,
}

impl ColorScheme {
    pub const LIGHT: Self = Self {
        background: Color::WHITE,
        foreground: Color::BLACK,
    };
    pub const DARK: Self = Self {
        background: Color::rgb(24, 24, 27),
        foreground: Color::rgb(244, 244, 245),
    };
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::LIGHT
    }
}

/// Receives rectangle fills from the painter.
///
/// Implementations draw into whatever backing store the host renders from;
/// the painter only ever hands them cells that are inside the grid.
pub trait PaintSurface {
    /// Fill exactly the rectangular region `cell` occupies with `color`.
    fn fill_cell(&mut self, cell: Cell, color: Color);

    /// Fill the entire surface with `color`.
    fn fill_all(&mut self, color: Color);
}

/// Apply `cells` to the grid under the current tool and fill each accepted
/// cell on the surface.
///
/// Out-of-bounds and duplicate cells are fine: the former are skipped
/// silently, the latter are written again unconditionally. A detached
/// surface (`None`) skips the fills while the grid update still happens,
/// leaving the grid authoritative for a later full repaint.
pub fn paint_cells<S: PaintSurface>(
    grid: &mut SketchGrid,
    mut surface: Option<&mut S>,
    tool: Tool,
    scheme: ColorScheme,
    cells: &[Cell],
) {
    let value = tool.paints_occupied();
    let color = if value {
        scheme.foreground
    } else {
        scheme.background
    };
    for &cell in cells {
        if !grid.set(cell, value) {
            continue;
        }
        if let Some(s) = &mut surface {
            s.fill_cell(cell, color);
        }
    }
}

/// Full repaint: wash the surface with the background color, then paint
/// every occupied cell in the foreground color.
///
/// Used only on mount, color-scheme change, explicit clear and surface
/// re-attach, never per stroke sample.
pub fn repaint_all<S: PaintSurface>(grid: &SketchGrid, surface: &mut S, scheme: ColorScheme) {
    surface.fill_all(scheme.background);
    for cell in grid.occupied() {
        surface.fill_cell(cell, scheme.foreground);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Test surface recording the last color written per cell.
    #[derive(Default)]
    struct RecordingSurface {
        cells: HashMap<Cell, Color>,
        background: Option<Color>,
        fill_count: usize,
    }

    impl PaintSurface for RecordingSurface {
        fn fill_cell(&mut self, cell: Cell, color: Color) {
            self.cells.insert(cell, color);
            self.fill_count += 1;
        }

        fn fill_all(&mut self, color: Color) {
            self.cells.clear();
            self.background = Some(color);
        }
    }

    #[test]
    fn test_paint_sets_grid_and_surface() {
        let mut grid = SketchGrid::new(4);
        let mut surface = RecordingSurface::default();
        let scheme = ColorScheme::LIGHT;
        paint_cells(
            &mut grid,
            Some(&mut surface),
            Tool::Draw,
            scheme,
            &[Cell::new(0, 0), Cell::new(1, 1)],
        );
        assert!(grid.get(Cell::new(0, 0)));
        assert!(grid.get(Cell::new(1, 1)));
        assert_eq!(surface.cells[&Cell::new(0, 0)], scheme.foreground);
        assert_eq!(surface.cells[&Cell::new(1, 1)], scheme.foreground);
    }

    #[test]
    fn test_erase_paints_background() {
        let mut grid = SketchGrid::new(4);
        grid.set(Cell::new(2, 2), true);
        let mut surface = RecordingSurface::default();
        let scheme = ColorScheme::LIGHT;
        paint_cells(
            &mut grid,
            Some(&mut surface),
            Tool::Erase,
            scheme,
            &[Cell::new(2, 2)],
        );
        assert!(!grid.get(Cell::new(2, 2)));
        assert_eq!(surface.cells[&Cell::new(2, 2)], scheme.background);
    }

    #[test]
    fn test_out_of_bounds_cells_skipped() {
        let mut grid = SketchGrid::new(4);
        let mut surface = RecordingSurface::default();
        paint_cells(
            &mut grid,
            Some(&mut surface),
            Tool::Draw,
            ColorScheme::LIGHT,
            &[Cell::new(-1, 0), Cell::new(0, 4), Cell::new(9, 9)],
        );
        assert!(grid.is_empty());
        assert!(surface.cells.is_empty());
    }

    #[test]
    fn test_duplicate_cells_written_unconditionally() {
        let mut grid = SketchGrid::new(4);
        let mut surface = RecordingSurface::default();
        paint_cells(
            &mut grid,
            Some(&mut surface),
            Tool::Draw,
            ColorScheme::LIGHT,
            &[Cell::new(1, 1), Cell::new(1, 1)],
        );
        assert_eq!(surface.fill_count, 2);
    }

    #[test]
    fn test_detached_surface_still_updates_grid() {
        let mut grid = SketchGrid::new(4);
        paint_cells::<RecordingSurface>(
            &mut grid,
            None,
            Tool::Draw,
            ColorScheme::LIGHT,
            &[Cell::new(3, 0)],
        );
        assert!(grid.get(Cell::new(3, 0)));
    }

    #[test]
    fn test_full_repaint_projects_grid() {
        let mut grid = SketchGrid::new(4);
        grid.set(Cell::new(0, 3), true);
        grid.set(Cell::new(2, 1), true);
        let mut surface = RecordingSurface::default();
        let scheme = ColorScheme::DARK;
        repaint_all(&grid, &mut surface, scheme);
        assert_eq!(surface.background, Some(scheme.background));
        assert_eq!(surface.cells.len(), 2);
        assert_eq!(surface.cells[&Cell::new(0, 3)], scheme.foreground);
        assert_eq!(surface.cells[&Cell::new(2, 1)], scheme.foreground);
    }

    #[test]
    fn test_incremental_matches_full_repaint() {
        // Same visual state whether painted incrementally or re-derived
        // from the grid.
        let mut grid = SketchGrid::new(4);
        let mut incremental = RecordingSurface::default();
        incremental.fill_all(ColorScheme::LIGHT.background);
        let strokes = [
            (Tool::Draw, Cell::new(0, 0)),
            (Tool::Draw, Cell::new(1, 1)),
            (Tool::Erase, Cell::new(0, 0)),
            (Tool::Draw, Cell::new(3, 2)),
        ];
        for (tool, cell) in strokes {
            paint_cells(
                &mut grid,
                Some(&mut incremental),
                tool,
                ColorScheme::LIGHT,
                &[cell],
            );
        }

        let mut full = RecordingSurface::default();
        repaint_all(&grid, &mut full, ColorScheme::LIGHT);

        // Every occupied cell shows foreground on both surfaces; the erased
        // cell shows background incrementally and is simply absent (i.e.
        // background) after the full wash.
        for cell in grid.occupied() {
            assert_eq!(incremental.cells[&cell], ColorScheme::LIGHT.foreground);
            assert_eq!(full.cells[&cell], ColorScheme::LIGHT.foreground);
        }
        assert_eq!(
            incremental.cells[&Cell::new(0, 0)],
            ColorScheme::LIGHT.background
        );
        assert!(!full.cells.contains_key(&Cell::new(0, 0)));
    }
}
