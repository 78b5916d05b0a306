//! Owned editing session tying grid, tool and gesture state together.

use crate::gesture::GestureTracker;
use crate::grid::{Cell, SketchGrid};
use crate::mapper::map_to_cell;
use crate::surface::{self, ColorScheme, PaintSurface};
use crate::tool::Tool;
use kurbo::{Point, Rect};
use thiserror::Error;

/// Logical edge length of one cell, in the same units as pointer
/// coordinates when the surface is displayed unscaled.
pub const DEFAULT_CELL_SIZE: f64 = 4.0;

/// Session construction errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("grid dimension must be non-zero")]
    ZeroDimension,
}

/// A single editing session: the grid, the active tool, the color scheme,
/// the in-flight gesture and the bound rendering surface.
///
/// All mutation is synchronous on the caller's thread; the surface is
/// always consistent with the grid when a method returns. The tool is read
/// at paint time, so switching tools mid-stroke takes effect on the very
/// next move event.
#[derive(Debug)]
pub struct SketchSession<S: PaintSurface> {
    grid: SketchGrid,
    tool: Tool,
    scheme: ColorScheme,
    tracker: GestureTracker,
    viewport: Rect,
    cell_size: f64,
    surface: Option<S>,
}

impl<S: PaintSurface> SketchSession<S> {
    /// Allocate an empty `dimension` x `dimension` grid, bind `surface` and
    /// paint the initial (all-background) frame.
    pub fn new(dimension: usize, surface: S) -> Result<Self, SessionError> {
        if dimension == 0 {
            return Err(SessionError::ZeroDimension);
        }
        let logical = dimension as f64 * DEFAULT_CELL_SIZE;
        let mut session = Self {
            grid: SketchGrid::new(dimension),
            tool: Tool::default(),
            scheme: ColorScheme::default(),
            tracker: GestureTracker::new(),
            viewport: Rect::new(0.0, 0.0, logical, logical),
            cell_size: DEFAULT_CELL_SIZE,
            surface: Some(surface),
        };
        session.repaint();
        Ok(session)
    }

    /// The occupancy grid. Always the authoritative sketch state.
    pub fn grid(&self) -> &SketchGrid {
        &self.grid
    }

    /// Currently active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Select the active tool, effective on the next paint.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Current color scheme.
    pub fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Swap colors and fully repaint. Grid contents are untouched.
    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
        self.repaint();
    }

    /// Update the surface's displayed bounding rectangle in pointer space.
    pub fn set_viewport(&mut self, rect: Rect) {
        self.viewport = rect;
    }

    /// Reset the grid to all-empty and fully repaint.
    pub fn clear(&mut self) {
        log::debug!("clearing {0}x{0} sketch grid", self.grid.dimension());
        self.grid.clear();
        self.repaint();
    }

    /// Pointer-down entry point. Activates a stroke unconditionally; the
    /// starting cell is painted only when the position maps into the grid.
    pub fn pointer_down(&mut self, point: Point) {
        let cell = self.map(point);
        let cells = self.tracker.begin_pointer(cell);
        self.paint(&cells);
    }

    /// Touch-start entry point. Unlike [`pointer_down`](Self::pointer_down),
    /// a touch outside the grid does not begin a stroke.
    pub fn touch_start(&mut self, point: Point) {
        let cell = self.map(point);
        let cells = self.tracker.begin_touch(cell);
        self.paint(&cells);
    }

    /// Pointer/touch-move entry point.
    pub fn pointer_move(&mut self, point: Point) {
        let cell = self.map(point);
        let cells = self.tracker.advance(cell);
        self.paint(&cells);
    }

    /// Pointer-up entry point; ends the stroke.
    pub fn pointer_up(&mut self) {
        self.tracker.finish();
    }

    /// Pointer-cancel entry point; ends the stroke like pointer-up.
    pub fn pointer_cancel(&mut self) {
        self.tracker.finish();
    }

    /// Whether a stroke is currently active.
    pub fn is_stroke_active(&self) -> bool {
        self.tracker.is_active()
    }

    /// Borrow the bound surface, if any.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Unbind the rendering surface, e.g. when the host view is torn down
    /// mid-gesture. Subsequent paints keep mutating the grid but skip
    /// surface writes.
    pub fn detach_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// Bind a surface and reconstruct its contents from the grid.
    pub fn attach_surface(&mut self, surface: S) {
        self.surface = Some(surface);
        self.repaint();
    }

    fn map(&self, point: Point) -> Option<Cell> {
        map_to_cell(point, self.viewport, self.grid.dimension(), self.cell_size)
    }

    fn paint(&mut self, cells: &[Cell]) {
        surface::paint_cells(
            &mut self.grid,
            self.surface.as_mut(),
            self.tool,
            self.scheme,
            cells,
        );
    }

    fn repaint(&mut self) {
        if let Some(s) = self.surface.as_mut() {
            surface::repaint_all(&self.grid, s, self.scheme);
        }
    }
}
