//! Gesture tracking: turns raw pointer samples into rasterizer calls.

use crate::grid::Cell;
use crate::raster::line_cells;

/// State machine for one continuous stroke.
///
/// Tracks the last valid cell touched so that sparsely sampled pointer
/// moves are interpolated with straight lines instead of leaving gaps.
/// Only one stroke can be active at a time.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    active: bool,
    last_cell: Option<Cell>,
}

impl GestureTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a stroke is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last valid cell touched by the current stroke.
    pub fn last_cell(&self) -> Option<Cell> {
        self.last_cell
    }

    /// Begin a stroke from a pointer-down sample.
    ///
    /// The stroke becomes active even when the position mapped to no cell;
    /// moves that later enter the grid are then tracked as part of this
    /// stroke. Returns the cells to paint (the starting cell, or nothing).
    pub fn begin_pointer(&mut self, cell: Option<Cell>) -> Vec<Cell> {
        self.active = true;
        match cell {
            Some(c) => {
                self.last_cell = Some(c);
                vec![c]
            }
            None => {
                self.last_cell = None;
                Vec::new()
            }
        }
    }

    /// Begin a stroke from a touch-start sample.
    ///
    /// Unlike [`begin_pointer`](Self::begin_pointer), a touch that starts
    /// outside the grid does not activate a stroke at all. The asymmetry
    /// matches observed host behavior and is deliberate.
    pub fn begin_touch(&mut self, cell: Option<Cell>) -> Vec<Cell> {
        match cell {
            Some(c) => {
                self.active = true;
                self.last_cell = Some(c);
                vec![c]
            }
            None => Vec::new(),
        }
    }

    /// Advance the stroke with a move sample.
    ///
    /// With a valid cell, returns the rasterized line from the last valid
    /// cell (or just the cell itself when there was none) and records the
    /// new position. A sample outside the grid is a no-op that leaves
    /// `last_cell` untouched, so a stroke that leaves the grid and returns
    /// continues seamlessly.
    pub fn advance(&mut self, cell: Option<Cell>) -> Vec<Cell> {
        if !self.active {
            return Vec::new();
        }
        let Some(cell) = cell else {
            return Vec::new();
        };
        let cells = match self.last_cell {
            Some(prev) => line_cells(prev, cell),
            None => vec![cell],
        };
        self.last_cell = Some(cell);
        cells
    }

    /// End the stroke (pointer-up or cancel).
    pub fn finish(&mut self) {
        self.active = false;
        self.last_cell = None;
    }
}
