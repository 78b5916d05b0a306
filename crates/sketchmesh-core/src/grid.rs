//! Boolean occupancy grid backing the sketch.

use serde::{Deserialize, Serialize};

/// A single grid coordinate as a (row, col) pair.
///
/// Signed so that rasterized lines and mapped pointer positions near the
/// grid edge can momentarily refer to cells outside the grid; the painter
/// drops those silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Create a cell from row and column indices.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Dense square grid of boolean cell states.
///
/// Every cell is always defined; the grid is the single source of truth for
/// the sketch and the rendering surface is a projection of it.
#[derive(Debug, Clone, Serialize)]
pub struct SketchGrid {
    dimension: usize,
    cells: Vec<bool>,
}

// Hand-written so a payload whose cell count does not match the dimension
// is rejected instead of producing a grid with undefined cells.
impl<'de> Deserialize<'de> for SketchGrid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            dimension: usize,
            cells: Vec<bool>,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.cells.len() != raw.dimension * raw.dimension {
            return Err(serde::de::Error::invalid_length(
                raw.cells.len(),
                &"dimension * dimension cells",
            ));
        }
        Ok(Self {
            dimension: raw.dimension,
            cells: raw.cells,
        })
    }
}

impl SketchGrid {
    /// Create an empty grid of `dimension` x `dimension` cells.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![false; dimension * dimension],
        }
    }

    /// Side length of the grid in cells.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Check whether both of the cell's indices fall inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        let dim = self.dimension as i32;
        (0..dim).contains(&cell.row) && (0..dim).contains(&cell.col)
    }

    /// Read a cell's state. Out-of-bounds reads return `false`.
    pub fn get(&self, cell: Cell) -> bool {
        if !self.contains(cell) {
            return false;
        }
        self.cells[cell.row as usize * self.dimension + cell.col as usize]
    }

    /// Write a cell's state. Out-of-bounds writes are skipped.
    /// Returns whether the write was accepted.
    pub fn set(&mut self, cell: Cell, value: bool) -> bool {
        if !self.contains(cell) {
            return false;
        }
        self.cells[cell.row as usize * self.dimension + cell.col as usize] = value;
        true
    }

    /// Reset every cell to unoccupied.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Check if no cell is occupied.
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate over all occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = Cell> + '_ {
        let dim = self.dimension;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &occupied)| occupied)
            .map(move |(i, _)| Cell::new((i / dim) as i32, (i % dim) as i32))
    }

    /// Serialize the grid to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a grid from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
