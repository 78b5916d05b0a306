//! SketchMesh Core Library
//!
//! Platform-agnostic drawing engine for the SketchMesh pixel-grid editor:
//! occupancy grid, coordinate mapping, line rasterization, incremental
//! painting and gesture tracking.

pub mod gesture;
pub mod grid;
pub mod mapper;
pub mod raster;
pub mod session;
pub mod surface;
pub mod tool;

pub use gesture::GestureTracker;
pub use grid::{Cell, SketchGrid};
pub use mapper::map_to_cell;
pub use raster::line_cells;
pub use session::{SessionError, SketchSession, DEFAULT_CELL_SIZE};
pub use surface::{Color, ColorScheme, PaintSurface};
pub use tool::Tool;
