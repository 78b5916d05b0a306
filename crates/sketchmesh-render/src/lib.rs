//! SketchMesh Render Library
//!
//! CPU pixel-buffer implementation of the core paint surface plus PNG
//! export, used to hand the sketch off to the mesh-conversion service.

mod canvas;

pub use canvas::{PixelCanvas, RenderError};
