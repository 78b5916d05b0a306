//! RGBA framebuffer surface and PNG encoding.

use sketchmesh_core::{Cell, Color, PaintSurface};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("canvas dimensions must be non-zero")]
    ZeroSize,
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// A square RGBA8 framebuffer where every grid cell occupies a
/// `cell_px` x `cell_px` block of pixels.
///
/// Implements [`PaintSurface`] so the core painter can fill individual
/// cell rectangles incrementally; [`encode_png`](Self::encode_png) turns
/// the buffer into an encodable image for export.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    dimension: usize,
    cell_px: usize,
    pixels: Vec<u8>,
}

impl PixelCanvas {
    /// Create a canvas for a `dimension` x `dimension` grid with
    /// `cell_px` pixels per cell edge, washed to opaque white.
    pub fn new(dimension: usize, cell_px: usize) -> Result<Self, RenderError> {
        if dimension == 0 || cell_px == 0 {
            return Err(RenderError::ZeroSize);
        }
        let side = dimension * cell_px;
        Ok(Self {
            dimension,
            cell_px,
            pixels: vec![255; side * side * 4],
        })
    }

    /// Edge length of the canvas in pixels.
    pub fn side_px(&self) -> usize {
        self.dimension * self.cell_px
    }

    /// Pixels per cell edge.
    pub fn cell_px(&self) -> usize {
        self.cell_px
    }

    /// Raw RGBA8 pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Read a single pixel. Out-of-range coordinates return `None`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        let side = self.side_px();
        if x >= side || y >= side {
            return None;
        }
        let i = (y * side + x) * 4;
        Some(Color {
            r: self.pixels[i],
            g: self.pixels[i + 1],
            b: self.pixels[i + 2],
            a: self.pixels[i + 3],
        })
    }

    /// Encode the buffer as an RGBA8 PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let side = self.side_px() as u32;
        let mut png_data = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut png_data, side, side);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
        }
        log::debug!("encoded {side}x{side} sketch PNG ({} bytes)", png_data.len());
        Ok(png_data)
    }

    fn fill_rect(&mut self, x0: usize, y0: usize, w: usize, h: usize, color: Color) {
        let side = self.side_px();
        let rgba = [color.r, color.g, color.b, color.a];
        for y in y0..(y0 + h).min(side) {
            let row_start = (y * side + x0) * 4;
            let row_end = (y * side + (x0 + w).min(side)) * 4;
            for px in self.pixels[row_start..row_end].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }
}

impl PaintSurface for PixelCanvas {
    fn fill_cell(&mut self, cell: Cell, color: Color) {
        // The painter only passes in-bounds cells; anything else is dropped.
        if cell.row < 0 || cell.col < 0 {
            return;
        }
        let (row, col) = (cell.row as usize, cell.col as usize);
        if row >= self.dimension || col >= self.dimension {
            return;
        }
        self.fill_rect(
            col * self.cell_px,
            row * self.cell_px,
            self.cell_px,
            self.cell_px,
            color,
        );
    }

    fn fill_all(&mut self, color: Color) {
        let rgba = [color.r, color.g, color.b, color.a];
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }
}
