//! Draw a couple of strokes headlessly and print the exported PNG size.
//!
//! Run with `cargo run --example export_png`.

use kurbo::Point;
use sketchmesh_core::{SketchSession, Tool, DEFAULT_CELL_SIZE};
use sketchmesh_render::PixelCanvas;

fn main() {
    env_logger::init();
    log::info!("Starting headless sketch export");

    let dimension = 128;
    let canvas = PixelCanvas::new(dimension, 4).expect("canvas size");
    let mut session = SketchSession::new(dimension, canvas).expect("session");

    // Diagonal stroke corner to corner.
    session.pointer_down(Point::new(0.5, 0.5));
    let far = dimension as f64 * DEFAULT_CELL_SIZE - 0.5;
    session.pointer_move(Point::new(far, far));
    session.pointer_up();

    // Erase a notch in the middle.
    session.set_tool(Tool::Erase);
    let mid = far / 2.0;
    session.pointer_down(Point::new(mid, mid));
    session.pointer_up();

    let png = session
        .surface()
        .expect("surface attached")
        .encode_png()
        .expect("png encoding");
    println!(
        "sketch: {} occupied cells, {} byte PNG",
        session.grid().occupied_count(),
        png.len()
    );
}
