pub mod error;
pub mod inspect;
pub mod logging;
pub mod sheet;

pub use error::FrameError;
pub use sheet::Frame;

use svg::Document;

/// Edge length of every sprite frame, in pixels.
pub const CANVAS: i32 = 64;
pub const CENTER: f64 = 32.0;

/// Empty 64x64 root element that every frame is built on.
pub fn canvas() -> Document {
    Document::new()
        .set("width", CANVAS)
        .set("height", CANVAS)
        .set("version", "1.1")
        .set("xmlns", "http://www.w3.org/2000/svg")
}
