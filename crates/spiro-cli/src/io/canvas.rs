// crates/spiro-cli/src/io/canvas.rs

use spiro_core::Point;

/// Pixel frame for export. Curve space has its origin at the center, y up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn to_pixel(&self, p: Point) -> (f64, f64) {
        (
            p.x + self.width as f64 / 2.0,
            self.height as f64 / 2.0 - p.y,
        )
    }
}
