// crates/spiro-core/src/render/sink.rs

use crate::curve::spec::{Point, Rgb};

/// Stable per-curve handle. Ensemble members keep theirs across restarts.
pub type CurveId = usize;

/// Pen capability the core draws through.
///
/// Coordinates are canvas units with the origin at the canvas center and y up.
pub trait RenderSink {
    fn move_to(&mut self, id: CurveId, p: Point);
    fn pen_down(&mut self, id: CurveId);
    fn pen_up(&mut self, id: CurveId);
    fn show_cursor(&mut self, id: CurveId);
    fn hide_cursor(&mut self, id: CurveId);
    /// Erase everything drawn for `id`. Pen position and color are kept.
    fn clear_path(&mut self, id: CurveId);
    fn set_color(&mut self, id: CurveId, color: Rgb);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn move_to(&mut self, _id: CurveId, _p: Point) {}
    fn pen_down(&mut self, _id: CurveId) {}
    fn pen_up(&mut self, _id: CurveId) {}
    fn show_cursor(&mut self, _id: CurveId) {}
    fn hide_cursor(&mut self, _id: CurveId) {}
    fn clear_path(&mut self, _id: CurveId) {}
    fn set_color(&mut self, _id: CurveId, _color: Rgb) {}
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn move_to(&mut self, id: CurveId, p: Point) {
        (**self).move_to(id, p)
    }
    fn pen_down(&mut self, id: CurveId) {
        (**self).pen_down(id)
    }
    fn pen_up(&mut self, id: CurveId) {
        (**self).pen_up(id)
    }
    fn show_cursor(&mut self, id: CurveId) {
        (**self).show_cursor(id)
    }
    fn hide_cursor(&mut self, id: CurveId) {
        (**self).hide_cursor(id)
    }
    fn clear_path(&mut self, id: CurveId) {
        (**self).clear_path(id)
    }
    fn set_color(&mut self, id: CurveId, color: Rgb) {
        (**self).set_color(id, color)
    }
}
