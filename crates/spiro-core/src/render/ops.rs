// crates/spiro-core/src/render/ops.rs

use crate::curve::spec::{Point, Rgb};
use crate::render::sink::{CurveId, RenderSink};

/// One call made against a [`RenderSink`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderOp {
    MoveTo(Point),
    PenDown,
    PenUp,
    ShowCursor,
    HideCursor,
    ClearPath,
    SetColor(Rgb),
}

/// Sink that logs every call in order. Used for replay and inspection.
#[derive(Clone, Debug, Default)]
pub struct OpLog {
    pub ops: Vec<(CurveId, RenderOp)>,
}

impl OpLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Ops issued for one curve, in order.
    pub fn for_curve(&self, id: CurveId) -> impl Iterator<Item = RenderOp> + '_ {
        self.ops.iter().filter(move |(i, _)| *i == id).map(|(_, op)| *op)
    }

    /// Every `MoveTo` target for one curve, in order.
    pub fn moves(&self, id: CurveId) -> Vec<Point> {
        self.for_curve(id)
            .filter_map(|op| match op {
                RenderOp::MoveTo(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// Forward the log to another sink.
    pub fn replay<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        for &(id, op) in &self.ops {
            match op {
                RenderOp::MoveTo(p) => sink.move_to(id, p),
                RenderOp::PenDown => sink.pen_down(id),
                RenderOp::PenUp => sink.pen_up(id),
                RenderOp::ShowCursor => sink.show_cursor(id),
                RenderOp::HideCursor => sink.hide_cursor(id),
                RenderOp::ClearPath => sink.clear_path(id),
                RenderOp::SetColor(c) => sink.set_color(id, c),
            }
        }
    }
}

impl RenderSink for OpLog {
    fn move_to(&mut self, id: CurveId, p: Point) {
        self.ops.push((id, RenderOp::MoveTo(p)));
    }
    fn pen_down(&mut self, id: CurveId) {
        self.ops.push((id, RenderOp::PenDown));
    }
    fn pen_up(&mut self, id: CurveId) {
        self.ops.push((id, RenderOp::PenUp));
    }
    fn show_cursor(&mut self, id: CurveId) {
        self.ops.push((id, RenderOp::ShowCursor));
    }
    fn hide_cursor(&mut self, id: CurveId) {
        self.ops.push((id, RenderOp::HideCursor));
    }
    fn clear_path(&mut self, id: CurveId) {
        self.ops.push((id, RenderOp::ClearPath));
    }
    fn set_color(&mut self, id: CurveId, color: Rgb) {
        self.ops.push((id, RenderOp::SetColor(color)));
    }
}
