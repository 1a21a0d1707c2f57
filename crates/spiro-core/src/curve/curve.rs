// crates/spiro-core/src/curve/curve.rs

use crate::curve::spec::{CurveSpec, Point};
use crate::curve::state::CurveState;
use crate::error::Result;
use crate::math::period::{reduce, RotationCount};
use crate::math::trochoid;
use crate::render::sink::{CurveId, RenderSink};
use crate::validate::{validate_spec, validate_step};

/// One spirograph curve plus its drawing progress.
///
/// The angle is kept in whole degrees and every point is computed from the
/// absolute angle, so long runs never drift.
#[derive(Clone, Debug)]
pub struct Curve {
    id: CurveId,
    spec: CurveSpec,
    n_rot: RotationCount,
    step_deg: u32,
    angle_deg: u32,
    state: CurveState,
    cursor_visible: bool,
}

impl Curve {
    /// Validate `spec`, then lift the pen, move to the start point and put it down.
    pub fn new<S: RenderSink + ?Sized>(
        id: CurveId,
        spec: CurveSpec,
        step_deg: u32,
        sink: &mut S,
    ) -> Result<Self> {
        validate_step(step_deg)?;
        validate_spec(&spec)?;
        let n_rot = reduce(spec.big_r, spec.small_r)?.n_rot;

        let c = Self {
            id,
            spec,
            n_rot,
            step_deg,
            angle_deg: 0,
            state: CurveState::Active,
            cursor_visible: true,
        };
        sink.set_color(id, spec.color);
        sink.show_cursor(id);
        c.place_at_start(sink);
        Ok(c)
    }

    pub fn id(&self) -> CurveId {
        self.id
    }

    pub fn spec(&self) -> &CurveSpec {
        &self.spec
    }

    pub fn n_rot(&self) -> RotationCount {
        self.n_rot
    }

    pub fn step_deg(&self) -> u32 {
        self.step_deg
    }

    pub fn angle_deg(&self) -> u32 {
        self.angle_deg
    }

    pub fn state(&self) -> CurveState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Angle at which the curve closes (360 * nRot).
    pub fn terminal_angle(&self) -> u32 {
        self.n_rot.terminal_angle()
    }

    /// Canvas position at `angle_deg` for this curve's spec.
    pub fn point_at(&self, angle_deg: u32) -> Point {
        let s = &self.spec;
        trochoid::position_at(s.big_r, s.small_r, s.l, s.center, angle_deg as f64)
    }

    pub fn start_position(&self) -> Point {
        self.point_at(0)
    }

    pub fn position(&self) -> Point {
        self.point_at(self.angle_deg)
    }

    /// Every point of a full draw: 0, step, 2*step, ... up to 360 * nRot inclusive.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..=self.terminal_angle())
            .step_by(self.step_deg as usize)
            .map(move |a| self.point_at(a))
    }

    /// Move one step. Returns the emitted point, or `None` once complete.
    ///
    /// The final step may pass the closing angle by less than one step; that
    /// point is drawn and the curve then freezes.
    pub fn advance<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> Option<Point> {
        if self.state.is_complete() {
            return None;
        }

        self.angle_deg = self.angle_deg.saturating_add(self.step_deg);
        let p = self.position();
        sink.move_to(self.id, p);

        if self.angle_deg >= self.terminal_angle() {
            self.state = CurveState::Complete;
            self.set_cursor(false, sink);
        }
        Some(p)
    }

    /// Draw the whole curve at once and mark it complete. Returns the number of points.
    pub fn draw_full<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> usize {
        let mut n = 0usize;
        for p in self.points() {
            sink.move_to(self.id, p);
            n += 1;
        }
        self.angle_deg = self.terminal_angle();
        self.state = CurveState::Complete;
        self.set_cursor(false, sink);
        n
    }

    /// Replace the spec and start over from angle 0 without connecting to the old path.
    ///
    /// On error the curve keeps its previous spec and progress.
    pub fn restart<S: RenderSink + ?Sized>(
        &mut self,
        spec: CurveSpec,
        show_cursor: bool,
        sink: &mut S,
    ) -> Result<()> {
        validate_spec(&spec)?;
        let n_rot = reduce(spec.big_r, spec.small_r)?.n_rot;

        self.spec = spec;
        self.n_rot = n_rot;
        self.angle_deg = 0;
        self.state = CurveState::Active;

        sink.set_color(self.id, spec.color);
        self.set_cursor(show_cursor, sink);
        self.place_at_start(sink);
        Ok(())
    }

    /// Erase this curve's drawn path. Progress is untouched.
    pub fn clear<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        sink.clear_path(self.id);
    }

    pub fn toggle_cursor<S: RenderSink + ?Sized>(&mut self, sink: &mut S) {
        let v = !self.cursor_visible;
        self.set_cursor(v, sink);
    }

    fn set_cursor<S: RenderSink + ?Sized>(&mut self, visible: bool, sink: &mut S) {
        self.cursor_visible = visible;
        if visible {
            sink.show_cursor(self.id);
        } else {
            sink.hide_cursor(self.id);
        }
    }

    fn place_at_start<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        let start = self.start_position();
        sink.pen_up(self.id);
        sink.move_to(self.id, start);
        sink.pen_down(self.id);
    }
}
