// crates/spiro-core/src/render/recorder.rs
//
// Headless canvas: keeps per-curve polylines the way a pen-plotter would
// produce them. A stroke starts at pen-down (or on a color change while the
// pen is down) and ends at pen-up.

use std::collections::BTreeMap;

use crate::curve::spec::{Point, Rgb};
use crate::render::sink::{CurveId, RenderSink};

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub points: Vec<Point>,
}

#[derive(Clone, Debug)]
struct Track {
    color: Rgb,
    pos: Point,
    pen_down: bool,
    cursor_visible: bool,
    strokes: Vec<Stroke>,
    /// Last stroke still receives points.
    open: bool,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            pos: Point::ORIGIN,
            // Matches a fresh pen: down at the origin.
            pen_down: true,
            cursor_visible: false,
            strokes: Vec::new(),
            open: false,
        }
    }
}

impl Track {
    fn begin_stroke(&mut self) {
        self.strokes.push(Stroke {
            color: self.color,
            points: vec![self.pos],
        });
        self.open = true;
    }
}

/// Cursor of one curve as last seen by the recorder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorView {
    pub id: CurveId,
    pub pos: Point,
    pub color: Rgb,
    pub visible: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PathRecorder {
    tracks: BTreeMap<CurveId, Track>,
}

impl PathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn track(&mut self, id: CurveId) -> &mut Track {
        self.tracks.entry(id).or_default()
    }

    pub fn curve_ids(&self) -> impl Iterator<Item = CurveId> + '_ {
        self.tracks.keys().copied()
    }

    pub fn strokes(&self, id: CurveId) -> &[Stroke] {
        self.tracks
            .get(&id)
            .map(|t| t.strokes.as_slice())
            .unwrap_or(&[])
    }

    /// All strokes with more than one point, ordered by curve id then draw order.
    pub fn drawn_strokes(&self) -> impl Iterator<Item = (CurveId, &Stroke)> + '_ {
        self.tracks.iter().flat_map(|(id, t)| {
            t.strokes
                .iter()
                .filter(|s| s.points.len() > 1)
                .map(move |s| (*id, s))
        })
    }

    pub fn cursors(&self) -> impl Iterator<Item = CursorView> + '_ {
        self.tracks.iter().map(|(id, t)| CursorView {
            id: *id,
            pos: t.pos,
            color: t.color,
            visible: t.cursor_visible,
        })
    }

    pub fn cursor(&self, id: CurveId) -> Option<CursorView> {
        self.tracks.get(&id).map(|t| CursorView {
            id,
            pos: t.pos,
            color: t.color,
            visible: t.cursor_visible,
        })
    }

    /// Total points held across all strokes.
    pub fn point_count(&self) -> usize {
        self.tracks
            .values()
            .flat_map(|t| t.strokes.iter())
            .map(|s| s.points.len())
            .sum()
    }
}

impl RenderSink for PathRecorder {
    fn move_to(&mut self, id: CurveId, p: Point) {
        let t = self.track(id);
        if t.pen_down {
            if !t.open {
                t.begin_stroke();
            }
            if let Some(s) = t.strokes.last_mut() {
                s.points.push(p);
            }
        }
        t.pos = p;
    }

    fn pen_down(&mut self, id: CurveId) {
        let t = self.track(id);
        if !t.pen_down {
            t.pen_down = true;
            t.begin_stroke();
        }
    }

    fn pen_up(&mut self, id: CurveId) {
        let t = self.track(id);
        t.pen_down = false;
        t.open = false;
    }

    fn show_cursor(&mut self, id: CurveId) {
        self.track(id).cursor_visible = true;
    }

    fn hide_cursor(&mut self, id: CurveId) {
        self.track(id).cursor_visible = false;
    }

    fn clear_path(&mut self, id: CurveId) {
        let t = self.track(id);
        t.strokes.clear();
        t.open = false;
    }

    fn set_color(&mut self, id: CurveId, color: Rgb) {
        let t = self.track(id);
        if t.color == color {
            return;
        }
        t.color = color;
        if t.pen_down && t.open {
            t.begin_stroke();
        }
    }
}
