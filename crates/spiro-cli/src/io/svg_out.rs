// crates/spiro-cli/src/io/svg_out.rs

use std::path::Path;

use anyhow::Context;
use spiro_core::render::recorder::PathRecorder;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path as SvgPath, Rectangle};
use svg::Document;

use crate::io::canvas::Canvas;

const CURSOR_RADIUS: f64 = 4.0;

/// Vector snapshot: white background, one <path> per stroke, a dot per visible cursor.
pub fn render_document(rec: &PathRecorder, canvas: Canvas) -> Document {
    let mut doc = Document::new()
        .set("viewBox", format!("0 0 {} {}", canvas.width, canvas.height))
        .set("width", canvas.width)
        .set("height", canvas.height)
        .add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", "white"),
        );

    for (id, stroke) in rec.drawn_strokes() {
        let mut pts = stroke.points.iter().map(|p| canvas.to_pixel(*p));
        let Some((x0, y0)) = pts.next() else {
            continue;
        };
        let mut data = Data::new().move_to((x0 as f32, y0 as f32));
        for (x, y) in pts {
            data = data.line_to((x as f32, y as f32));
        }

        doc = doc.add(
            SvgPath::new()
                .set("fill", "none")
                .set("stroke", stroke.color.to_hex())
                .set("stroke-width", 1)
                .set("data-curve", id.to_string())
                .set("d", data),
        );
    }

    for c in rec.cursors().filter(|c| c.visible) {
        let (x, y) = canvas.to_pixel(c.pos);
        doc = doc.add(
            Circle::new()
                .set("cx", x)
                .set("cy", y)
                .set("r", CURSOR_RADIUS)
                .set("fill", c.color.to_hex()),
        );
    }

    doc
}

pub fn write_svg(path: &Path, rec: &PathRecorder, canvas: Canvas) -> anyhow::Result<()> {
    let doc = render_document(rec, canvas);
    svg::save(path, &doc).with_context(|| format!("write svg: {}", path.display()))?;
    Ok(())
}
