// crates/spiro-cli/src/io/png_out.rs

use std::path::Path;

use anyhow::Context;
use image::{Rgb as Px, RgbImage};
use spiro_core::render::recorder::PathRecorder;

use crate::io::canvas::Canvas;

const WHITE: Px<u8> = Px([255, 255, 255]);

/// Raster snapshot: 1px lines on white.
pub fn render_image(rec: &PathRecorder, canvas: Canvas) -> RgbImage {
    let mut img = RgbImage::from_pixel(canvas.width, canvas.height, WHITE);

    for (_, stroke) in rec.drawn_strokes() {
        let px = Px(stroke.color.to_u8());
        for seg in stroke.points.windows(2) {
            let a = canvas.to_pixel(seg[0]);
            let b = canvas.to_pixel(seg[1]);
            draw_line(&mut img, a, b, px);
        }
    }

    img
}

pub fn write_png(path: &Path, rec: &PathRecorder, canvas: Canvas) -> anyhow::Result<()> {
    render_image(rec, canvas)
        .save(path)
        .with_context(|| format!("write png: {}", path.display()))?;
    Ok(())
}

/// DDA line over the part of the segment that lies on the image.
fn draw_line(img: &mut RgbImage, a: (f64, f64), b: (f64, f64), px: Px<u8>) {
    let Some(((x0, y0), (x1, y1))) = clip(a, b, img.width() as f64, img.height() as f64) else {
        return;
    };
    let dx = x1 - x0;
    let dy = y1 - y0;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;

    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = (x0 + dx * t).round();
        let y = (y0 + dy * t).round();
        if x < 0.0 || y < 0.0 {
            continue;
        }
        let (xi, yi) = (x as u32, y as u32);
        if xi < img.width() && yi < img.height() {
            img.put_pixel(xi, yi, px);
        }
    }
}

/// Liang-Barsky clip against `[-1, w] x [-1, h]`. `None` if nothing is left.
fn clip((x0, y0): (f64, f64), (x1, y1): (f64, f64), w: f64, h: f64) -> Option<((f64, f64), (f64, f64))> {
    if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
        return None;
    }
    let (dx, dy) = (x1 - x0, y1 - y0);
    let (mut t0, mut t1) = (0.0f64, 1.0f64);

    for (p, q) in [(-dx, x0 + 1.0), (dx, w - x0), (-dy, y0 + 1.0), (dy, h - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (x0 + dx * t0, y0 + dy * t0),
        (x0 + dx * t1, y0 + dy * t1),
    ))
}
