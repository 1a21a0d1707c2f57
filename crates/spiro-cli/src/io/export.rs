// crates/spiro-cli/src/io/export.rs

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use spiro_core::render::recorder::PathRecorder;

use crate::io::canvas::Canvas;
use crate::io::{png_out, svg_out};

/// Write a snapshot; the format follows the extension (.svg or .png).
pub fn write_snapshot(path: &Path, rec: &PathRecorder, canvas: Canvas) -> anyhow::Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("svg") => svg_out::write_svg(path, rec, canvas),
        Some("png") => png_out::write_png(path, rec, canvas),
        _ => anyhow::bail!(
            "unknown snapshot format for {} (expected .svg or .png)",
            path.display()
        ),
    }
}

/// `dir/spiro-18Oct2026-093015-t<tick>` in local time (no extension).
pub fn timestamped_base(dir: &Path, tick: u64) -> PathBuf {
    base_at(dir, Local::now().naive_local(), tick)
}

fn base_at(dir: &Path, when: NaiveDateTime, tick: u64) -> PathBuf {
    dir.join(format!("spiro-{}-t{tick}", when.format("%d%b%Y-%H%M%S")))
}

/// Save both the vector and raster forms next to each other.
pub fn save_drawing(base: &Path, rec: &PathRecorder, canvas: Canvas) -> anyhow::Result<(PathBuf, PathBuf)> {
    if let Some(dir) = base.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("create dir: {}", dir.display()))?;
    }
    let svg = base.with_extension("svg");
    let png = base.with_extension("png");
    svg_out::write_svg(&svg, rec, canvas)?;
    png_out::write_png(&png, rec, canvas)?;
    Ok((svg, png))
}
