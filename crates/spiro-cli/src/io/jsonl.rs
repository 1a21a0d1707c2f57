// crates/spiro-cli/src/io/jsonl.rs

use std::io::Write;

use anyhow::Context;
use spiro_core::Point;

/// Write points as JSONL to stdout.
/// Format: {"x":N,"y":N}
pub fn write_points_stdout<I>(points: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = Point>,
{
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    for p in points {
        writeln!(out, "{{\"x\":{},\"y\":{}}}", p.x, p.y).context("write points jsonl")?;
    }
    out.flush().context("flush points jsonl")?;
    Ok(())
}
