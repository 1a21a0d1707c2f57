// crates/spiro-cli/src/cmd/draw.rs

use std::path::PathBuf;

use clap::Args;
use spiro_core::config::{DEFAULT_HEIGHT, DEFAULT_STEP_DEG, DEFAULT_WIDTH};
use spiro_core::render::recorder::PathRecorder;
use spiro_core::validate::l_in_recommended_range;
use spiro_core::{Curve, CurveSpec};

use crate::io::canvas::Canvas;
use crate::io::{export, jsonl};

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct DrawArgs {
    /// Outer circle radius R (truncated to an integer)
    pub big_r: f64,

    /// Inner circle radius r (truncated to an integer)
    pub small_r: f64,

    /// Pen offset as a fraction of r; (0,1) is the usual range
    pub l: f64,

    /// Angle step in degrees
    #[arg(long, default_value_t = DEFAULT_STEP_DEG)]
    pub step: u32,

    /// Snapshot path (.svg or .png)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Print every point as JSONL on stdout
    #[arg(long)]
    pub jsonl: bool,

    /// Canvas width for the snapshot
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height for the snapshot
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,
}

pub fn run(args: DrawArgs) -> anyhow::Result<()> {
    let spec = CurveSpec::at_origin(args.big_r as i64, args.small_r as i64, args.l);
    if !l_in_recommended_range(spec.l) {
        eprintln!("[spiro] warning: l={} is outside (0,1)", spec.l);
    }

    // Rejects bad radii/step before anything is drawn.
    let mut rec = PathRecorder::new();
    let mut curve = Curve::new(0, spec, args.step, &mut rec)?;
    let points = curve.draw_full(&mut rec);

    eprintln!(
        "[spiro] draw R={} r={} l={} n_rot={} step={} points={}",
        spec.big_r,
        spec.small_r,
        spec.l,
        curve.n_rot().0,
        args.step,
        points
    );

    if args.jsonl {
        jsonl::write_points_stdout(curve.points())?;
    }

    if let Some(out) = args.out.as_deref() {
        export::write_snapshot(out, &rec, Canvas::new(args.width, args.height))?;
        eprintln!("[spiro] wrote {}", out.display());
    }

    Ok(())
}
