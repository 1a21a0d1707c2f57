// crates/spiro-cli/src/cmd/animate.rs

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spiro_core::config::{
    AnimatorConfig, DEFAULT_ENSEMBLE_SIZE, DEFAULT_HEIGHT, DEFAULT_STEP_DEG, DEFAULT_TICK_MS,
    DEFAULT_WIDTH,
};
use spiro_core::control::parse_script;
use spiro_core::render::recorder::PathRecorder;
use spiro_core::scheduler::{Pacing, Scheduler, SchedulerEvent, ScriptedCommands};
use spiro_core::{Curve, Ensemble};

use crate::io::canvas::Canvas;
use crate::io::export;

#[derive(Args, Debug)]
pub struct AnimateArgs {
    /// Number of curves drawn together
    #[arg(long, default_value_t = DEFAULT_ENSEMBLE_SIZE)]
    pub curves: usize,

    /// Ticks to run before exiting
    #[arg(long, default_value_t = 2_000)]
    pub ticks: u64,

    /// RNG seed; omit for a time-based seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Angle step per tick in degrees
    #[arg(long, default_value_t = DEFAULT_STEP_DEG)]
    pub step: u32,

    /// Tick interval (only used with --realtime)
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    pub interval_ms: u64,

    /// Sleep the tick interval between ticks
    #[arg(long)]
    pub realtime: bool,

    /// Canvas width
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Key presses as TICK:KEY,... (keys: s = save, space = restart, t = toggle cursors)
    #[arg(long)]
    pub keys: Option<String>,

    /// Directory for saves triggered by the `s` key
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Final snapshot path (.svg or .png)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: AnimateArgs) -> anyhow::Result<()> {
    let seed = args.seed.unwrap_or_else(time_seed);
    let cfg = AnimatorConfig {
        ensemble_size: args.curves,
        step_deg: args.step,
        tick_interval: Duration::from_millis(args.interval_ms),
        width: args.width,
        height: args.height,
        seed,
    };
    cfg.validate()?;

    let script = match args.keys.as_deref() {
        Some(s) => parse_script(s)?,
        None => Vec::new(),
    };

    let canvas = Canvas::new(cfg.width, cfg.height);
    let mut rec = PathRecorder::new();
    let mut ens = Ensemble::new(
        cfg.ensemble_size,
        cfg.bounds()?,
        StdRng::seed_from_u64(cfg.seed),
        cfg.step_deg,
        &mut rec,
    )?;

    eprintln!(
        "[spiro] animate curves={} seed={} step={} ticks={} canvas={}x{}",
        cfg.ensemble_size, cfg.seed, cfg.step_deg, args.ticks, cfg.width, cfg.height
    );
    log_curves(ens.curves());
    if !script.is_empty() {
        let keys: Vec<String> = script
            .iter()
            .map(|c| format!("{}:{}", c.at_tick, c.cmd.key()))
            .collect();
        eprintln!("[spiro] keys {}", keys.join(","));
    }

    let pacing = if args.realtime {
        Pacing::Realtime
    } else {
        Pacing::Headless
    };
    let sched = Scheduler::new(cfg.tick_interval, pacing);
    let mut cmds = ScriptedCommands::new(script);
    let out_dir = args.out_dir.clone();

    let rep = sched.run(
        &mut ens,
        &mut rec,
        args.ticks,
        &mut cmds,
        |ev, ens, rec| -> anyhow::Result<()> {
            match ev {
                SchedulerEvent::Restarted { tick, cause } => {
                    eprintln!("[spiro] restart tick={tick} cause={cause:?}");
                    log_curves(ens.curves());
                }
                SchedulerEvent::CursorsToggled { tick, shown } => {
                    eprintln!("[spiro] cursors tick={tick} shown={shown}");
                }
                SchedulerEvent::SaveRequested { tick } => {
                    let base = export::timestamped_base(&out_dir, tick);
                    let (svg, png) = export::save_drawing(&base, rec, canvas)?;
                    eprintln!(
                        "[spiro] saved tick={tick} svg={} png={}",
                        svg.display(),
                        png.display()
                    );
                }
            }
            Ok(())
        },
    )?;

    let stats = ens.stats();
    eprintln!(
        "[spiro] done ticks={} restarts={} commands={} saves={} points={} complete={}/{}",
        rep.ticks,
        rep.restarts,
        rep.commands,
        rep.saves,
        stats.points,
        ens.completed(),
        ens.len()
    );

    if let Some(out) = args.out.as_deref() {
        export::write_snapshot(out, &rec, canvas)?;
        eprintln!("[spiro] wrote {}", out.display());
    }

    Ok(())
}

fn log_curves(curves: &[Curve]) {
    for c in curves {
        let s = c.spec();
        eprintln!(
            "[spiro]   curve={} R={} r={} l={:.3} n_rot={} center=({:.1},{:.1}) color={}",
            c.id(),
            s.big_r,
            s.small_r,
            s.l,
            c.n_rot().0,
            s.center.x,
            s.center.y,
            s.color.to_hex()
        );
    }
}

fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
