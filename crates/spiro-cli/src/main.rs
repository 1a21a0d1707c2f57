// crates/spiro-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "spiro")]
#[command(about = "Spirograph (hypotrochoid) generator", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// With no subcommand, run the animated ensemble.
    #[command(flatten)]
    pub animate: cmd::animate::AnimateArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw one curve (R r l) at the origin in black
    Draw(cmd::draw::DrawArgs),

    /// Animate an ensemble of random curves, restarting when all have closed
    Animate(cmd::animate::AnimateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Some(Commands::Draw(args)) => cmd::draw::run(args),
        Some(Commands::Animate(args)) => cmd::animate::run(args),
        None => cmd::animate::run(cli.animate),
    }
}
