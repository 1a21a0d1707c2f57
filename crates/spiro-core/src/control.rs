// crates/spiro-core/src/control.rs
//
// Key bindings:
//   s      -> Save
//   space  -> Restart
//   t      -> ToggleCursors

use crate::error::{Result, SpiroError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Export the current canvas.
    Save,
    /// Restart every curve with new random parameters.
    Restart,
    /// Show or hide the per-curve cursors.
    ToggleCursors,
}

impl Command {
    pub fn from_key(key: &str) -> Result<Self> {
        if key == " " {
            return Ok(Command::Restart);
        }
        match key.trim().to_ascii_lowercase().as_str() {
            "s" | "save" => Ok(Command::Save),
            "space" | "restart" => Ok(Command::Restart),
            "t" | "toggle" => Ok(Command::ToggleCursors),
            other => Err(SpiroError::InvalidParameter(format!("unbound key: {other:?}"))),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Command::Save => "s",
            Command::Restart => "space",
            Command::ToggleCursors => "t",
        }
    }
}

/// A command to deliver before tick `at_tick` runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledCommand {
    pub at_tick: u64,
    pub cmd: Command,
}

/// Parse `"TICK:KEY,TICK:KEY,..."`, e.g. `"100:t,250:space,400:s"`.
///
/// The result is sorted by tick; commands on the same tick keep their order.
pub fn parse_script(s: &str) -> Result<Vec<ScheduledCommand>> {
    let mut out = Vec::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (tick, key) = part.split_once(':').ok_or_else(|| {
            SpiroError::InvalidParameter(format!("expected TICK:KEY, got {part:?}"))
        })?;
        let at_tick = tick.trim().parse::<u64>().map_err(|e| {
            SpiroError::InvalidParameter(format!("bad tick {tick:?} in {part:?}: {e}"))
        })?;
        out.push(ScheduledCommand {
            at_tick,
            cmd: Command::from_key(key)?,
        });
    }
    out.sort_by_key(|c| c.at_tick);
    Ok(out)
}
