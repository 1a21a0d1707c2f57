// crates/spiro-core/src/ensemble/engine.rs

use rand::Rng;

use crate::control::Command;
use crate::curve::curve::Curve;
use crate::curve::spec::CurveSpec;
use crate::ensemble::bounds::BoundsProvider;
use crate::ensemble::random;
use crate::error::{Result, SpiroError};
use crate::render::sink::RenderSink;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnsembleStats {
    pub ticks: u64,
    /// Collective restarts, whether triggered by completion or by command.
    pub restarts: u64,
    /// Points emitted by `advance` across all members.
    pub points: u64,
}

/// What one `tick` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    /// Members that moved this tick (were still active going in).
    pub advanced: usize,
    /// Members complete after advancing, observed before any restart.
    pub completed: usize,
    pub restarted: bool,
}

/// Result of dispatching a [`Command`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Restarted,
    CursorsToggled { shown: bool },
    /// Export is the caller's job; the ensemble only reports the request.
    SaveRequested,
}

/// Fixed-size set of curves advanced in lockstep.
///
/// Members keep their index (and `CurveId`) for the ensemble's lifetime.
/// The whole set restarts only once every member has closed.
pub struct Ensemble<B, R> {
    curves: Vec<Curve>,
    bounds: B,
    rng: R,
    step_deg: u32,
    cursors_shown: bool,
    stats: EnsembleStats,
}

impl<B, R> Ensemble<B, R>
where
    B: BoundsProvider,
    R: Rng,
{
    /// `n` curves with independently sampled parameters.
    pub fn new<S: RenderSink + ?Sized>(
        n: usize,
        bounds: B,
        mut rng: R,
        step_deg: u32,
        sink: &mut S,
    ) -> Result<Self> {
        let specs: Vec<CurveSpec> = (0..n).map(|_| random::generate(&mut rng, &bounds)).collect();
        Self::with_specs(specs, bounds, rng, step_deg, sink)
    }

    /// Start from explicit specs. Later restarts still draw from `rng`.
    pub fn with_specs<S: RenderSink + ?Sized>(
        specs: Vec<CurveSpec>,
        bounds: B,
        rng: R,
        step_deg: u32,
        sink: &mut S,
    ) -> Result<Self> {
        if specs.is_empty() {
            return Err(SpiroError::InvalidParameter(
                "ensemble needs at least one curve".into(),
            ));
        }

        let curves = specs
            .into_iter()
            .enumerate()
            .map(|(id, spec)| Curve::new(id, spec, step_deg, &mut *sink))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            curves,
            bounds,
            rng,
            step_deg,
            cursors_shown: true,
            stats: EnsembleStats::default(),
        })
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn stats(&self) -> EnsembleStats {
        self.stats
    }

    pub fn step_deg(&self) -> u32 {
        self.step_deg
    }

    pub fn cursors_shown(&self) -> bool {
        self.cursors_shown
    }

    pub fn bounds(&self) -> &B {
        &self.bounds
    }

    pub fn completed(&self) -> usize {
        self.curves.iter().filter(|c| c.is_complete()).count()
    }

    /// Advance every member once, in construction order, then restart the
    /// whole set if every member is complete.
    pub fn tick<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> Result<TickReport> {
        self.stats.ticks += 1;

        let mut advanced = 0usize;
        for c in self.curves.iter_mut() {
            if c.advance(sink).is_some() {
                advanced += 1;
            }
        }
        self.stats.points += advanced as u64;

        // Observe all members before deciding.
        let completed = self.completed();
        let restarted = completed == self.curves.len();
        if restarted {
            self.restart_all(sink)?;
        }

        Ok(TickReport {
            tick: self.stats.ticks,
            advanced,
            completed,
            restarted,
        })
    }

    /// Erase every member and start it again with fresh random parameters.
    pub fn restart_all<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        for c in self.curves.iter_mut() {
            c.clear(sink);
            let spec = random::generate(&mut self.rng, &self.bounds);
            c.restart(spec, self.cursors_shown, sink)?;
        }
        self.stats.restarts += 1;
        Ok(())
    }

    /// Flip every member's cursor.
    pub fn toggle_visibility<S: RenderSink + ?Sized>(&mut self, sink: &mut S) {
        self.cursors_shown = !self.cursors_shown;
        for c in self.curves.iter_mut() {
            c.toggle_cursor(sink);
        }
    }

    pub fn apply<S: RenderSink + ?Sized>(
        &mut self,
        cmd: Command,
        sink: &mut S,
    ) -> Result<CommandOutcome> {
        match cmd {
            Command::Restart => {
                self.restart_all(sink)?;
                Ok(CommandOutcome::Restarted)
            }
            Command::ToggleCursors => {
                self.toggle_visibility(sink);
                Ok(CommandOutcome::CursorsToggled {
                    shown: self.cursors_shown,
                })
            }
            Command::Save => Ok(CommandOutcome::SaveRequested),
        }
    }
}
