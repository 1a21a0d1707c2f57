// crates/spiro-core/src/scheduler.rs
//
// Single-threaded tick loop. Commands are drained between ticks only, so a
// restart request can never interleave with a tick in flight.

use std::collections::VecDeque;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use rand::Rng;

use crate::control::{Command, ScheduledCommand};
use crate::ensemble::bounds::BoundsProvider;
use crate::ensemble::engine::{CommandOutcome, Ensemble};
use crate::error::SpiroError;
use crate::render::sink::RenderSink;

/// Queue of commands waiting for the next tick boundary.
pub trait CommandSource {
    /// Commands due before tick `next_tick` runs, in delivery order.
    fn drain(&mut self, next_tick: u64) -> Vec<Command>;
}

/// Commands pinned to tick numbers, e.g. from a `--keys` script.
#[derive(Clone, Debug, Default)]
pub struct ScriptedCommands {
    queue: VecDeque<ScheduledCommand>,
}

impl ScriptedCommands {
    pub fn new(mut script: Vec<ScheduledCommand>) -> Self {
        script.sort_by_key(|c| c.at_tick);
        Self {
            queue: script.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl CommandSource for ScriptedCommands {
    fn drain(&mut self, next_tick: u64) -> Vec<Command> {
        let mut out = Vec::new();
        while let Some(c) = self.queue.front() {
            if c.at_tick > next_tick {
                break;
            }
            out.push(c.cmd);
            self.queue.pop_front();
        }
        out
    }
}

/// Commands sent from another thread (e.g. a key listener).
impl CommandSource for Receiver<Command> {
    fn drain(&mut self, _next_tick: u64) -> Vec<Command> {
        self.try_iter().collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartCause {
    /// Every member closed on the same tick.
    AllComplete,
    /// A `Restart` command.
    Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerEvent {
    Restarted { tick: u64, cause: RestartCause },
    CursorsToggled { tick: u64, shown: bool },
    SaveRequested { tick: u64 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub ticks: u64,
    pub restarts: u64,
    pub commands: u64,
    pub saves: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep one interval after every tick.
    Realtime,
    /// Run ticks back to back.
    Headless,
}

#[derive(Clone, Copy, Debug)]
pub struct Scheduler {
    pub interval: Duration,
    pub pacing: Pacing,
}

impl Scheduler {
    pub fn new(interval: Duration, pacing: Pacing) -> Self {
        Self { interval, pacing }
    }

    pub fn headless() -> Self {
        Self::new(Duration::ZERO, Pacing::Headless)
    }

    /// Run `max_ticks` ticks. `on_event` sees the ensemble and sink after each
    /// restart, toggle or save request; saving is up to the caller.
    pub fn run<B, R, S, C, F, E>(
        &self,
        ens: &mut Ensemble<B, R>,
        sink: &mut S,
        max_ticks: u64,
        commands: &mut C,
        mut on_event: F,
    ) -> Result<RunReport, E>
    where
        B: BoundsProvider,
        R: Rng,
        S: RenderSink,
        C: CommandSource + ?Sized,
        F: FnMut(SchedulerEvent, &Ensemble<B, R>, &S) -> Result<(), E>,
        E: From<SpiroError>,
    {
        let mut rep = RunReport::default();

        for _ in 0..max_ticks {
            let next = ens.stats().ticks + 1;

            for cmd in commands.drain(next) {
                rep.commands += 1;
                let ev = match ens.apply(cmd, sink)? {
                    CommandOutcome::Restarted => {
                        rep.restarts += 1;
                        SchedulerEvent::Restarted {
                            tick: next,
                            cause: RestartCause::Command,
                        }
                    }
                    CommandOutcome::CursorsToggled { shown } => {
                        SchedulerEvent::CursorsToggled { tick: next, shown }
                    }
                    CommandOutcome::SaveRequested => {
                        rep.saves += 1;
                        SchedulerEvent::SaveRequested { tick: next }
                    }
                };
                on_event(ev, ens, sink)?;
            }

            let t = ens.tick(sink)?;
            rep.ticks += 1;
            if t.restarted {
                rep.restarts += 1;
                on_event(
                    SchedulerEvent::Restarted {
                        tick: t.tick,
                        cause: RestartCause::AllComplete,
                    },
                    ens,
                    sink,
                )?;
            }

            if self.pacing == Pacing::Realtime && !self.interval.is_zero() {
                std::thread::sleep(self.interval);
            }
        }

        Ok(rep)
    }
}
