use std::sync::mpsc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use spiro_core::control::{parse_script, Command};
use spiro_core::ensemble::bounds::Bounds;
use spiro_core::render::recorder::PathRecorder;
use spiro_core::render::sink::NullSink;
use spiro_core::scheduler::{RestartCause, Scheduler, SchedulerEvent, ScriptedCommands};
use spiro_core::{Ensemble, SpiroError};

#[test]
fn scripted_commands_run_between_ticks() {
    let mut sink = NullSink;
    let b = Bounds::new(400, 300).unwrap();
    let mut ens = Ensemble::new(4, b, StdRng::seed_from_u64(8), 5, &mut sink).unwrap();

    let mut cmds = ScriptedCommands::new(parse_script("5:t,10:space,12:s").unwrap());
    let mut events = Vec::new();
    let rep = Scheduler::headless()
        .run(&mut ens, &mut sink, 20, &mut cmds, |ev, _, _| {
            events.push(ev);
            Ok::<(), SpiroError>(())
        })
        .unwrap();

    assert_eq!(
        events,
        vec![
            SchedulerEvent::CursorsToggled { tick: 5, shown: false },
            SchedulerEvent::Restarted {
                tick: 10,
                cause: RestartCause::Command
            },
            SchedulerEvent::SaveRequested { tick: 12 },
        ]
    );
    assert_eq!(rep.ticks, 20);
    assert_eq!(rep.commands, 3);
    assert_eq!(rep.restarts, 1);
    assert_eq!(rep.saves, 1);
    assert_eq!(cmds.remaining(), 0);

    // Restarted before tick 10 ran, so ticks 10..=20 advanced every curve.
    for c in ens.curves() {
        assert_eq!(c.angle_deg(), 55);
        assert!(!c.cursor_visible());
    }
}

#[test]
fn completion_restart_is_reported() {
    let mut rec = PathRecorder::new();
    let b = Bounds::new(400, 300).unwrap();
    let mut ens = Ensemble::with_specs(
        vec![spiro_core::CurveSpec::at_origin(50, 10, 0.5)],
        b,
        StdRng::seed_from_u64(4),
        5,
        &mut rec,
    )
    .unwrap();

    let mut restarts = Vec::new();
    let mut drawn_at_restart = Vec::new();
    let rep = Scheduler::headless()
        .run(&mut ens, &mut rec, 72, &mut ScriptedCommands::default(), |ev, _, sink| {
            if let SchedulerEvent::Restarted { tick, cause } = ev {
                restarts.push((tick, cause));
                drawn_at_restart.push(sink.drawn_strokes().count());
            }
            Ok::<(), SpiroError>(())
        })
        .unwrap();

    assert_eq!(restarts, vec![(72, RestartCause::AllComplete)]);
    // The old path was cleared before the new curve started.
    assert_eq!(drawn_at_restart, vec![0]);
    assert_eq!(rep.restarts, 1);
}

#[test]
fn channel_commands_are_drained_in_order() {
    let mut sink = NullSink;
    let b = Bounds::new(400, 300).unwrap();
    let mut ens = Ensemble::new(2, b, StdRng::seed_from_u64(21), 5, &mut sink).unwrap();

    let (tx, mut rx) = mpsc::channel();
    tx.send(Command::ToggleCursors).unwrap();
    tx.send(Command::ToggleCursors).unwrap();
    tx.send(Command::Save).unwrap();

    let mut seen = Vec::new();
    let rep = Scheduler::headless()
        .run(&mut ens, &mut sink, 3, &mut rx, |ev, _, _| {
            seen.push(ev);
            Ok::<(), SpiroError>(())
        })
        .unwrap();

    assert_eq!(rep.commands, 3);
    assert_eq!(
        seen,
        vec![
            SchedulerEvent::CursorsToggled { tick: 1, shown: false },
            SchedulerEvent::CursorsToggled { tick: 1, shown: true },
            SchedulerEvent::SaveRequested { tick: 1 },
        ]
    );
    assert!(ens.cursors_shown());
}
