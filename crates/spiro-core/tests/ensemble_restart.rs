use rand::rngs::StdRng;
use rand::SeedableRng;

use spiro_core::curve::state::CurveState;
use spiro_core::ensemble::bounds::Bounds;
use spiro_core::render::ops::{OpLog, RenderOp};
use spiro_core::render::sink::NullSink;
use spiro_core::{CurveSpec, Ensemble, SpiroError};

fn bounds() -> Bounds {
    Bounds::new(400, 300).unwrap()
}

#[test]
fn restarts_only_when_every_member_is_complete() {
    let mut sink = NullSink;
    let specs = vec![
        CurveSpec::at_origin(50, 10, 0.5),   // nRot 1 -> 72 ticks
        CurveSpec::at_origin(300, 200, 0.5), // nRot 2 -> 144 ticks
    ];
    let mut ens =
        Ensemble::with_specs(specs, bounds(), StdRng::seed_from_u64(7), 5, &mut sink).unwrap();

    for tick in 1..144u64 {
        let r = ens.tick(&mut sink).unwrap();
        assert_eq!(r.tick, tick);
        assert!(!r.restarted, "restarted early at tick {tick}");
        let expect_done = if tick >= 72 { 1 } else { 0 };
        assert_eq!(r.completed, expect_done, "tick {tick}");
    }

    // The fast curve sits frozen while the slow one finishes.
    assert_eq!(ens.curves()[0].angle_deg(), 360);
    assert_eq!(ens.curves()[0].state(), CurveState::Complete);

    let r = ens.tick(&mut sink).unwrap();
    assert_eq!(r.completed, 2);
    assert!(r.restarted);
    assert_eq!(r.advanced, 1);

    assert_eq!(ens.len(), 2);
    assert_eq!(ens.stats().restarts, 1);
    for c in ens.curves() {
        assert_eq!(c.state(), CurveState::Active);
        assert_eq!(c.angle_deg(), 0);
        assert!(c.spec().big_r >= 50 && c.spec().big_r <= 150);
    }
}

#[test]
fn one_slow_member_blocks_restart() {
    let mut sink = NullSink;
    let specs = vec![
        CurveSpec::at_origin(50, 10, 0.5),
        CurveSpec::at_origin(50, 10, 0.3),
        CurveSpec::at_origin(97, 96, 0.5), // nRot 96 -> 6912 ticks
    ];
    let mut ens =
        Ensemble::with_specs(specs, bounds(), StdRng::seed_from_u64(1), 5, &mut sink).unwrap();

    for _ in 0..2000 {
        let r = ens.tick(&mut sink).unwrap();
        assert!(!r.restarted);
    }
    assert_eq!(ens.completed(), 2);
    assert_eq!(ens.stats().restarts, 0);
    assert_eq!(ens.stats().ticks, 2000);
}

#[test]
fn random_ensemble_restarts_after_slowest_member() {
    let mut sink = NullSink;
    let mut ens = Ensemble::new(4, bounds(), StdRng::seed_from_u64(42), 5, &mut sink).unwrap();
    assert_eq!(ens.len(), 4);

    let slowest = ens
        .curves()
        .iter()
        .map(|c| c.n_rot().ticks_to_close(5) as u64)
        .max()
        .unwrap();

    let mut first_restart = None;
    for _ in 0..slowest {
        let r = ens.tick(&mut sink).unwrap();
        if r.restarted {
            first_restart = Some(r.tick);
            break;
        }
    }
    assert_eq!(first_restart, Some(slowest));
    assert_eq!(ens.len(), 4);
}

#[test]
fn restart_all_clears_then_restarts_each_member() {
    let mut log = OpLog::new();
    let mut ens = Ensemble::new(3, bounds(), StdRng::seed_from_u64(9), 5, &mut log).unwrap();
    for _ in 0..10 {
        ens.tick(&mut log).unwrap();
    }
    log.clear();

    ens.restart_all(&mut log).unwrap();

    for (i, c) in ens.curves().iter().enumerate() {
        assert_eq!(c.id(), i);
        let ops: Vec<_> = log.for_curve(i).collect();
        assert_eq!(ops.first(), Some(&RenderOp::ClearPath));
        assert_eq!(
            &ops[ops.len() - 3..],
            &[
                RenderOp::PenUp,
                RenderOp::MoveTo(c.start_position()),
                RenderOp::PenDown
            ]
        );
        assert_eq!(c.angle_deg(), 0);
    }
}

#[test]
fn toggle_flips_cursors_and_survives_restart() {
    let mut sink = NullSink;
    let mut ens = Ensemble::new(4, bounds(), StdRng::seed_from_u64(3), 5, &mut sink).unwrap();
    assert!(ens.cursors_shown());
    assert!(ens.curves().iter().all(|c| c.cursor_visible()));

    ens.toggle_visibility(&mut sink);
    assert!(!ens.cursors_shown());
    assert!(ens.curves().iter().all(|c| !c.cursor_visible()));

    ens.restart_all(&mut sink).unwrap();
    assert!(ens.curves().iter().all(|c| !c.cursor_visible()));

    ens.toggle_visibility(&mut sink);
    ens.restart_all(&mut sink).unwrap();
    assert!(ens.curves().iter().all(|c| c.cursor_visible()));
}

#[test]
fn empty_ensemble_rejected() {
    let mut sink = NullSink;
    let r = Ensemble::new(0, bounds(), StdRng::seed_from_u64(0), 5, &mut sink);
    assert!(matches!(r, Err(SpiroError::InvalidParameter(_))));
}
