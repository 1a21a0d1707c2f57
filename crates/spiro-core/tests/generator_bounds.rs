use rand::rngs::StdRng;
use rand::SeedableRng;

use spiro_core::ensemble::bounds::Bounds;
use spiro_core::ensemble::random::generate;
use spiro_core::validate::validate_spec;
use spiro_core::SpiroError;

#[test]
fn samples_stay_inside_canvas_ranges() {
    let b = Bounds::new(400, 300).unwrap();
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for _ in 0..1000 {
        let s = generate(&mut rng, &b);
        assert!((50..=150).contains(&s.big_r), "R={}", s.big_r);
        assert!(s.small_r >= 10, "r={}", s.small_r);
        assert!(s.small_r as f64 <= 0.9 * s.big_r as f64, "r={} R={}", s.small_r, s.big_r);
        assert!(s.l > 0.1 && s.l < 0.9, "l={}", s.l);
        assert!(s.center.x.abs() <= 200.0 && s.center.y.abs() <= 150.0);
        for c in [s.color.r, s.color.g, s.color.b] {
            assert!((0.0..=1.0).contains(&c));
        }
        validate_spec(&s).unwrap();
    }
}

#[test]
fn tiny_canvas_clamps_outer_radius() {
    let b = Bounds::new(1, 1).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let s = generate(&mut rng, &b);
        assert_eq!(s.big_r, 50);
        assert!((10..=45).contains(&s.small_r));
    }
}

#[test]
fn same_seed_same_sequence() {
    let b = Bounds::new(800, 600).unwrap();
    let mut a = StdRng::seed_from_u64(11);
    let mut c = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        assert_eq!(generate(&mut a, &b), generate(&mut c, &b));
    }
}

#[test]
fn degenerate_bounds_rejected_at_boundary() {
    for (w, h) in [(0i64, 300i64), (400, 0), (-1, 10), (10, -10)] {
        assert!(matches!(
            Bounds::new(w, h),
            Err(SpiroError::BoundaryViolation(_))
        ));
    }
}
