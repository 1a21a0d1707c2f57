// crates/spiro-core/src/math/trochoid.rs
//
// Hypotrochoid sampling:
//   k = r / R
//   x = R * ((1-k) cos a + l k cos((1-k) a / k))
//   y = R * ((1-k) sin a - l k sin((1-k) a / k))
//
// Always evaluated from the absolute angle; callers never accumulate deltas.

use crate::curve::spec::Point;

/// Point on the trochoid relative to the curve center.
///
/// `small_r` must be non-zero; specs are validated before they reach here.
#[inline]
pub fn position(big_r: i64, small_r: i64, l: f64, angle_deg: f64) -> Point {
    let big = big_r as f64;
    let k = small_r as f64 / big;
    let a = angle_deg.to_radians();
    let inner = (1.0 - k) * a / k;

    Point {
        x: big * ((1.0 - k) * a.cos() + l * k * inner.cos()),
        y: big * ((1.0 - k) * a.sin() - l * k * inner.sin()),
    }
}

/// Same as [`position`], translated by `center`.
#[inline]
pub fn position_at(big_r: i64, small_r: i64, l: f64, center: Point, angle_deg: f64) -> Point {
    let p = position(big_r, small_r, l, angle_deg);
    Point {
        x: center.x + p.x,
        y: center.y + p.y,
    }
}
