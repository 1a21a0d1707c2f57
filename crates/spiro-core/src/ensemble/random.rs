// crates/spiro-core/src/ensemble/random.rs
//
// Random curve parameters bounded by the canvas:
//   R      in [50, max(50, min(w,h)/2)]
//   r      in [10, max(10, 9R/10)]
//   l      in (0.1, 0.9)
//   center in [-w/2, w/2] x [-h/2, h/2]
//   color  3 x U[0,1)

use rand::Rng;

use crate::curve::spec::{CurveSpec, Point, Rgb};
use crate::ensemble::bounds::BoundsProvider;

pub const MIN_BIG_R: i64 = 50;
pub const MIN_SMALL_R: i64 = 10;
pub const L_MIN: f64 = 0.1;
pub const L_MAX: f64 = 0.9;

/// Sample a spec that always passes validation, whatever the bounds.
pub fn generate<R, B>(rng: &mut R, bounds: &B) -> CurveSpec
where
    R: Rng + ?Sized,
    B: BoundsProvider + ?Sized,
{
    let width = bounds.current_width() as i64;
    let height = bounds.current_height() as i64;

    let big_hi = (width.min(height) / 2).max(MIN_BIG_R);
    let big_r = rng.gen_range(MIN_BIG_R..=big_hi);

    let small_hi = (9 * big_r / 10).max(MIN_SMALL_R);
    let small_r = rng.gen_range(MIN_SMALL_R..=small_hi);

    let l = sample_open(rng, L_MIN, L_MAX);

    let hw = width as f64 / 2.0;
    let hh = height as f64 / 2.0;
    let center = Point {
        x: rng.gen_range(-hw..=hw),
        y: rng.gen_range(-hh..=hh),
    };

    let color = Rgb {
        r: rng.gen::<f64>(),
        g: rng.gen::<f64>(),
        b: rng.gen::<f64>(),
    };

    CurveSpec {
        big_r,
        small_r,
        l,
        center,
        color,
    }
}

/// Uniform in the open interval (lo, hi).
fn sample_open<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    loop {
        let v = rng.gen_range(lo..hi);
        if v > lo {
            return v;
        }
    }
}
