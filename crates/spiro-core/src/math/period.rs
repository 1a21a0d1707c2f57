// crates/spiro-core/src/math/period.rs
//
// The curve closes once the inner circle has turned a whole number of times
// relative to the outer one. With g = gcd(r, R) the reduced ratio is
// (r/g) / (R/g), so the first return to the start happens after r/g outer
// revolutions, i.e. at 360 * (r/g) degrees.

use crate::error::{Result, SpiroError};

pub const DEGREES_PER_TURN: u32 = 360;

/// Largest rotation count whose terminal angle still fits in a `u32` degree counter.
pub const MAX_ROTATIONS: u32 = u32::MAX / DEGREES_PER_TURN;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RotationCount(pub u32);

impl RotationCount {
    /// Angle (degrees) at which the curve is back at its start point.
    ///
    /// Exact for counts up to [`MAX_ROTATIONS`], which `reduce` enforces.
    #[inline]
    pub fn terminal_angle(self) -> u32 {
        self.0.saturating_mul(DEGREES_PER_TURN)
    }

    /// Ticks needed to reach the terminal angle when advancing `step_deg` per tick.
    #[inline]
    pub fn ticks_to_close(self, step_deg: u32) -> u32 {
        let t = self.terminal_angle() as u64;
        let s = step_deg as u64;
        ((t + s - 1) / s) as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reduction {
    pub gcd: u64,
    pub n_rot: RotationCount,
}

pub fn reduce(big_r: i64, small_r: i64) -> Result<Reduction> {
    if big_r <= 0 || small_r <= 0 {
        return Err(SpiroError::InvalidParameter(format!(
            "radii must be positive to reduce r/R (got R={big_r}, r={small_r})"
        )));
    }

    let g = gcd_u64(small_r as u64, big_r as u64);
    let n = (small_r as u64) / g;
    let n_rot = u32::try_from(n)
        .ok()
        .filter(|&n| n <= MAX_ROTATIONS)
        .ok_or_else(|| {
            SpiroError::InvalidParameter(format!(
                "rotation count {n} too large (max {MAX_ROTATIONS}) for R={big_r}, r={small_r}"
            ))
        })?;

    Ok(Reduction {
        gcd: g,
        n_rot: RotationCount(n_rot),
    })
}

pub fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd_u64(10, 50), 10);
        assert_eq!(gcd_u64(200, 300), 100);
        assert_eq!(gcd_u64(13, 97), 1);
        assert_eq!(gcd_u64(7, 0), 7);
    }

    #[test]
    fn ticks_round_up() {
        assert_eq!(RotationCount(1).ticks_to_close(5), 72);
        assert_eq!(RotationCount(1).ticks_to_close(7), 52);
        assert_eq!(RotationCount(2).ticks_to_close(5), 144);
    }
}
