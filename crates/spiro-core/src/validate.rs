use crate::curve::spec::CurveSpec;
use crate::error::{Result, SpiroError};

pub fn validate_spec(s: &CurveSpec) -> Result<()> {
    // Both radii feed the gcd reduction and r is a divisor in the curve math.
    if s.big_r <= 0 {
        return Err(SpiroError::InvalidParameter(format!(
            "R must be > 0 (got {})",
            s.big_r
        )));
    }
    if s.small_r <= 0 {
        return Err(SpiroError::InvalidParameter(format!(
            "r must be > 0 (got {})",
            s.small_r
        )));
    }

    // l outside (0,1) still traces a curve; only NaN/inf are rejected.
    if !s.l.is_finite() {
        return Err(SpiroError::InvalidParameter(format!(
            "l must be finite (got {})",
            s.l
        )));
    }

    if !s.center.x.is_finite() || !s.center.y.is_finite() {
        return Err(SpiroError::InvalidParameter(
            "center must be finite".into(),
        ));
    }

    for (name, c) in [("red", s.color.r), ("green", s.color.g), ("blue", s.color.b)] {
        if !(0.0..=1.0).contains(&c) {
            return Err(SpiroError::InvalidParameter(format!(
                "color {name} channel must be in [0,1] (got {c})"
            )));
        }
    }

    Ok(())
}

pub fn validate_step(step_deg: u32) -> Result<()> {
    if step_deg == 0 {
        return Err(SpiroError::InvalidParameter(
            "step must be non-zero or the curve never closes".into(),
        ));
    }
    Ok(())
}

/// `true` when l lies in the recommended open range (0,1).
pub fn l_in_recommended_range(l: f64) -> bool {
    l > 0.0 && l < 1.0
}
