// crates/spiro-core/src/config.rs

use std::time::Duration;

use crate::ensemble::bounds::Bounds;
use crate::error::{Result, SpiroError};
use crate::validate::validate_step;

pub const DEFAULT_ENSEMBLE_SIZE: usize = 4;
pub const DEFAULT_STEP_DEG: u32 = 5;
pub const DEFAULT_TICK_MS: u64 = 10;

/// 80% x 75% of a 1920x1080 screen.
pub const DEFAULT_WIDTH: u32 = 1536;
pub const DEFAULT_HEIGHT: u32 = 810;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimatorConfig {
    pub ensemble_size: usize,
    pub step_deg: u32,
    pub tick_interval: Duration,
    pub width: u32,
    pub height: u32,
    pub seed: u64,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            ensemble_size: DEFAULT_ENSEMBLE_SIZE,
            step_deg: DEFAULT_STEP_DEG,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: 0x5EED_5EED_5EED_5EED,
        }
    }
}

impl AnimatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.ensemble_size == 0 {
            return Err(SpiroError::InvalidParameter(
                "ensemble size must be non-zero".into(),
            ));
        }
        validate_step(self.step_deg)?;
        self.bounds().map(|_| ())
    }

    pub fn bounds(&self) -> Result<Bounds> {
        Bounds::new(self.width as i64, self.height as i64)
    }
}
