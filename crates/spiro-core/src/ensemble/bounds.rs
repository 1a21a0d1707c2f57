// crates/spiro-core/src/ensemble/bounds.rs

use crate::error::{Result, SpiroError};

/// Canvas size the generator samples against.
pub trait BoundsProvider {
    fn current_width(&self) -> u32;
    fn current_height(&self) -> u32;
}

/// Fixed canvas size. Width and height are always > 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    width: u32,
    height: u32,
}

impl Bounds {
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(SpiroError::BoundaryViolation(format!(
                "canvas must have positive size (got {width}x{height})"
            )));
        }
        let w = u32::try_from(width)
            .map_err(|_| SpiroError::BoundaryViolation(format!("width {width} too large")))?;
        let h = u32::try_from(height)
            .map_err(|_| SpiroError::BoundaryViolation(format!("height {height} too large")))?;
        Ok(Self { width: w, height: h })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl BoundsProvider for Bounds {
    fn current_width(&self) -> u32 {
        self.width
    }

    fn current_height(&self) -> u32 {
        self.height
    }
}

impl<B: BoundsProvider + ?Sized> BoundsProvider for &B {
    fn current_width(&self) -> u32 {
        (**self).current_width()
    }

    fn current_height(&self) -> u32 {
        (**self).current_height()
    }
}
