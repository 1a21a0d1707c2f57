pub mod error;
pub mod validate;

pub mod config;
pub mod control;
pub mod curve;
pub mod ensemble;
pub mod math;
pub mod render;
pub mod scheduler;

pub use crate::curve::curve::Curve;
pub use crate::curve::spec::{CurveSpec, Point, Rgb};
pub use crate::ensemble::engine::Ensemble;
pub use crate::error::{Result, SpiroError};
pub use crate::render::sink::{CurveId, RenderSink};
