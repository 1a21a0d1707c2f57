pub mod ops;
pub mod recorder;
pub mod sink;
