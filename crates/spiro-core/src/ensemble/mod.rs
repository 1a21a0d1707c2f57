pub mod bounds;
pub mod engine;
pub mod random;
