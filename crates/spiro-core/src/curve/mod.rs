pub mod curve;
pub mod spec;
pub mod state;
