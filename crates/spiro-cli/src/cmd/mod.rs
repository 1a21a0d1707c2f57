// crates/spiro-cli/src/cmd/mod.rs

pub mod animate;
pub mod draw;
