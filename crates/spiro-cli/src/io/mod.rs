// crates/spiro-cli/src/io/mod.rs

pub mod canvas;
pub mod export;
pub mod jsonl;
pub mod png_out;
pub mod svg_out;
