// src/output/mod.rs

//! Output file handling: captured blocks in execution order, with blank-line
//! separators around grouping passes.

pub mod writer;

pub use writer::{OutputWriter, PASS_SEPARATOR};
