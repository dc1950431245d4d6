// src/segment/mod.rs

//! Phrase segmentation.
//!
//! - [`phrase`] holds the word list and slices it into fixed-size chunks.
//! - [`pairs`] turns any chunk sequence into consecutive `(i, i + 1)` pairs.
//!
//! Everything here is lazy and borrows from the [`Phrase`]; nothing is
//! copied until a command line is rendered.

pub mod pairs;
pub mod phrase;

pub use pairs::{consecutive_pairs, ChunkPair, ConsecutivePairs};
pub use phrase::{Chunk, Chunks, Phrase};
