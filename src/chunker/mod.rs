//! Chunking front ends.
//!
//! - [`Chunker`] - single-pass producer over a caller-owned buffer
//! - [`StreamChunker`] - iterator over any [`std::io::Read`]

mod engine;
mod stream;

pub use engine::{Chunker, Chunks};
pub use stream::StreamChunker;

#[cfg(feature = "async-io")]
pub(crate) use stream::READ_BUFFER_SIZE;
