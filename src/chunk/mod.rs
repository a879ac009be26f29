//! Chunk types.
//!
//! - [`Chunk`] - Cut point record (gear hash, offset, length) over a buffer
//! - [`ChunkData`] - Chunk bytes and absolute stream offset from a reader
//! - [`ChunkDigest`] - 32-byte BLAKE3 digest of chunk content

mod data;
mod digest;
mod record;

pub use data::ChunkData;
pub use digest::ChunkDigest;
pub use record::Chunk;
