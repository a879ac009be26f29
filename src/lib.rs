//! cutpoint
//!
//! FastCDC content-defined chunking for Rust.
//!
//! `cutpoint` splits a byte sequence into variable-size chunks whose
//! boundaries depend on local content, using a 32-bit gear rolling hash
//! with normalized chunking. An insertion or deletion only moves the
//! boundaries near the edit, which makes the chunks useful for:
//!
//! - deduplication
//! - delta synchronization
//! - content-addressable storage
//!
//! The crate intentionally:
//! - does NOT manage files or paths
//! - does NOT persist chunks
//! - does NOT spawn threads
//!
//! # In-memory
//!
//! ```
//! use cutpoint::Chunker;
//!
//! let data = vec![0u8; 10240];
//! let chunker = Chunker::new(&data, 64, 256, 1024)?;
//!
//! for chunk in chunker {
//!     println!("{}", chunk);
//! }
//! # Ok::<(), cutpoint::ChunkError>(())
//! ```
//!
//! # Readers
//!
//! ```no_run
//! use std::fs::File;
//! use cutpoint::{ChunkConfig, ChunkError, StreamChunker};
//!
//! fn main() -> Result<(), ChunkError> {
//!     let file = File::open("data.bin")?;
//!
//!     for chunk in StreamChunker::new(file, ChunkConfig::default())? {
//!         let chunk = chunk?;
//!         println!("chunk {} bytes @ {}", chunk.len(), chunk.offset);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use cutpoint::{chunk_async, ChunkConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), cutpoint::ChunkError> {
//!     let mut stream = chunk_async(reader, ChunkConfig::default())?;
//!
//!     while let Some(chunk) = stream.next().await {
//!         let chunk = chunk?;
//!         println!("chunk {}", chunk.len());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod chunker;
mod config;
mod error;
mod util;

mod cdc; // internal fastcdc impl
mod hash; // internal blake3 impl

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface
//

pub use chunk::{Chunk, ChunkData, ChunkDigest};
pub use chunker::{Chunker, Chunks, StreamChunker};
pub use config::{
    AVERAGE_MAX, AVERAGE_MIN, ChunkConfig, DEFAULT_AVG_CHUNK_SIZE, DEFAULT_MAX_CHUNK_SIZE,
    DEFAULT_MIN_CHUNK_SIZE, HashConfig, MAXIMUM_MAX, MAXIMUM_MIN, MINIMUM_MAX, MINIMUM_MIN,
};
pub use error::ChunkError;
pub use util::{ceil_div, center_size, log2_round, mask};

#[cfg(feature = "async-io")]
pub use async_stream::{ChunkStream, chunk_async};
