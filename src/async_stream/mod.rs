//! Async chunking over `futures_io::AsyncRead`.
//!
//! Runtime-agnostic: tokio readers can be adapted with
//! `tokio_util::compat`, and async-std or smol readers work as is.
//!
//! - [`chunk_async`] - Creates a [`ChunkStream`] from an async reader
//!
//! Requires the `async-io` feature.

mod stream;

pub use stream::{ChunkStream, chunk_async};
