//! Core chunking engine - Chunker over an in-memory buffer.
//!
//! This module implements the chunk sequence producer. It provides:
//!
//! - [`Chunker`] - Validated parameters, a borrowed source buffer and a cursor
//! - [`Chunks`] - Forward-only iterator that advances the chunker's cursor
//!
//! # Example
//!
//! ```
//! use cutpoint::Chunker;
//!
//! let data = vec![0u8; 10240];
//! let mut chunker = Chunker::new(&data, 64, 256, 1024)?;
//!
//! for chunk in chunker.chunks() {
//!     println!("offset={} len={} hash={}", chunk.offset, chunk.length, chunk.hash);
//! }
//! # Ok::<(), cutpoint::ChunkError>(())
//! ```

use std::iter::FusedIterator;

use crate::cdc::FastCdc;
use crate::chunk::Chunk;
use crate::config::ChunkConfig;
use crate::error::ChunkError;

/// Splits one buffer into content-defined chunks.
///
/// `Chunker` borrows its source for its whole lifetime and owns a cursor
/// (`bytes_processed`, `bytes_remaining`). Each produced chunk advances the
/// cursor, so the chunk sequence is **single-pass**: iterating again, via
/// [`Chunker::chunks`] or the chunker's own [`Iterator`] impl, resumes where
/// the cursor stopped. It never restarts from the beginning; build a new
/// chunker for that.
///
/// # Incremental input
///
/// With `eof = false` the buffer is treated as a prefix of a longer stream.
/// The sequence then stops early at the first window that cannot be decided
/// without more bytes: a tail no longer than `min_size`, or a tail shorter
/// than `max_size` that contains no cut point. The caller resumes at
/// [`Chunker::bytes_processed`] with a longer buffer (or with `eof = true`
/// once the stream has ended) and gets exactly the cuts a single pass over
/// the whole stream would give.
///
/// # Example
///
/// ```
/// use cutpoint::Chunker;
///
/// let data = vec![0u8; 2500];
///
/// // Not the end of the stream: the 452-byte tail is left undecided.
/// let mut chunker = Chunker::with_eof(&data, 64, 256, 1024, false)?;
/// let lengths: Vec<u32> = chunker.chunks().map(|c| c.length).collect();
/// assert_eq!(lengths, vec![1024, 1024]);
/// assert_eq!(chunker.bytes_processed(), 2048);
/// assert_eq!(chunker.bytes_remaining(), 452);
/// # Ok::<(), cutpoint::ChunkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Chunker<'a> {
    source: &'a [u8],
    cdc: FastCdc,
    config: ChunkConfig,
    eof: bool,
    bytes_processed: u32,
    bytes_remaining: u32,
}

impl<'a> Chunker<'a> {
    /// Creates a chunker over a complete buffer (`eof = true`).
    ///
    /// # Errors
    ///
    /// Fails, in this order, on an empty source, a source longer than
    /// `u32::MAX` bytes, sizes outside their ranges, or
    /// `min_size <= avg_size <= max_size` not holding.
    pub fn new(
        source: &'a [u8],
        min_size: u32,
        avg_size: u32,
        max_size: u32,
    ) -> Result<Self, ChunkError> {
        Self::with_eof(source, min_size, avg_size, max_size, true)
    }

    /// Creates a chunker, stating whether `source` ends the stream.
    ///
    /// See [`Chunker::new`] for the validation rules.
    pub fn with_eof(
        source: &'a [u8],
        min_size: u32,
        avg_size: u32,
        max_size: u32,
        eof: bool,
    ) -> Result<Self, ChunkError> {
        let config = ChunkConfig::default()
            .with_min_size(min_size)
            .with_avg_size(avg_size)
            .with_max_size(max_size);
        Self::with_config(source, &config, eof)
    }

    /// Creates a chunker from a [`ChunkConfig`].
    ///
    /// The configuration is validated again, so one assembled with the
    /// unchecked builders is rejected here.
    pub fn with_config(
        source: &'a [u8],
        config: &ChunkConfig,
        eof: bool,
    ) -> Result<Self, ChunkError> {
        if source.is_empty() {
            return Err(ChunkError::EmptySource);
        }
        let len = u32::try_from(source.len())
            .map_err(|_| ChunkError::SourceTooLarge { len: source.len() })?;

        let cdc = FastCdc::new(config)?;
        log::debug!("chunker over {} bytes, eof={}", len, eof);

        Ok(Self {
            source,
            cdc,
            config: *config,
            eof,
            bytes_processed: 0,
            bytes_remaining: len,
        })
    }

    /// Finds the next cut point starting at `offset`, looking at no more
    /// than `size` bytes.
    ///
    /// Returns `(hash, length)`; a length of 0 means "undecided, more data
    /// needed" and only occurs when this chunker was built with
    /// `eof = false`. `size` is clamped to the bytes available after
    /// `offset`. The cursor is not touched.
    ///
    /// ```
    /// use cutpoint::Chunker;
    ///
    /// let data = vec![0u8; 4096];
    /// let chunker = Chunker::new(&data, 64, 256, 1024)?;
    /// assert_eq!(chunker.cut(0, 4096), (3_106_636_015, 1024));
    /// assert_eq!(chunker.cut(4064, 32), (0, 32));
    /// # Ok::<(), cutpoint::ChunkError>(())
    /// ```
    pub fn cut(&self, offset: u32, size: u32) -> (u32, u32) {
        let available = (self.source.len() as u32).saturating_sub(offset);
        self.cdc
            .cut(self.source, offset, size.min(available), self.eof)
    }

    /// Returns an iterator over the chunks not yet produced.
    ///
    /// The iterator borrows the chunker and advances its cursor; dropping it
    /// early leaves the cursor after the last chunk taken.
    pub fn chunks(&mut self) -> Chunks<'_, 'a> {
        Chunks { chunker: self }
    }

    /// Returns the number of bytes already emitted as chunks.
    pub fn bytes_processed(&self) -> u32 {
        self.bytes_processed
    }

    /// Returns the number of bytes not yet emitted.
    pub fn bytes_remaining(&self) -> u32 {
        self.bytes_remaining
    }

    /// Returns whether the source was declared to end the stream.
    pub fn eof(&self) -> bool {
        self.eof
    }

    /// Returns the configuration used by this chunker.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Returns the source buffer.
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Produces the next chunk and advances the cursor.
    fn next_chunk(&mut self) -> Option<Chunk> {
        if self.bytes_remaining == 0 {
            return None;
        }

        let (hash, length) = self.cut(self.bytes_processed, self.bytes_remaining);
        if length == 0 {
            return None;
        }

        let chunk = Chunk::new(hash, self.bytes_processed, length);
        self.bytes_processed += length;
        self.bytes_remaining -= length;
        Some(chunk)
    }
}

impl Iterator for Chunker<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        self.next_chunk()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes_remaining as usize;
        let min = self.cdc.min_size().max(1) as usize;
        let lower = if self.eof {
            remaining.div_ceil(self.cdc.max_size() as usize)
        } else {
            0
        };
        (lower, Some(remaining.div_ceil(min)))
    }
}

// Once `next` returns `None` the cursor no longer moves.
impl FusedIterator for Chunker<'_> {}

/// Forward-only iterator over the remaining chunks of a [`Chunker`].
///
/// Created by [`Chunker::chunks`].
#[derive(Debug)]
pub struct Chunks<'c, 'a> {
    chunker: &'c mut Chunker<'a>,
}

impl Iterator for Chunks<'_, '_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        self.chunker.next_chunk()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunker.size_hint()
    }
}

impl FusedIterator for Chunks<'_, '_> {}
