//! Reader adapter - StreamChunker over any [`std::io::Read`].
//!
//! The adapter keeps a window of at most `max_size` bytes. Every cut is
//! decided either on a full window (a cut point or the `max_size` cap is
//! always inside it) or after the reader reported end of stream, so the
//! boundaries match a [`Chunker`](crate::Chunker) run over the whole input.
//!
//! # Example
//!
//! ```no_run
//! use std::fs::File;
//! use cutpoint::{ChunkConfig, StreamChunker};
//!
//! let file = File::open("data.bin")?;
//! let config = ChunkConfig::new(8192, 16384, 32768)?;
//!
//! for chunk in StreamChunker::new(file, config)? {
//!     let chunk = chunk?;
//!     println!("{}", chunk);
//! }
//! # Ok::<(), cutpoint::ChunkError>(())
//! ```

use std::io::{ErrorKind, Read};

use bytes::BytesMut;

use crate::cdc::FastCdc;
use crate::chunk::ChunkData;
use crate::config::ChunkConfig;
use crate::error::ChunkError;
use crate::hash;

/// Upper bound on the bytes requested from the reader per `read` call.
pub(crate) const READ_BUFFER_SIZE: usize = 64 * 1024;

/// An iterator that yields chunks read from a reader.
///
/// Yields `Result<ChunkData, ChunkError>`. An I/O error is yielded once and
/// ends the iteration; reads interrupted with [`ErrorKind::Interrupted`] are
/// retried.
#[derive(Debug)]
pub struct StreamChunker<R> {
    reader: R,
    config: ChunkConfig,
    cdc: FastCdc,
    window: BytesMut,
    read_buf: Box<[u8]>,
    offset: u64,
    eof: bool,
    finished: bool,
}

impl<R: Read> StreamChunker<R> {
    /// Creates a chunk iterator over `reader`.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is invalid.
    pub fn new(reader: R, config: ChunkConfig) -> Result<Self, ChunkError> {
        let cdc = FastCdc::new(&config)?;
        let max = config.max_size() as usize;

        Ok(Self {
            reader,
            config,
            cdc,
            window: BytesMut::with_capacity(max),
            read_buf: vec![0u8; max.min(READ_BUFFER_SIZE)].into_boxed_slice(),
            offset: 0,
            eof: false,
            finished: false,
        })
    }

    /// Returns the stream offset of the next chunk.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the configuration used by this iterator.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Consumes the iterator and returns the reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Reads until the window holds `max_size` bytes or the reader is drained.
    fn fill_window(&mut self) -> Result<(), std::io::Error> {
        let max = self.cdc.max_size() as usize;

        while !self.eof && self.window.len() < max {
            let want = (max - self.window.len()).min(self.read_buf.len());

            match self.reader.read(&mut self.read_buf[..want]) {
                Ok(0) => {
                    self.eof = true;
                    log::trace!(
                        "reader drained at offset {}",
                        self.offset + self.window.len() as u64
                    );
                }
                Ok(n) => self.window.extend_from_slice(&self.read_buf[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    /// Splits the first `len` window bytes off as a chunk.
    fn emit_chunk(&mut self, hash: u32, len: u32) -> ChunkData {
        let data = self.window.split_to(len as usize).freeze();
        let digest = hash::digest(self.config.hash_config(), &data);
        let offset = self.offset;
        self.offset += u64::from(len);

        ChunkData {
            data,
            offset,
            hash,
            digest,
        }
    }
}

impl<R: Read> Iterator for StreamChunker<R> {
    type Item = Result<ChunkData, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if let Err(e) = self.fill_window() {
            self.finished = true;
            return Some(Err(e.into()));
        }

        if self.window.is_empty() {
            self.finished = true;
            return None;
        }

        // A full window or a drained reader always yields a decided cut.
        let size = self.window.len() as u32;
        let (hash, len) = self.cdc.cut(&self.window, 0, size, self.eof);
        debug_assert!(len > 0);

        Some(Ok(self.emit_chunk(hash, len)))
    }
}
