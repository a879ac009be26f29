//! Async stream adapter.
//!
//! Mirrors [`StreamChunker`](crate::StreamChunker): a window of at most
//! `max_size` bytes is refilled from the reader before every cut, so the
//! chunks match a one-shot [`Chunker`](crate::Chunker) run.

use std::io::ErrorKind;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::BytesMut;
use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::cdc::FastCdc;
use crate::chunk::ChunkData;
use crate::config::ChunkConfig;
use crate::error::ChunkError;
use crate::chunker::READ_BUFFER_SIZE;
use crate::hash;

pin_project! {
    /// A stream that yields chunks from an async reader.
    ///
    /// Created by [`chunk_async`]. Yields `Result<ChunkData, ChunkError>`;
    /// an I/O error is yielded once and ends the stream.
    #[derive(Debug)]
    pub struct ChunkStream<R> {
        #[pin]
        reader: R,
        config: ChunkConfig,
        cdc: FastCdc,
        window: BytesMut,
        read_buf: Box<[u8]>,
        offset: u64,
        eof: bool,
        finished: bool,
    }
}

impl<R> ChunkStream<R> {
    /// Returns the stream offset of the next chunk.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the configuration used by this stream.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Consumes the stream and returns the reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: AsyncRead> Stream for ChunkStream<R> {
    type Item = Result<ChunkData, ChunkError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }

        let max = this.cdc.max_size() as usize;

        // Fill the window up to max_size or until the reader is drained
        while !*this.eof && this.window.len() < max {
            let want = (max - this.window.len()).min(this.read_buf.len());

            let buf = &mut this.read_buf[..want];
            let result = match this.reader.as_mut().poll_read(cx, buf) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(result) => result,
            };

            match result {
                Ok(0) => {
                    *this.eof = true;
                    log::trace!(
                        "reader drained at offset {}",
                        *this.offset + this.window.len() as u64
                    );
                }
                Ok(n) => this.window.extend_from_slice(&this.read_buf[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(e.into())));
                }
            }
        }

        if this.window.is_empty() {
            *this.finished = true;
            return Poll::Ready(None);
        }

        let size = this.window.len() as u32;
        let (hash, len) = this.cdc.cut(&this.window[..], 0, size, *this.eof);
        debug_assert!(len > 0);

        let data = this.window.split_to(len as usize).freeze();
        let digest = hash::digest(this.config.hash_config(), &data);
        let offset = *this.offset;
        *this.offset += u64::from(len);

        Poll::Ready(Some(Ok(ChunkData {
            data,
            offset,
            hash,
            digest,
        })))
    }
}

/// Creates a chunk stream from an async reader.
///
/// Uses `futures_io::AsyncRead`, so it works with any async runtime. Tokio
/// readers can be converted with `tokio_util::compat`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use cutpoint::{chunk_async, ChunkConfig};
///
/// let file = tokio::fs::File::open("file").await?;
/// let stream = chunk_async(file.compat(), ChunkConfig::default())?;
/// ```
///
/// # Errors
///
/// Returns the validation error if `config` is invalid.
pub fn chunk_async<R: AsyncRead>(
    reader: R,
    config: ChunkConfig,
) -> Result<ChunkStream<R>, ChunkError> {
    let cdc = FastCdc::new(&config)?;
    let max = config.max_size() as usize;

    Ok(ChunkStream {
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
