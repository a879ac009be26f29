//! The ChunkData type - a chunk read from a stream, with its bytes.

use bytes::Bytes;
use std::fmt;
use std::ops::Range;

use super::ChunkDigest;

/// A content-defined chunk yielded by the reader adapters.
///
/// Unlike [`Chunk`](crate::Chunk), which only points into a caller-owned
/// buffer, `ChunkData` owns its bytes and carries an absolute offset in the
/// stream (which may exceed 4 GiB).
///
/// # Example
///
/// ```
/// use cutpoint::ChunkData;
/// use bytes::Bytes;
///
/// let chunk = ChunkData {
///     data: Bytes::from_static(b"hello world"),
///     offset: 4096,
///     hash: 0,
///     digest: None,
/// };
///
/// assert_eq!(chunk.len(), 11);
/// assert_eq!(chunk.range(), 4096..4107);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkData {
    /// The chunk bytes.
    pub data: Bytes,

    /// Start of the chunk in the stream.
    pub offset: u64,

    /// Gear hash value at the cut point.
    pub hash: u32,

    /// BLAKE3 digest of `data` (if computed).
    pub digest: Option<ChunkDigest>,
}

impl ChunkData {
    /// Returns the length of the chunk data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the end offset in the stream (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    /// Returns the chunk as a range of stream offsets.
    pub fn range(&self) -> Range<u64> {
        self.offset..self.end()
    }

    /// Consumes the chunk and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl fmt::Display for ChunkData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk({} bytes @ {}, hash={:08x}",
            self.len(),
            self.offset,
            self.hash
        )?;
        if let Some(digest) = self.digest {
            write!(f, ", digest={}", digest)?;
        }
        write!(f, ")")
    }
}
