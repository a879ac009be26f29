//! The Chunk record - one cut over an in-memory buffer.

use std::fmt;
use std::ops::Range;

/// A content-defined chunk of a buffer.
///
/// `hash` is the gear hash at the cut point. It depends only on the bytes
/// scanned before the cut and is stable across runs and implementations,
/// but it is not a content digest: different chunks can share it (every
/// all-zero chunk does).
///
/// `offset` is relative to the buffer handed to the
/// [`Chunker`](crate::Chunker) that produced the chunk.
///
/// # Example
///
/// ```
/// use cutpoint::Chunk;
///
/// let chunk = Chunk::new(0xdead_beef, 1024, 512);
/// assert_eq!(chunk.end(), 1536);
/// assert_eq!(chunk.range(), 1024..1536);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk {
    /// Gear hash value at the cut point.
    pub hash: u32,

    /// Start of the chunk within the source buffer.
    pub offset: u32,

    /// Length of the chunk in bytes.
    pub length: u32,
}

impl Chunk {
    /// Creates a new chunk record.
    pub const fn new(hash: u32, offset: u32, length: u32) -> Self {
        Self {
            hash,
            offset,
            length,
        }
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u32 {
        self.offset + self.length
    }

    /// Returns the chunk as a byte range of the source buffer.
    pub fn range(&self) -> Range<usize> {
        self.offset as usize..self.end() as usize
    }

    /// Returns the bytes of this chunk within `source`.
    ///
    /// Returns `None` if `source` is too short to contain the chunk.
    pub fn slice<'s>(&self, source: &'s [u8]) -> Option<&'s [u8]> {
        source.get(self.range())
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk({} bytes @ {}, hash={:08x})",
            self.length, self.offset, self.hash
        )
    }
}
