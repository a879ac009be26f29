//! BLAKE3-based chunk digests.

use crate::chunk::ChunkDigest;

/// Computes BLAKE3 digests of chunk bytes.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Blake3Hasher;

impl Blake3Hasher {
    /// Digests `data` in one shot.
    pub(crate) fn hash(data: &[u8]) -> ChunkDigest {
        ChunkDigest::new(blake3::hash(data).into())
    }
}
