//! Chunk content digests.
//!
//! Digests are only computed by the reader adapters, and only when the
//! `hash-blake3` feature is on and [`HashConfig`] asks for them.
//!
//! - [`Blake3Hasher`] - BLAKE3 implementation (requires `hash-blake3` feature)

use crate::chunk::ChunkDigest;
use crate::config::HashConfig;

#[cfg(feature = "hash-blake3")]
mod blake3;

#[cfg(feature = "hash-blake3")]
pub(crate) use blake3::Blake3Hasher;

/// Digest of `data` according to `config`.
#[cfg(feature = "hash-blake3")]
pub(crate) fn digest(config: &HashConfig, data: &[u8]) -> Option<ChunkDigest> {
    config.enabled.then(|| Blake3Hasher::hash(data))
}

/// Digest of `data` according to `config` (always `None` without `hash-blake3`).
#[cfg(not(feature = "hash-blake3"))]
pub(crate) fn digest(_config: &HashConfig, _data: &[u8]) -> Option<ChunkDigest> {
    None
}
