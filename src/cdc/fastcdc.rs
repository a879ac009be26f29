//! FastCDC cut-point finder.
//!
//! This module implements the boundary search of the FastCDC algorithm using
//! a 32-bit gear hash.
//!
//! # Algorithm Overview
//!
//! For every candidate position the gear hash is updated in O(1):
//!
//! ```text
//! hash = (hash >> 1) + GEAR[byte]
//! ```
//!
//! A position is a cut point when `hash & mask == 0`. The search runs in
//! two phases (normalized chunking):
//!
//! - from `min_size` up to the normal point, test the harder mask `mask_s`
//!   (`bits + 1` low bits must vanish), which suppresses short chunks
//! - from the normal point up to `max_size`, test the easier mask `mask_l`
//!   (`bits - 1` low bits), which suppresses long chunks
//!
//! where `bits = log2_round(avg_size)`.
//!
//! # References
//!
//! Based on "FastCDC: A Fast and Efficient Content-Defined Chunking Approach for Data Deduplication"
//! by Wen Xia et al., USENIX ATC 2016.

use super::gear::GEAR;
use crate::config::ChunkConfig;
use crate::error::ChunkError;
use crate::util::{center_size, log2_round, mask};

/// Validated boundary parameters and the masks derived from them.
///
/// Immutable once built; [`FastCdc::cut`] holds no state between calls, so
/// one instance can serve any number of buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FastCdc {
    /// Minimum chunk size.
    min_size: u32,

    /// Average/target chunk size.
    avg_size: u32,

    /// Maximum chunk size.
    max_size: u32,

    /// Mask tested before the normal point (more bits, harder to match).
    mask_s: u32,

    /// Mask tested after the normal point (fewer bits, easier to match).
    mask_l: u32,
}

impl FastCdc {
    /// Validates `config` and derives the two masks from its average size.
    pub(crate) fn new(config: &ChunkConfig) -> Result<Self, ChunkError> {
        config.validate()?;

        let bits = log2_round(config.avg_size());
        let mask_s = mask(bits + 1)?;
        let mask_l = mask(bits - 1)?;

        log::debug!(
            "fastcdc parameters: min={} avg={} max={} bits={} mask_s={:#x} mask_l={:#x}",
            config.min_size(),
            config.avg_size(),
            config.max_size(),
            bits,
            mask_s,
            mask_l
        );

        Ok(Self {
            min_size: config.min_size(),
            avg_size: config.avg_size(),
            max_size: config.max_size(),
            mask_s,
            mask_l,
        })
    }

    /// Finds the next cut point in `source[offset..offset + size]`.
    ///
    /// Returns `(hash, length)`. A length of 0 means the window is too short
    /// to decide and more data is needed; that only happens when `eof` is
    /// false. Otherwise the length is in `min_size..=max_size`, or, with
    /// `eof`, may be the whole remainder when fewer than `min_size` bytes
    /// are left.
    ///
    /// The caller guarantees `offset + size <= source.len()`.
    pub(crate) fn cut(&self, source: &[u8], offset: u32, size: u32, eof: bool) -> (u32, u32) {
        if size <= self.min_size {
            return if eof { (0, size) } else { (0, 0) };
        }

        let size = size.min(self.max_size);
        let start = offset as usize;
        let window = &source[start..start + size as usize];
        let normal = center_size(self.avg_size, self.min_size, size) as usize;

        let mut hash = 0u32;
        let mut pos = self.min_size as usize;

        while pos < normal {
            hash = (hash >> 1).wrapping_add(GEAR[window[pos] as usize]);
            pos += 1;
            if hash & self.mask_s == 0 {
                return (hash, pos as u32);
            }
        }

        while pos < window.len() {
            hash = (hash >> 1).wrapping_add(GEAR[window[pos] as usize]);
            pos += 1;
            if hash & self.mask_l == 0 {
                return (hash, pos as u32);
            }
        }

        // Forced cut at the end of input or at the hard cap.
        if eof || size == self.max_size {
            (hash, size)
        } else {
            log::trace!(
                "no cut point in {} bytes at offset {}, waiting for more data",
                size,
                offset
            );
            (hash, 0)
        }
    }

    /// Returns the minimum chunk size.
    pub(crate) fn min_size(&self) -> u32 {
        self.min_size
    }

    /// Returns the maximum chunk size.
    pub(crate) fn max_size(&self) -> u32 {
        self.max_size
    }
}
