//! Chunk size bounds and digest settings.
//!
//! The accepted ranges are exported as constants so callers can check
//! user input before building a config:
//!
//! - [`ChunkConfig`] - Controls chunk size boundaries and digest computation
//! - [`HashConfig`] - Specifies whether to compute BLAKE3 digests
//!
//! # Example
//!
//! ```
//! use cutpoint::{ChunkConfig, HashConfig};
//!
//! // 8 KiB / 16 KiB / 32 KiB
//! let config = ChunkConfig::new(8192, 16384, 32768)?;
//!
//! // Skip digests
//! let config = config.with_hash_config(HashConfig::disabled());
//!
//! # Ok::<(), cutpoint::ChunkError>(())
//! ```

use crate::error::ChunkError;

/// Smallest acceptable value for the minimum chunk size.
pub const MINIMUM_MIN: u32 = 64;

/// Largest acceptable value for the minimum chunk size.
pub const MINIMUM_MAX: u32 = 67_108_864;

/// Smallest acceptable value for the average chunk size.
pub const AVERAGE_MIN: u32 = 256;

/// Largest acceptable value for the average chunk size.
pub const AVERAGE_MAX: u32 = 268_435_456;

/// Smallest acceptable value for the maximum chunk size.
pub const MAXIMUM_MIN: u32 = 1024;

/// Largest acceptable value for the maximum chunk size.
pub const MAXIMUM_MAX: u32 = 1_073_741_824;

/// Minimum chunk size used by [`ChunkConfig::default`] (4 KiB).
pub const DEFAULT_MIN_CHUNK_SIZE: u32 = 4 * 1024;

/// Average chunk size used by [`ChunkConfig::default`] (16 KiB).
pub const DEFAULT_AVG_CHUNK_SIZE: u32 = 16 * 1024;

/// Maximum chunk size used by [`ChunkConfig::default`] (64 KiB).
pub const DEFAULT_MAX_CHUNK_SIZE: u32 = 64 * 1024;

/// Size boundaries for content-defined chunking.
///
/// - Minimum chunk size (`min_size`) - No cut is searched for before this point
/// - Average chunk size (`avg_size`) - Target size; selects the hash masks
/// - Maximum chunk size (`max_size`) - A cut is forced here
///
/// # Ranges
///
/// - `min_size` in [`MINIMUM_MIN`]`..=`[`MINIMUM_MAX`]
/// - `avg_size` in [`AVERAGE_MIN`]`..=`[`AVERAGE_MAX`]
/// - `max_size` in [`MAXIMUM_MIN`]`..=`[`MAXIMUM_MAX`]
/// - Ordered: `min_size <= avg_size <= max_size`
///
/// Sizes need not be powers of two; the average is rounded to the nearest
/// power of two when the masks are derived.
///
/// # Example
///
/// ```
/// use cutpoint::ChunkConfig;
///
/// let config = ChunkConfig::new(16384, 32768, 65536)?;
/// assert_eq!(config.avg_size(), 32768);
///
/// // Builders do not validate
/// let config = ChunkConfig::default().with_min_size(8);
/// assert!(config.validate().is_err());
/// # Ok::<(), cutpoint::ChunkError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkConfig {
    /// No cut before this many bytes.
    min_size: u32,

    /// Target size; selects the masks.
    avg_size: u32,

    /// Hard cap on chunk length.
    max_size: u32,

    /// Configuration for chunk digests.
    hash_config: HashConfig,
}

impl ChunkConfig {
    /// Builds a validated configuration with digests enabled.
    ///
    /// # Errors
    ///
    /// Checks, in order, the range of `min_size`, `avg_size` and `max_size`,
    /// then `min_size <= avg_size` and `avg_size <= max_size`, returning the
    /// matching [`ChunkError`] variant for the first violation.
    ///
    /// # Example
    ///
    /// ```
    /// use cutpoint::{ChunkConfig, ChunkError};
    ///
    /// assert!(ChunkConfig::new(8192, 16384, 32768).is_ok());
    /// assert!(matches!(
    ///     ChunkConfig::new(63, 256, 1024),
    ///     Err(ChunkError::MinSizeOutOfRange { value: 63 })
    /// ));
    /// ```
    pub fn new(min_size: u32, avg_size: u32, max_size: u32) -> Result<Self, ChunkError> {
        if !(MINIMUM_MIN..=MINIMUM_MAX).contains(&min_size) {
            return Err(ChunkError::MinSizeOutOfRange { value: min_size });
        }

        if !(AVERAGE_MIN..=AVERAGE_MAX).contains(&avg_size) {
            return Err(ChunkError::AvgSizeOutOfRange { value: avg_size });
        }

        if !(MAXIMUM_MIN..=MAXIMUM_MAX).contains(&max_size) {
            return Err(ChunkError::MaxSizeOutOfRange { value: max_size });
        }

        if min_size > avg_size {
            return Err(ChunkError::MinAboveAvg {
                min: min_size,
                avg: avg_size,
            });
        }

        if avg_size > max_size {
            return Err(ChunkError::AvgAboveMax {
                avg: avg_size,
                max: max_size,
            });
        }

        Ok(Self {
            min_size,
            avg_size,
            max_size,
            hash_config: HashConfig::default(),
        })
    }

    /// Replaces `min_size` without validating.
    ///
    /// Chunkers validate the config they are given; [`ChunkConfig::validate`]
    /// checks it earlier.
    pub fn with_min_size(mut self, size: u32) -> Self {
        self.min_size = size;
        self
    }

    /// Replaces `avg_size` without validating.
    pub fn with_avg_size(mut self, size: u32) -> Self {
        self.avg_size = size;
        self
    }

    /// Replaces `max_size` without validating.
    pub fn with_max_size(mut self, size: u32) -> Self {
        self.max_size = size;
        self
    }

    /// Sets the digest configuration.
    pub fn with_hash_config(mut self, config: HashConfig) -> Self {
        self.hash_config = config;
        self
    }

    /// Returns the minimum chunk size.
    pub fn min_size(&self) -> u32 {
        self.min_size
    }

    /// Returns the average chunk size.
    pub fn avg_size(&self) -> u32 {
        self.avg_size
    }

    /// Returns the maximum chunk size.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// Returns the digest configuration.
    pub fn hash_config(&self) -> &HashConfig {
        &self.hash_config
    }

    /// Checks the bounds as [`ChunkConfig::new`] does.
    pub fn validate(&self) -> Result<(), ChunkError> {
        Self::new(self.min_size, self.avg_size, self.max_size).map(|_| ())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_CHUNK_SIZE,
            avg_size: DEFAULT_AVG_CHUNK_SIZE,
            max_size: DEFAULT_MAX_CHUNK_SIZE,
            hash_config: HashConfig::default(),
        }
    }
}

/// Configuration for chunk digests.
///
/// Controls whether the reader adapters compute a BLAKE3 digest of every
/// chunk they yield. Enabled by default; has no effect without the
/// `hash-blake3` feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashConfig {
    /// Whether to compute BLAKE3 digests for chunks.
    pub enabled: bool,
}

impl HashConfig {
    /// Creates a new digest configuration.
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enables digests.
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Disables digests.
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
