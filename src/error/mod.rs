//! Error types for cutpoint.

use std::fmt;

use crate::config::{AVERAGE_MAX, AVERAGE_MIN, MAXIMUM_MAX, MAXIMUM_MIN, MINIMUM_MAX, MINIMUM_MIN};

/// Errors that can occur while configuring a chunker or reading its input.
#[derive(Debug)]
pub enum ChunkError {
    /// An I/O error occurred while reading input data.
    Io(std::io::Error),

    /// The source buffer was empty.
    EmptySource,

    /// The source buffer is longer than a 32-bit offset can address.
    SourceTooLarge {
        /// Length of the rejected buffer.
        len: usize,
    },

    /// The minimum chunk size is outside `MINIMUM_MIN..=MINIMUM_MAX`.
    MinSizeOutOfRange {
        /// The rejected value.
        value: u32,
    },

    /// The average chunk size is outside `AVERAGE_MIN..=AVERAGE_MAX`.
    AvgSizeOutOfRange {
        /// The rejected value.
        value: u32,
    },

    /// The maximum chunk size is outside `MAXIMUM_MIN..=MAXIMUM_MAX`.
    MaxSizeOutOfRange {
        /// The rejected value.
        value: u32,
    },

    /// The minimum chunk size is greater than the average chunk size.
    MinAboveAvg {
        /// Configured minimum.
        min: u32,
        /// Configured average.
        avg: u32,
    },

    /// The average chunk size is greater than the maximum chunk size.
    AvgAboveMax {
        /// Configured average.
        avg: u32,
        /// Configured maximum.
        max: u32,
    },

    /// A bit mask was requested for a bit count outside `1..=31`.
    MaskBitsOutOfRange {
        /// The rejected bit count.
        bits: u32,
    },
}

impl ChunkError {
    /// Returns true for errors caused by invalid parameters rather than I/O.
    pub fn is_invalid_config(&self) -> bool {
        !matches!(self, ChunkError::Io(_))
    }
}

impl fmt::Display for ChunkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkError::Io(e) => write!(f, "io error: {}", e),
            ChunkError::EmptySource => write!(f, "invalid config: source must not be empty"),
            ChunkError::SourceTooLarge { len } => {
                write!(
                    f,
                    "invalid config: source of {} bytes exceeds {} bytes",
                    len,
                    u32::MAX
                )
            }
            ChunkError::MinSizeOutOfRange { value } => write!(
                f,
                "invalid config: minimum chunk size {} must be between {} and {}",
                value, MINIMUM_MIN, MINIMUM_MAX
            ),
            ChunkError::AvgSizeOutOfRange { value } => write!(
                f,
                "invalid config: average chunk size {} must be between {} and {}",
                value, AVERAGE_MIN, AVERAGE_MAX
            ),
            ChunkError::MaxSizeOutOfRange { value } => write!(
                f,
                "invalid config: maximum chunk size {} must be between {} and {}",
                value, MAXIMUM_MIN, MAXIMUM_MAX
            ),
            ChunkError::MinAboveAvg { min, avg } => write!(
                f,
                "invalid config: minimum chunk size {} is greater than average {}",
                min, avg
            ),
            ChunkError::AvgAboveMax { avg, max } => write!(
                f,
                "invalid config: average chunk size {} is greater than maximum {}",
                avg, max
            ),
            ChunkError::MaskBitsOutOfRange { bits } => {
                write!(
                    f,
                    "invalid argument: mask bits {} must be between 1 and 31",
                    bits
                )
            }
        }
    }
}

impl std::error::Error for ChunkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChunkError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ChunkError {
    fn from(e: std::io::Error) -> Self {
        ChunkError::Io(e)
    }
}
