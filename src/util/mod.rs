//! Integer helpers used to derive the cut-point parameters.
//!
//! These are public so the parameter derivation can be checked on its own.

use crate::error::ChunkError;

/// Base-2 logarithm of `value`, rounded to the nearest integer.
///
/// `log2_round(0)` is 0.
///
/// ```
/// use cutpoint::log2_round;
///
/// assert_eq!(log2_round(65535), 16);
/// assert_eq!(log2_round(32768), 15);
/// ```
pub fn log2_round(value: u32) -> u32 {
    // Saturating cast maps log2(0) = -inf to 0.
    f64::from(value).log2().round() as u32
}

/// Integer division of `x` by `y`, rounding up.
///
/// # Panics
///
/// Panics if `y` is zero.
pub fn ceil_div(x: u32, y: u32) -> u32 {
    x.div_ceil(y)
}

/// Returns a mask with the low `bits` bits set, `2^bits - 1`.
///
/// # Errors
///
/// [`ChunkError::MaskBitsOutOfRange`] unless `bits` is in `1..=31`.
///
/// ```
/// use cutpoint::mask;
///
/// assert_eq!(mask(8)?, 255);
/// assert!(mask(32).is_err());
/// # Ok::<(), cutpoint::ChunkError>(())
/// ```
pub fn mask(bits: u32) -> Result<u32, ChunkError> {
    if !(1..=31).contains(&bits) {
        return Err(ChunkError::MaskBitsOutOfRange { bits });
    }
    Ok((1u32 << bits) - 1)
}

/// Length of the scan window that uses the stricter mask.
///
/// Normalized chunking tests the harder mask from the minimum up to this
/// point and the easier one afterwards, pulling chunk lengths toward
/// `average`. The result never exceeds `source_size`.
///
/// `minimum + ceil(minimum / 2)` is computed with 32-bit wrapping, so
/// minimums above `u32::MAX / 1.5` wrap instead of overflowing.
pub fn center_size(average: u32, minimum: u32, source_size: u32) -> u32 {
    let offset = minimum.wrapping_add(ceil_div(minimum, 2)).min(average);
    let size = average - offset;
    size.min(source_size)
}
