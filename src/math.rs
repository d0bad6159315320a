//! Exact sample-count arithmetic for rate conversion.

use num_rational::Ratio;

use crate::common::SampleRate;

/// Reduced `to / from` ratio of two sample rates.
///
/// # Panic
/// Panics if `from` is 0.
#[inline]
pub fn rate_ratio(from: SampleRate, to: SampleRate) -> Ratio<u64> {
    Ratio::new(u64::from(to), u64::from(from))
}

/// `floor(len × ratio)`: the number of samples the kernel produces.
#[inline]
pub fn floor_len(len: usize, ratio: Ratio<u64>) -> usize {
    (Ratio::from_integer(len as u64) * ratio).floor().to_integer() as usize
}

/// `ceil(len × ratio)`: the exact length of a length-fixed output.
#[inline]
pub fn ceil_len(len: usize, ratio: Ratio<u64>) -> usize {
    (Ratio::from_integer(len as u64) * ratio).ceil().to_integer() as usize
}

/// Lossy conversion of an exact ratio to the real value the kernel steps with.
#[inline]
pub fn ratio_to_f64(ratio: Ratio<u64>) -> f64 {
    *ratio.numer() as f64 / *ratio.denom() as f64
}
