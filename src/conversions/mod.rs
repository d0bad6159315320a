/*!
This module contains the conversions a buffer goes through on its way through the resampler.

This includes channel-layout shaping, sample-type widening, sample rate conversion and
length correction.

*/
pub use self::channels::{AudioInput, UnsupportedChannelLayoutError};
pub use self::length::fix_length;
pub use self::sample::to_amplitude;
pub use self::sample_rate::{min_ratio, resample_matrix, InputPosition, TimeRegister};

mod channels;
mod length;
mod sample;
pub mod sample_rate;
