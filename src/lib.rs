//! Band-limited resampling of in-memory audio buffers.
//!
//! Audio is converted from one sample rate to another by sinc interpolation: every output
//! sample is a weighted sum of the input samples around its position on the input timeline,
//! with weights read from a precomputed, Kaiser-windowed low-pass filter table. Two filter
//! presets ship with the crate, [`FilterType::Fast`] and [`FilterType::Best`].
//!
//! # Usage
//!
//! ```rust
//! use kaiser_resample::{resample, ResampleConfig};
//!
//! // 10 ms of a 440 Hz tone at 44.1 kHz
//! let tone: Vec<f64> = (0..441)
//!     .map(|i| (2.0 * std::f64::consts::PI * 440.0 * i as f64 / 44_100.0).sin())
//!     .collect();
//!
//! let resampled = resample(tone, 44_100, 48_000, ResampleConfig::default())?;
//! assert_eq!(resampled.len(), 480);
//! # Ok::<(), kaiser_resample::ResampleError>(())
//! ```
//!
//! Stereo input is given as pairs and mixed down to mono:
//!
//! ```rust
//! use kaiser_resample::{resample, AudioInput, ResampleConfig};
//!
//! let frames = vec![[0.5, -0.5], [0.25, 0.25], [1.0, 0.0], [0.0, 0.0]];
//! let resampled = resample(AudioInput::Stereo(frames), 22_050, 44_100, ResampleConfig::fast())?;
//! assert_eq!(resampled.len(), 8);
//! # Ok::<(), kaiser_resample::ResampleError>(())
//! ```
//!
//! # Pipeline
//!
//! A call to [`resample`] runs these steps, failing before any allocation if the input or
//! the sample rates are invalid:
//!
//! 1. [`validate`](validate::validate) the audio: at least three frames, all finite.
//! 2. [`shape`](AudioInput::shape) it into a single-channel [`AudioMatrix`](buffer::AudioMatrix).
//! 3. [`load`](FilterType::load) the filter table (decoded once per process).
//! 4. Run the [kernel](conversions::resample_matrix) for `floor(len × new_sr / original_sr)`
//!    samples.
//! 5. [`fix_length`](conversions::fix_length) to exactly `ceil(len × new_sr / original_sr)`,
//!    unless disabled in [`ResampleConfig`].
//!
//! The lower-level steps are public for callers who want to bring their own filter table or
//! resample several channels at once.
//!
//! # Optional Features
//!
//! - `tracing`: log table decoding and resampling calls through the `tracing` crate.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_debug_implementations)]

mod common;
mod resample;

pub mod buffer;
pub mod conversions;
pub mod filter;
pub mod math;
pub mod validate;

pub use crate::common::{ChannelCount, Sample, SampleRate};
pub use crate::conversions::{AudioInput, UnsupportedChannelLayoutError};
pub use crate::filter::{FilterLoadError, FilterTable, FilterType, UnknownFilterError};
pub use crate::resample::{
    resample, resample_frames, resample_with_filter_name, ResampleConfig, ResampleError,
};
pub use crate::validate::InvalidAudioError;
