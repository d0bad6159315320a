use dasp_sample::{Sample as DaspSample, ToSample};

use super::AudioInput;
use crate::common::Sample;

/// Converts any PCM sample type to the `f64` amplitude the resampler works with.
///
/// Integer samples are mapped onto `[-1.0, 1.0)` the way `dasp_sample` does it,
/// so `i16::MIN` becomes `-1.0` and `0u8` becomes `-1.0`.
#[inline]
pub fn to_amplitude<S>(sample: S) -> Sample
where
    S: DaspSample + ToSample<Sample>,
{
    sample.to_sample::<Sample>()
}

impl AudioInput {
    /// Mono input from samples of any PCM type.
    pub fn from_samples<S, I>(samples: I) -> AudioInput
    where
        S: DaspSample + ToSample<Sample>,
        I: IntoIterator<Item = S>,
    {
        AudioInput::Mono(samples.into_iter().map(to_amplitude).collect())
    }

    /// Stereo input from interleaved samples of any PCM type.
    ///
    /// A trailing unpaired sample is dropped.
    pub fn from_interleaved_stereo<S, I>(samples: I) -> AudioInput
    where
        S: DaspSample + ToSample<Sample>,
        I: IntoIterator<Item = S>,
    {
        let samples: Vec<Sample> = samples.into_iter().map(to_amplitude).collect();
        AudioInput::Stereo(
            samples
                .chunks_exact(2)
                .map(|pair| [pair[0], pair[1]])
                .collect(),
        )
    }
}
