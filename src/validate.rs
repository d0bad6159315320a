//! Up-front checks on audio before any resampling work starts.

use crate::common::assert_error_traits;
use crate::conversions::AudioInput;

/// Minimum number of frames the resampler accepts.
pub const MIN_FRAMES: usize = 3;

/// Audio the resampler refuses to process.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum InvalidAudioError {
    #[error("Audio has {len} frames, at least {MIN_FRAMES} are required")]
    TooShort { len: usize },
    #[error("Sample {value} in frame {frame} is not a finite number")]
    NotFinite { frame: usize, value: f64 },
}
assert_error_traits!(InvalidAudioError);

/// Checks that `audio` has at least [`MIN_FRAMES`] frames and only finite samples.
pub fn validate(audio: &AudioInput) -> Result<(), InvalidAudioError> {
    let len = audio.len();
    if len < MIN_FRAMES {
        return Err(InvalidAudioError::TooShort { len });
    }

    let bad = match audio {
        AudioInput::Mono(samples) => samples
            .iter()
            .enumerate()
            .find(|(_, s)| !s.is_finite())
            .map(|(frame, &value)| (frame, value)),
        AudioInput::Stereo(frames) => frames.iter().enumerate().find_map(|(frame, pair)| {
            pair.iter()
                .find(|s| !s.is_finite())
                .map(|&value| (frame, value))
        }),
    };

    match bad {
        Some((frame, value)) => Err(InvalidAudioError::NotFinite { frame, value }),
        None => Ok(()),
    }
}
