//! The one-call resampling entry point and its configuration.

use crate::common::{assert_error_traits, SampleRate};
use crate::conversions::{
    fix_length, min_ratio, resample_matrix, AudioInput, UnsupportedChannelLayoutError,
};
use crate::filter::{FilterLoadError, FilterType, UnknownFilterError};
use crate::math::{ceil_len, floor_len, rate_ratio, ratio_to_f64};
use crate::validate::{validate, InvalidAudioError};

/// Configuration for [`resample`].
///
/// # Examples
///
/// ```rust
/// use kaiser_resample::{FilterType, ResampleConfig};
///
/// // Use presets
/// let config = ResampleConfig::best();
/// let config = ResampleConfig::fast();
///
/// // Or pick each setting
/// let config = ResampleConfig::default()
///     .filter(FilterType::Fast)
///     .fix_length(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResampleConfig {
    filter: FilterType,
    fix_length: bool,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            filter: FilterType::default(),
            fix_length: true,
        }
    }
}

impl ResampleConfig {
    /// Highest quality: the 64 zero-crossing filter.
    pub fn best() -> Self {
        Self::default().filter(FilterType::Best)
    }

    /// The 16 zero-crossing filter, about four times cheaper.
    pub fn fast() -> Self {
        Self::default().filter(FilterType::Fast)
    }

    /// Sets the filter preset.
    pub fn filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// When `true` (the default) the output holds exactly `ceil(len × new_sr / original_sr)`
    /// samples. When `false` it holds what the kernel produced, `floor(len × new_sr / original_sr)`.
    pub fn fix_length(mut self, fix_length: bool) -> Self {
        self.fix_length = fix_length;
        self
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter
    }

    pub fn fixes_length(&self) -> bool {
        self.fix_length
    }
}

/// Errors that can occur when resampling.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ResampleError {
    /// A sample rate of zero.
    #[error("Invalid argument '{name}': {value}, sample rates must be positive")]
    InvalidArgument {
        name: &'static str,
        value: SampleRate,
    },
    /// The rate change is too large for the filter table's resolution.
    #[error("Cannot resample from {original_sr} Hz to {new_sr} Hz, the ratio is below the filter's limit of {min_ratio}")]
    RatioOutOfRange {
        original_sr: SampleRate,
        new_sr: SampleRate,
        min_ratio: f64,
    },
    #[error(transparent)]
    InvalidAudio(#[from] InvalidAudioError),
    #[error(transparent)]
    UnsupportedChannelLayout(#[from] UnsupportedChannelLayoutError),
    #[error(transparent)]
    UnknownFilter(#[from] UnknownFilterError),
    #[error(transparent)]
    FilterLoad(#[from] FilterLoadError),
}
assert_error_traits!(ResampleError);

/// Resamples mono or stereo audio from `original_sr` to `new_sr`.
///
/// Stereo input is mixed down to mono first. The result is a mono signal at `new_sr`.
///
/// # Example
///
/// ```rust
/// use kaiser_resample::{resample, ResampleConfig};
///
/// let input = vec![1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0, 0.0];
/// let output = resample(input, 8000, 16000, ResampleConfig::fast())?;
/// assert_eq!(output.len(), 16);
/// # Ok::<(), kaiser_resample::ResampleError>(())
/// ```
///
/// # Errors
///
/// Fails before doing any work when a sample rate is zero, the audio is invalid (see
/// [`validate`](crate::validate::validate)), the filter table cannot be loaded, or the
/// ratio is smaller than the filter supports.
pub fn resample(
    input: impl Into<AudioInput>,
    original_sr: SampleRate,
    new_sr: SampleRate,
    config: ResampleConfig,
) -> Result<Vec<f64>, ResampleError> {
    if original_sr == 0 {
        return Err(ResampleError::InvalidArgument {
            name: "original_sr",
            value: original_sr,
        });
    }
    if new_sr == 0 {
        return Err(ResampleError::InvalidArgument {
            name: "new_sr",
            value: new_sr,
        });
    }

    let input = input.into();
    validate(&input)?;

    let table = config.filter.load()?;
    let ratio = rate_ratio(original_sr, new_sr);
    let real_ratio = ratio_to_f64(ratio);
    if real_ratio * f64::from(table.precision()) < 1.0 {
        return Err(ResampleError::RatioOutOfRange {
            original_sr,
            new_sr,
            min_ratio: min_ratio(table),
        });
    }

    let audio = input.shape();
    let n_in = audio.len();
    let out_len = floor_len(n_in, ratio);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        original_sr,
        new_sr,
        ratio = real_ratio,
        filter = %config.filter,
        input_len = n_in,
        output_len = out_len,
        "resampling"
    );

    let output = resample_matrix(&audio, real_ratio, table, out_len);
    let output = if config.fix_length {
        fix_length(output, ceil_len(n_in, ratio))
    } else {
        output
    };

    Ok(output.into_inner())
}

/// Like [`resample`], selecting the filter by name (`"fast"`, `"best"`, `"kaiser_fast"`
/// or `"kaiser_best"`).
pub fn resample_with_filter_name(
    input: impl Into<AudioInput>,
    original_sr: SampleRate,
    new_sr: SampleRate,
    filter_name: &str,
    fix_length: bool,
) -> Result<Vec<f64>, ResampleError> {
    let filter: FilterType = filter_name.parse()?;
    let config = ResampleConfig::default()
        .filter(filter)
        .fix_length(fix_length);
    resample(input, original_sr, new_sr, config)
}

/// Like [`resample`], for untagged frames of one or two samples each.
pub fn resample_frames<F>(
    frames: Vec<F>,
    original_sr: SampleRate,
    new_sr: SampleRate,
    config: ResampleConfig,
) -> Result<Vec<f64>, ResampleError>
where
    F: AsRef<[f64]>,
{
    let input = AudioInput::from_frames(frames)?;
    resample(input, original_sr, new_sr, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ResampleConfig::default();
        assert_eq!(config.filter_type(), FilterType::Best);
        assert!(config.fixes_length());
        assert_eq!(config, ResampleConfig::best());
    }

    #[test]
    fn builder_overrides() {
        let config = ResampleConfig::best().filter(FilterType::Fast).fix_length(false);
        assert_eq!(config.filter_type(), FilterType::Fast);
        assert!(!config.fixes_length());
    }

    #[test]
    fn zero_rates_are_rejected_first() {
        // Invalid audio too, but the rate check comes first.
        let err = resample(vec![0.0], 0, 8000, ResampleConfig::fast()).unwrap_err();
        assert_eq!(
            err,
            ResampleError::InvalidArgument {
                name: "original_sr",
                value: 0
            }
        );
        let err = resample(vec![0.0; 4], 8000, 0, ResampleConfig::fast()).unwrap_err();
        assert!(matches!(
            err,
            ResampleError::InvalidArgument { name: "new_sr", .. }
        ));
    }

    #[test]
    fn ratio_below_table_resolution() {
        let err = resample(vec![0.0; 2048], 1024 * 512, 1000, ResampleConfig::fast()).unwrap_err();
        assert!(matches!(err, ResampleError::RatioOutOfRange { .. }), "{err}");
    }

    #[test]
    fn filter_names() {
        let out = resample_with_filter_name(vec![0.0; 8], 1, 2, "kaiser_fast", true).unwrap();
        assert_eq!(out, vec![0.0; 16]);

        let err = resample_with_filter_name(vec![0.0; 8], 1, 2, "sinc_best", true).unwrap_err();
        assert_eq!(
            err,
            ResampleError::UnknownFilter(UnknownFilterError {
                name: "sinc_best".to_owned()
            })
        );
    }

    #[test]
    fn untagged_frames() {
        let err = resample_frames(vec![vec![0.0; 3]; 4], 1, 2, ResampleConfig::fast()).unwrap_err();
        assert!(matches!(err, ResampleError::UnsupportedChannelLayout(_)));

        let out = resample_frames(vec![[0.5, 0.5]; 4], 1, 1, ResampleConfig::fast()).unwrap();
        assert_eq!(out.len(), 4);
    }
}
