//! Kaiser-windowed sinc filter tables.
//!
//! A [`FilterTable`] holds the right-hand half of a symmetric low-pass impulse
//! response, sampled `precision` times per zero-crossing. Two presets ship with
//! the crate and are embedded in the binary:
//!
//! | Preset | zero-crossings | precision | rolloff | Kaiser β |
//! |--------|----------------|-----------|---------|----------|
//! | [`Fast`](FilterType::Fast) | 16 | 512 | 0.85 | 8.5555 |
//! | [`Best`](FilterType::Best) | 64 | 512 | 0.9476 | 14.7697 |
//!
//! ```rust
//! use kaiser_resample::filter::FilterType;
//!
//! let table = FilterType::Fast.load()?;
//! assert_eq!(table.len(), 16 * 512);
//! # Ok::<(), kaiser_resample::filter::FilterLoadError>(())
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::common::assert_error_traits;

mod asset;

/// The filter presets, trading speed for quality.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterType {
    /// 16 zero-crossings. Roughly four times cheaper than [`Best`](FilterType::Best),
    /// with a lower cutoff.
    Fast,

    /// 64 zero-crossings with a cutoff close to Nyquist.
    #[default]
    Best,
}

impl FilterType {
    /// Every preset, in order of increasing cost.
    pub const ALL: [FilterType; 2] = [FilterType::Fast, FilterType::Best];

    /// Table entries per zero-crossing, identical for both presets.
    pub const PRECISION: u32 = 512;

    /// Canonical name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            FilterType::Fast => "fast",
            FilterType::Best => "best",
        }
    }

    /// Number of zero-crossings of the sinc kernel kept on each side.
    pub const fn zero_crossings(self) -> u32 {
        match self {
            FilterType::Fast => 16,
            FilterType::Best => 64,
        }
    }

    /// Cutoff as a fraction of the Nyquist frequency of the lower rate.
    pub const fn rolloff(self) -> f64 {
        match self {
            FilterType::Fast => 0.85,
            FilterType::Best => 0.9475937167399596,
        }
    }

    /// Shape parameter of the Kaiser window the table was designed with.
    pub const fn beta(self) -> f64 {
        match self {
            FilterType::Fast => 8.555504641634386,
            FilterType::Best => 14.769656459379492,
        }
    }

    pub const fn precision(self) -> u32 {
        Self::PRECISION
    }

    /// Number of taps in the half window.
    pub const fn table_len(self) -> usize {
        (self.zero_crossings() * self.precision()) as usize
    }

    /// Returns the decoded table for this preset.
    ///
    /// The embedded asset is decoded on first use; later calls return the same
    /// shared table.
    pub fn load(self) -> Result<&'static FilterTable, FilterLoadError> {
        static FAST: OnceLock<Result<FilterTable, FilterLoadError>> = OnceLock::new();
        static BEST: OnceLock<Result<FilterTable, FilterLoadError>> = OnceLock::new();

        let cell = match self {
            FilterType::Fast => &FAST,
            FilterType::Best => &BEST,
        };
        cell.get_or_init(|| FilterTable::from_bytes(self, asset::embedded(self)))
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterType {
    type Err = UnknownFilterError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "fast" | "kaiser_fast" => Ok(FilterType::Fast),
            "best" | "kaiser_best" => Ok(FilterType::Best),
            _ => Err(UnknownFilterError {
                name: name.to_owned(),
            }),
        }
    }
}

/// A filter name that does not match any preset.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("Unknown filter '{name}', expected one of: fast, best")]
pub struct UnknownFilterError {
    pub name: String,
}
assert_error_traits!(UnknownFilterError);

/// A filter asset that is missing or does not decode.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("Could not load the '{preset}' filter table: {reason}")]
pub struct FilterLoadError {
    pub preset: FilterType,
    pub reason: String,
}
assert_error_traits!(FilterLoadError);

/// Half of a symmetric low-pass impulse response, tabulated for interpolation.
///
/// Immutable once built, so one table can serve any number of concurrent
/// resampling calls.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterTable {
    half_window: Vec<f64>,
    rolloff: f64,
    precision: u32,
}

impl FilterTable {
    /// Builds a table from raw taps.
    ///
    /// The taps are expected to decay away from index 0, as a windowed sinc does.
    ///
    /// # Panic
    ///
    /// - Panics if `half_window` is empty.
    /// - Panics if `precision` is 0.
    /// - Panics if `rolloff` is outside `(0, 1]`.
    pub fn new(half_window: Vec<f64>, rolloff: f64, precision: u32) -> FilterTable {
        assert!(!half_window.is_empty());
        assert!(precision >= 1);
        assert!(rolloff > 0.0 && rolloff <= 1.0);

        FilterTable {
            half_window,
            rolloff,
            precision,
        }
    }

    /// Decodes a table asset, checking it against the preset's parameters.
    pub fn from_bytes(preset: FilterType, bytes: &[u8]) -> Result<FilterTable, FilterLoadError> {
        let decoded = asset::decode(preset, bytes);

        #[cfg(feature = "tracing")]
        match &decoded {
            Ok(table) => tracing::debug!(
                preset = %preset,
                taps = table.len(),
                rolloff = table.rolloff,
                precision = table.precision,
                "decoded filter table"
            ),
            Err(err) => tracing::error!("{err}"),
        }

        decoded
    }

    /// Serializes the table in the asset layout that [`FilterTable::from_bytes`] reads.
    pub fn to_bytes(&self) -> Vec<u8> {
        asset::encode(self)
    }

    #[inline]
    pub fn half_window(&self) -> &[f64] {
        &self.half_window
    }

    #[inline]
    pub fn rolloff(&self) -> f64 {
        self.rolloff
    }

    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.half_window.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.half_window.is_empty()
    }

    /// Differences between neighbouring taps, `0.0` after the last one.
    ///
    /// Used to interpolate the filter linearly between table entries.
    pub fn deltas(&self) -> Vec<f64> {
        let mut delta: Vec<f64> = self
            .half_window
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .collect();
        delta.push(0.0);
        delta
    }
}
