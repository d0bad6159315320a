//! Two-dimensional sample storage.
//!
//! The `AudioMatrix` struct holds audio as rows of frames, one column per channel.
//!
//! # Example
//!
//! ```
//! use kaiser_resample::buffer::AudioMatrix;
//! let matrix = AudioMatrix::new(2, vec![0.1, 0.2, 0.3, 0.4]);
//! assert_eq!(matrix.len(), 2);
//! assert_eq!(matrix.row(1), &[0.3, 0.4]);
//! ```
//!

use std::slice::ChunksExact;

use crate::common::{ChannelCount, Sample};

/// Audio samples of shape `[samples][channels]`, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioMatrix {
    data: Vec<Sample>,
    channels: ChannelCount,
}

impl AudioMatrix {
    /// Builds a matrix from interleaved samples.
    ///
    /// # Panic
    ///
    /// - Panics if the number of channels is zero.
    /// - Panics if the length of `data` is not a multiple of `channels`.
    ///
    pub fn new<D>(channels: ChannelCount, data: D) -> AudioMatrix
    where
        D: Into<Vec<Sample>>,
    {
        assert!(channels != 0);

        let data = data.into();
        assert_eq!(data.len() % channels as usize, 0);

        AudioMatrix { data, channels }
    }

    /// A matrix of `len` silent rows.
    pub fn zeros(channels: ChannelCount, len: usize) -> AudioMatrix {
        AudioMatrix::new(channels, vec![0.0; len * channels as usize])
    }

    /// Wraps a mono signal, one sample per row.
    pub fn mono<D>(data: D) -> AudioMatrix
    where
        D: Into<Vec<Sample>>,
    {
        AudioMatrix::new(1, data)
    }

    /// Number of rows (samples per channel).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.channels as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn channels(&self) -> ChannelCount {
        self.channels
    }

    /// The samples of row `index`, one per channel.
    ///
    /// # Panic
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn row(&self, index: usize) -> &[Sample] {
        let width = self.channels as usize;
        &self.data[index * width..(index + 1) * width]
    }

    #[inline]
    pub fn row_mut(&mut self, index: usize) -> &mut [Sample] {
        let width = self.channels as usize;
        &mut self.data[index * width..(index + 1) * width]
    }

    pub fn rows(&self) -> ChunksExact<'_, Sample> {
        self.data.chunks_exact(self.channels as usize)
    }

    /// Copies one channel out as a flat signal.
    pub fn channel(&self, channel: usize) -> Vec<Sample> {
        self.rows().map(|row| row[channel]).collect()
    }

    /// Interleaved samples, row by row.
    #[inline]
    pub fn as_slice(&self) -> &[Sample] {
        &self.data
    }

    /// Keeps the first `len` rows.
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len * self.channels as usize);
    }

    /// Appends `count` rows, each a copy of `row`.
    pub(crate) fn extend_with_row(&mut self, row: &[Sample], count: usize) {
        debug_assert_eq!(row.len(), self.channels as usize);
        self.data.reserve(row.len() * count);
        for _ in 0..count {
            self.data.extend_from_slice(row);
        }
    }

    /// Returns the interleaved samples. For a mono matrix this is the signal itself.
    pub fn into_inner(self) -> Vec<Sample> {
        self.data
    }
}
