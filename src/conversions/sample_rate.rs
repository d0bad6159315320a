//! Band-limited sinc interpolation over a tabulated half window.
//!
//! For each output sample the kernel finds the matching fractional position in
//! the input, then sums the input samples on either side weighted by the filter
//! evaluated at their distance. The filter is read from a [`FilterTable`] with
//! `precision` entries per zero-crossing, linearly interpolated between entries.
//!
//! When downsampling, the filter is stretched by `1 / ratio` (by striding the
//! table more slowly) and scaled by `ratio`, lowering the cutoff below the new
//! Nyquist frequency.

use crate::buffer::AudioMatrix;
use crate::filter::FilterTable;

#[cfg(test)]
mod test;

/// A position on the input timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputPosition {
    /// Index of the last input sample at or before the position.
    pub index: usize,
    /// Distance past `index`, multiplied by the filter scale.
    pub frac: f64,
}

/// Walks the input timeline one output sample at a time.
///
/// Yields the input position of output samples `0, 1, 2, ...`; the underlying
/// time only ever moves forward.
#[derive(Debug, Clone)]
pub struct TimeRegister {
    time: f64,
    increment: f64,
    scale: f64,
}

impl TimeRegister {
    /// # Panic
    ///
    /// Panics if `ratio` is not a positive finite number.
    pub fn new(ratio: f64) -> TimeRegister {
        assert!(ratio.is_finite() && ratio > 0.0);

        TimeRegister {
            time: 0.0,
            increment: 1.0 / ratio,
            scale: ratio.min(1.0),
        }
    }

    /// Current position on the input timeline, in input samples.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }
}

impl Iterator for TimeRegister {
    type Item = InputPosition;

    #[inline]
    fn next(&mut self) -> Option<InputPosition> {
        // `time` is never negative, so truncation is a floor.
        let index = self.time as usize;
        let frac = self.scale * (self.time - index as f64);
        self.time += self.increment;
        Some(InputPosition { index, frac })
    }
}

/// Filter taps prepared for one conversion ratio.
struct Taps {
    window: Vec<f64>,
    delta: Vec<f64>,
    precision: f64,
    index_step: usize,
}

impl Taps {
    fn new(filter: &FilterTable, ratio: f64) -> Taps {
        let scale = ratio.min(1.0);
        let mut window = filter.half_window().to_vec();
        let mut delta = filter.deltas();
        if ratio < 1.0 {
            window.iter_mut().for_each(|tap| *tap *= ratio);
            delta.iter_mut().for_each(|d| *d *= ratio);
        }

        let precision = f64::from(filter.precision());
        Taps {
            window,
            delta,
            precision,
            index_step: (scale * precision) as usize,
        }
    }

    /// Table offset and interpolation factor for a scaled fraction.
    #[inline]
    fn locate(&self, frac: f64) -> (usize, f64) {
        let index_frac = frac * self.precision;
        let offset = index_frac as usize;
        (offset, index_frac - offset as f64)
    }

    /// Number of table positions `offset, offset + step, ...` inside the window.
    #[inline]
    fn reach(&self, offset: usize) -> usize {
        self.window.len().saturating_sub(offset) / self.index_step
    }

    #[inline]
    fn weight(&self, offset: usize, eta: f64, i: usize) -> f64 {
        let at = offset + i * self.index_step;
        self.window[at] + eta * self.delta[at]
    }
}

/// Smallest ratio the table can serve: below it the table stride rounds to zero.
pub fn min_ratio(filter: &FilterTable) -> f64 {
    1.0 / f64::from(filter.precision())
}

/// Resamples every channel of `input` by `ratio` (`new rate / original rate`),
/// producing exactly `out_len` rows.
///
/// Output row `t` corresponds to input time `t / ratio`. Input samples outside
/// `[0, input.len())` are treated as absent, not as zeros of an extended signal.
///
/// # Panic
///
/// - Panics if `ratio` is not a positive finite number.
/// - Panics if `ratio × precision < 1`, see [`min_ratio`].
pub fn resample_matrix(
    input: &AudioMatrix,
    ratio: f64,
    filter: &FilterTable,
    out_len: usize,
) -> AudioMatrix {
    assert!(ratio.is_finite() && ratio > 0.0);

    let taps = Taps::new(filter, ratio);
    assert!(
        taps.index_step >= 1,
        "ratio {ratio} is below the table resolution of 1/{}",
        filter.precision()
    );

    let channels = input.channels();
    let n_in = input.len();
    let mut output = AudioMatrix::zeros(channels, out_len);
    if n_in == 0 {
        return output;
    }

    let scale = ratio.min(1.0);
    for (t, InputPosition { index: n, frac }) in TimeRegister::new(ratio).take(out_len).enumerate()
    {
        let y = output.row_mut(t);

        // Left wing: x[n], x[n - 1], ... down to x[0].
        let (offset, eta) = taps.locate(frac);
        let i_max = (n + 1).min(taps.reach(offset));
        // Skip taps whose sample lies past the end of the input.
        let i_min = n.saturating_sub(n_in - 1);
        for i in i_min..i_max {
            let weight = taps.weight(offset, eta, i);
            for (acc, x) in y.iter_mut().zip(input.row(n - i)) {
                *acc += weight * x;
            }
        }

        // Right wing: x[n + 1], x[n + 2], ... up to the last input sample.
        let (offset, eta) = taps.locate(scale - frac);
        let k_max = n_in.saturating_sub(n + 1).min(taps.reach(offset));
        for k in 0..k_max {
            let weight = taps.weight(offset, eta, k);
            for (acc, x) in y.iter_mut().zip(input.row(n + k + 1)) {
                *acc += weight * x;
            }
        }
    }

    output
}
