use super::{min_ratio, resample_matrix, TimeRegister};
use crate::buffer::AudioMatrix;
use crate::filter::{FilterTable, FilterType};
use crate::math::{floor_len, rate_ratio, ratio_to_f64};
use approx::assert_abs_diff_eq;
use quickcheck::{quickcheck, TestResult};

fn sine(len: usize, cycles_per_sample: f64) -> Vec<f64> {
    (0..len)
        .map(|i| (2.0 * std::f64::consts::PI * cycles_per_sample * i as f64).sin())
        .collect()
}

quickcheck! {
    /// The input position never moves backwards.
    fn time_register_is_monotonic(from: u16, to: u16, steps: u16) -> TestResult {
        if from == 0 || to == 0 { return TestResult::discard(); }

        let ratio = ratio_to_f64(rate_ratio(from.into(), to.into()));
        let mut register = TimeRegister::new(ratio);
        let mut last_index = 0;
        let mut last_time = register.time();
        for _ in 0..steps {
            let position = register.next().unwrap();
            if position.index < last_index || position.frac < 0.0 || register.time() < last_time {
                return TestResult::failed();
            }
            last_index = position.index;
            last_time = register.time();
        }
        TestResult::passed()
    }

    /// Every wing stays inside the input, whatever the ratio and length.
    fn never_reads_outside_the_input(len: u8, from: u8, to: u8) -> TestResult {
        if from == 0 || to == 0 || len < 3 { return TestResult::discard(); }
        let ratio = rate_ratio(from.into(), to.into());
        let table = FilterType::Fast.load().unwrap();
        let real = ratio_to_f64(ratio);
        if real < min_ratio(table) { return TestResult::discard(); }

        let input = AudioMatrix::mono(sine(len as usize, 0.01));
        let out_len = floor_len(len as usize, ratio);
        // Indexing panics if a wing strays, so finishing is the property.
        let output = resample_matrix(&input, real, table, out_len);
        TestResult::from_bool(output.len() == out_len)
    }
}

#[test]
fn time_register_steps_by_inverse_ratio() {
    let positions: Vec<_> = TimeRegister::new(2.0).take(4).collect();
    let indices: Vec<_> = positions.iter().map(|p| p.index).collect();
    let fracs: Vec<_> = positions.iter().map(|p| p.frac).collect();
    assert_eq!(indices, [0, 0, 1, 1]);
    assert_eq!(fracs, [0.0, 0.5, 0.0, 0.5]);
}

#[test]
fn time_register_scales_fraction_when_downsampling() {
    let positions: Vec<_> = TimeRegister::new(0.4).take(3).collect();
    assert_eq!(positions[1].index, 2);
    assert_abs_diff_eq!(positions[1].frac, 0.4 * 0.5, epsilon = 1e-12);
    assert_eq!(positions[2].index, 5);
}

#[test]
#[should_panic]
fn panic_if_ratio_is_zero() {
    TimeRegister::new(0.0);
}

#[test]
#[should_panic]
fn panic_if_ratio_is_below_table_resolution() {
    let table = FilterType::Fast.load().unwrap();
    let input = AudioMatrix::mono(vec![0.0; 8]);
    resample_matrix(&input, 1.0 / 1024.0, table, 0);
}

#[test]
fn minimal_input_at_extreme_ratios() {
    let table = FilterType::Best.load().unwrap();
    let input = AudioMatrix::mono(vec![0.5, -0.25, 1.0]);
    for ratio in [0.1, 10.0] {
        let out_len = (3.0 * ratio) as usize;
        let output = resample_matrix(&input, ratio, table, out_len);
        assert_eq!(output.len(), out_len);
        assert!(output.as_slice().iter().all(|s| s.is_finite()));
    }
}

#[test]
fn empty_input_gives_silence() {
    let table = FilterType::Fast.load().unwrap();
    let output = resample_matrix(&AudioMatrix::mono(Vec::new()), 2.0, table, 4);
    assert_eq!(output.into_inner(), vec![0.0; 4]);
}

#[test]
fn unit_ratio_preserves_in_band_signal() {
    let table = FilterType::Fast.load().unwrap();
    let signal = sine(512, 0.05);
    let output = resample_matrix(&AudioMatrix::mono(signal.clone()), 1.0, table, 512);

    let output = output.into_inner();
    // Away from the edges the filter sees its full support.
    for i in 32..480 {
        assert_abs_diff_eq!(output[i], signal[i], epsilon = 0.02);
    }
}

#[test]
fn upsampling_interpolates_between_samples() {
    let table = FilterType::Best.load().unwrap();
    let signal = sine(400, 0.02);
    let output = resample_matrix(&AudioMatrix::mono(signal), 2.0, table, 800).into_inner();

    let expected = sine(800, 0.01);
    for t in 200..600 {
        assert_abs_diff_eq!(output[t], expected[t], epsilon = 0.01);
    }
}

#[test]
fn downsampling_keeps_amplitude_below_nyquist() {
    let table = FilterType::Fast.load().unwrap();
    // 1 kHz at 16 kHz, resampled to 8 kHz.
    let signal = sine(1600, 1000.0 / 16000.0);
    let output = resample_matrix(&AudioMatrix::mono(signal), 0.5, table, 800).into_inner();

    let expected = sine(800, 1000.0 / 8000.0);
    for t in 40..760 {
        assert_abs_diff_eq!(output[t], expected[t], epsilon = 0.05);
    }
}

#[test]
fn downsampling_rejects_content_above_the_new_nyquist() {
    let table = FilterType::Best.load().unwrap();
    // 6 kHz at 16 kHz lies above the 4 kHz Nyquist frequency of 8 kHz.
    let signal = sine(3200, 6000.0 / 16000.0);
    let output = resample_matrix(&AudioMatrix::mono(signal), 0.5, table, 1600).into_inner();

    let peak = output[200..1400].iter().fold(0.0f64, |acc, s| acc.max(s.abs()));
    assert!(peak < 0.01, "aliased peak {peak}");
}

#[test]
fn channels_are_resampled_independently() {
    let table = FilterType::Fast.load().unwrap();
    let left = sine(256, 0.03);
    let right: Vec<f64> = left.iter().map(|s| -0.5 * s).collect();
    let interleaved: Vec<f64> = left
        .iter()
        .zip(&right)
        .flat_map(|(&l, &r)| [l, r])
        .collect();

    let stereo = resample_matrix(&AudioMatrix::new(2, interleaved), 1.5, table, 384);
    let mono_left = resample_matrix(&AudioMatrix::mono(left), 1.5, table, 384);
    let mono_right = resample_matrix(&AudioMatrix::mono(right), 1.5, table, 384);

    assert_eq!(stereo.channel(0), mono_left.into_inner());
    assert_eq!(stereo.channel(1), mono_right.into_inner());
}

#[test]
fn custom_tables_drive_the_kernel() {
    // A single-tap table passes the nearest-left sample through unchanged.
    let table = FilterTable::new(vec![1.0, 0.0], 1.0, 1);
    let input = AudioMatrix::mono(vec![1.0, 2.0, 3.0, 4.0]);
    let output = resample_matrix(&input, 1.0, &table, 4);
    assert_eq!(output.into_inner(), vec![1.0, 2.0, 3.0, 4.0]);
}
