use crate::buffer::AudioMatrix;
use crate::common::{assert_error_traits, Sample};

/// Audio handed to the resampler, tagged with its channel layout.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioInput {
    /// One sample per frame.
    Mono(Vec<Sample>),
    /// Left and right sample per frame.
    Stereo(Vec<[Sample; 2]>),
}

/// Frames that are neither all mono nor all stereo.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("Unsupported channel layout: frame {frame} has {channels} channels, expected {expected}")]
pub struct UnsupportedChannelLayoutError {
    pub frame: usize,
    pub channels: usize,
    pub expected: String,
}
assert_error_traits!(UnsupportedChannelLayoutError);

impl AudioInput {
    /// Detects the layout of untagged frames.
    ///
    /// The first frame decides the layout: 1 sample per frame is mono, 2 is stereo.
    /// Every other frame must have the same width.
    pub fn from_frames<F>(frames: Vec<F>) -> Result<AudioInput, UnsupportedChannelLayoutError>
    where
        F: AsRef<[Sample]>,
    {
        let width = frames.first().map_or(1, |frame| frame.as_ref().len());
        let expected = match width {
            1 | 2 => format!("{width}"),
            _ => "1 or 2".to_owned(),
        };
        if let Some((frame, bad)) = frames
            .iter()
            .map(|frame| frame.as_ref().len())
            .enumerate()
            .find(|&(_, channels)| channels != width || !(1..=2).contains(&channels))
        {
            return Err(UnsupportedChannelLayoutError {
                frame,
                channels: bad,
                expected,
            });
        }

        Ok(match width {
            1 => AudioInput::Mono(frames.iter().map(|frame| frame.as_ref()[0]).collect()),
            _ => AudioInput::Stereo(
                frames
                    .iter()
                    .map(|frame| [frame.as_ref()[0], frame.as_ref()[1]])
                    .collect(),
            ),
        })
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        match self {
            AudioInput::Mono(samples) => samples.len(),
            AudioInput::Stereo(frames) => frames.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts to the single-channel matrix the kernel works on.
    ///
    /// Stereo frames are averaged: `(left + right) / 2`.
    pub fn shape(self) -> AudioMatrix {
        match self {
            AudioInput::Mono(samples) => AudioMatrix::mono(samples),
            AudioInput::Stereo(frames) => {
                AudioMatrix::mono(frames.iter().map(|&[l, r]| (l + r) / 2.0).collect::<Vec<_>>())
            }
        }
    }
}

impl From<Vec<Sample>> for AudioInput {
    fn from(samples: Vec<Sample>) -> Self {
        AudioInput::Mono(samples)
    }
}

impl From<&[Sample]> for AudioInput {
    fn from(samples: &[Sample]) -> Self {
        AudioInput::Mono(samples.to_vec())
    }
}

impl From<Vec<[Sample; 2]>> for AudioInput {
    fn from(frames: Vec<[Sample; 2]>) -> Self {
        AudioInput::Stereo(frames)
    }
}

impl From<Vec<(Sample, Sample)>> for AudioInput {
    fn from(frames: Vec<(Sample, Sample)>) -> Self {
        AudioInput::Stereo(frames.into_iter().map(|(l, r)| [l, r]).collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn mono_frames_are_detected() {
        let input = AudioInput::from_frames(vec![vec![0.5], vec![0.25], vec![0.0]]).unwrap();
        assert_eq!(input, AudioInput::Mono(vec![0.5, 0.25, 0.0]));
    }

    #[test]
    fn stereo_frames_are_detected() {
        let input = AudioInput::from_frames(vec![[1.0, 0.0], [0.0, 1.0]]).unwrap();
        assert_eq!(input, AudioInput::Stereo(vec![[1.0, 0.0], [0.0, 1.0]]));
    }

    #[test]
    fn mixed_frames_are_rejected() {
        let err = AudioInput::from_frames(vec![vec![1.0, 0.0], vec![0.5]]).unwrap_err();
        assert_eq!(err.frame, 1);
        assert_eq!(err.channels, 1);
    }

    #[test]
    fn wide_frames_are_rejected() {
        let err = AudioInput::from_frames(vec![vec![1.0, 0.0, 0.5]]).unwrap_err();
        assert_eq!((err.frame, err.channels), (0, 3));
        assert_eq!(err.expected, "1 or 2");
    }

    #[test]
    fn empty_frames_are_rejected() {
        let err = AudioInput::from_frames(vec![Vec::<f64>::new(); 3]).unwrap_err();
        assert_eq!((err.frame, err.channels), (0, 0));
    }

    #[test]
    fn mono_shape_is_one_column() {
        let matrix = AudioInput::Mono(vec![1.0, 2.0, 3.0]).shape();
        assert_eq!(matrix.channels(), 1);
        assert_eq!(matrix.into_inner(), vec![1.0, 2.0, 3.0]);
    }

    quickcheck! {
        fn stereo_collapses_to_the_mean(frames: Vec<(i32, i32)>) -> bool {
            let frames: Vec<(f64, f64)> = frames
                .into_iter()
                .map(|(l, r)| (f64::from(l), f64::from(r)))
                .collect();
            let matrix = AudioInput::from(frames.clone()).shape();

            matrix.len() == frames.len()
                && matrix
                    .rows()
                    .zip(&frames)
                    .all(|(row, &(l, r))| row == [(l + r) / 2.0])
        }
    }
}
