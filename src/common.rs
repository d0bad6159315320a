/// Stream sample rate (samples per second per channel).
pub type SampleRate = u32;

/// Number of channels in an audio matrix.
pub type ChannelCount = u16;

/// A single sample value. All resampling arithmetic is done in double precision.
pub type Sample = f64;

/// Compile-time check that an error type can cross threads and be boxed.
macro_rules! assert_error_traits {
    ($to_test:path) => {
        const _: () = {
            const fn check<T: std::error::Error + Send + Sync + 'static>() {}
            check::<$to_test>();
        };
    };
}

pub(crate) use assert_error_traits;
