//! Designs the Kaiser-windowed sinc filter presets and writes them to `OUT_DIR`
//! as binary assets, which the library embeds with `include_bytes!`.
//!
//! Keep the asset layout in sync with `src/filter/asset.rs`.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};

const MAGIC: &[u8; 4] = b"KSRF";
const VERSION: u32 = 1;

struct Preset {
    file: &'static str,
    zero_crossings: u32,
    precision: u32,
    rolloff: f64,
    beta: f64,
}

const PRESETS: [Preset; 2] = [
    Preset {
        file: "kaiser_fast.bin",
        zero_crossings: 16,
        precision: 512,
        rolloff: 0.85,
        beta: 8.555504641634386,
    },
    Preset {
        file: "kaiser_best.bin",
        zero_crossings: 64,
        precision: 512,
        rolloff: 0.9475937167399596,
        beta: 14.769656459379492,
    },
];

/// Zeroth-order modified Bessel function of the first kind.
fn bessel_i0(x: f64) -> f64 {
    let half = x / 2.0;
    let mut term = 1.0;
    let mut sum = 1.0;
    let mut k = 1.0;
    while term > sum * 1e-17 {
        term *= (half / k) * (half / k);
        sum += term;
        k += 1.0;
    }
    sum
}

fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = std::f64::consts::PI * x;
        px.sin() / px
    }
}

fn half_window(preset: &Preset) -> Vec<f64> {
    let n = (preset.zero_crossings * preset.precision) as usize;
    let norm = bessel_i0(preset.beta);
    (0..n)
        .map(|i| {
            let x = i as f64 / preset.precision as f64;
            let r = i as f64 / n as f64;
            let taper = bessel_i0(preset.beta * (1.0 - r * r).sqrt()) / norm;
            preset.rolloff * sinc(preset.rolloff * x) * taper
        })
        .collect()
}

fn write_asset(path: &Path, preset: &Preset) -> io::Result<()> {
    let taps = half_window(preset);
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(MAGIC)?;
    out.write_u32::<LittleEndian>(VERSION)?;
    out.write_f64::<LittleEndian>(preset.rolloff)?;
    out.write_u32::<LittleEndian>(preset.precision)?;
    out.write_u32::<LittleEndian>(taps.len() as u32)?;
    for tap in taps {
        out.write_f64::<LittleEndian>(tap)?;
    }
    out.flush()
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var_os("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    for preset in &PRESETS {
        write_asset(&Path::new(&out_dir).join(preset.file), preset)?;
    }
    Ok(())
}
