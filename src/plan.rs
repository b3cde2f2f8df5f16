//! Tap counts, the split map, the Catmull-Rom kernel, and the precomputed
//! horizontal coefficient/border plans (spec §4.2).

use crate::alloc::try_vec;
use crate::Error;

/// Bicubic interpolation: 2 base taps on either side.
const BASE_TAPS: usize = 4;

/// Given input and output dimension, the number of taps needed to compute
/// one output sample.
///
/// Upscaling always uses the base 4 taps. Downscaling widens the filter in
/// proportion to the scale factor, and rounds the tap count down to the
/// nearest even number (the modern, spec-following rule; see `DESIGN.md` for
/// the legacy round-up variant this crate does not implement).
pub(crate) fn tap_count(din: usize, dout: usize) -> usize {
    if dout > din {
        return BASE_TAPS;
    }
    let tmp = BASE_TAPS * din / dout;
    tmp - (tmp & 1)
}

/// Map a discrete destination coordinate to a continuous source coordinate,
/// then split it into an integer source index (which may be `-1`) and a
/// subpixel remainder in `[0, 1)`.
pub(crate) fn split_map(din: usize, dout: usize, pos: usize) -> (isize, f32) {
    let smp = (pos as f64 + 0.5) * (din as f64 / dout as f64) - 0.5;
    let smp_i = if smp < 0.0 { -1isize } else { smp as isize };
    let rest = (smp - smp_i as f64) as f32;
    (smp_i, rest)
}

/// The Catmull-Rom interpolation kernel, evaluated at `|x|`.
fn catrom(x: f32) -> f32 {
    if x >= 2.0 {
        0.0
    } else if x < 1.0 {
        (1.5 * x - 2.5) * x * x + 1.0
    } else {
        (((5.0 - x) * x - 8.0) * x + 4.0) / 2.0
    }
}

/// Compute `taps` Catmull-Rom coefficients for subpixel offset `t`, trimming
/// `ltrim` taps from the left and `rtrim` from the right, and renormalizing
/// the remainder to sum to exactly 1.
///
/// `coeffs` must be at least `taps - rtrim` long; only indices
/// `ltrim..taps - rtrim` are written.
pub(crate) fn calc_coeffs(coeffs: &mut [f32], t: f32, taps: usize, ltrim: usize, rtrim: usize) {
    let tap_mult = taps as f32 / BASE_TAPS as f32;
    let mut tx = 1.0 - t - taps as f32 / 2.0 + ltrim as f32;
    let mut fudge = 0.0f32;

    for coeff in coeffs.iter_mut().take(taps - rtrim).skip(ltrim) {
        let tmp = catrom(tx.abs() / tap_mult) / tap_mult;
        fudge += tmp;
        *coeff = tmp;
        tx += 1.0;
    }

    let fudge = 1.0 / fudge;
    for coeff in coeffs.iter_mut().take(taps - rtrim).skip(ltrim) {
        *coeff *= fudge;
    }
}

/// Precomputed plan for downscaling (`dout <= din`).
///
/// `coeffs` holds 4 coefficients per input sample, row-major, staged so a
/// running ring of 4 accumulators can be updated in place as input samples
/// arrive. `borders[i]` is the number of input samples to consume before the
/// `i`-th output sample is complete.
#[derive(Debug)]
pub(crate) struct DownscalePlan {
    pub(crate) taps: usize,
    pub(crate) coeffs: Vec<f32>,
    pub(crate) borders: Vec<usize>,
}

/// Precomputed plan for upscaling (`dout > din`).
///
/// `coeffs` holds 4 coefficients per output sample. `borders[i]` is the
/// number of output samples to emit once input sample `i` has entered the
/// 4-wide sliding window.
#[derive(Debug)]
pub(crate) struct UpscalePlan {
    pub(crate) coeffs: Vec<f32>,
    pub(crate) borders: Vec<usize>,
}

pub(crate) enum HPlan {
    Down(DownscalePlan),
    Up(UpscalePlan),
}

pub(crate) fn build_hplan(din: usize, dout: usize) -> Result<HPlan, Error> {
    if dout <= din {
        Ok(HPlan::Down(build_downscale_plan(din, dout)?))
    } else {
        Ok(HPlan::Up(build_upscale_plan(din, dout)?))
    }
}

fn build_downscale_plan(din: usize, dout: usize) -> Result<DownscalePlan, Error> {
    let taps = tap_count(din, dout);
    let mut coeffs = try_vec(4 * din, 0f32)?;
    let mut borders = try_vec(dout, 0usize)?;
    let mut tmp_coeffs = try_vec(taps, 0f32)?;
    // Rolling history of the last 4 outputs' end positions; -1 means "none yet".
    let mut ends: [isize; 4] = [-1; 4];

    for i in 0..dout {
        let (smp_i, t) = split_map(din, dout, i);
        let smp_start = smp_i - (taps as isize / 2 - 1);
        let smp_end = (smp_i + taps as isize / 2).min(din as isize - 1);

        ends[i % 4] = smp_end;
        let prev_end = ends[(i + 3) % 4];
        borders[i] = (smp_end - prev_end) as usize;

        let ltrim = (-smp_start).max(0) as usize;
        let rtrim = (smp_start + taps as isize - 1 - smp_end).max(0) as usize;
        calc_coeffs(&mut tmp_coeffs, t, taps, ltrim, rtrim);

        for j in ltrim..taps - rtrim {
            let pos = smp_start + j as isize;
            let offset = if pos > ends[(i + 3) % 4] {
                0
            } else if pos > ends[(i + 2) % 4] {
                1
            } else if pos > ends[(i + 1) % 4] {
                2
            } else {
                3
            };
            coeffs[pos as usize * 4 + offset] = tmp_coeffs[j];
        }
    }

    Ok(DownscalePlan { taps, coeffs, borders })
}

fn build_upscale_plan(din: usize, dout: usize) -> Result<UpscalePlan, Error> {
    let mut coeffs = try_vec(4 * dout, 0f32)?;
    let mut borders = try_vec(din, 0usize)?;
    let max_pos = din as isize - 1;

    for i in 0..dout {
        let (smp_i, t) = split_map(din, dout, i);
        let start = smp_i - 1;
        let end = smp_i + 2;
        let safe_end = end.min(max_pos);

        let ltrim = (-start).max(0) as usize;
        let rtrim = (end - max_pos).max(0) as usize;

        borders[safe_end as usize] += 1;

        // Offset by rtrim: the interpolator won't push any more samples once
        // the window has run off the right edge, so the tail coefficients
        // land at the end of this output sample's 4-wide slot.
        let base = i * 4;
        calc_coeffs(&mut coeffs[base + rtrim..base + 4], t, BASE_TAPS, ltrim, rtrim);
    }

    Ok(UpscalePlan { coeffs, borders })
}
