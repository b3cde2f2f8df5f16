//! The vertical reducer and post-processor (spec §4.5).
//!
//! Applies a freshly computed 1-D Catmull-Rom coefficient row across the
//! ring buffer's virtual strip, channel by channel, unpremultiplies alpha,
//! and converts linear float back to output sRGB/plain 8-bit.

use crate::colorspace::Colorspace;
use crate::ring::RingBuffer;
use crate::tables::linear_to_srgb;

#[inline]
fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

#[inline]
fn clamp_round(x: f32) -> u8 {
    x.round().clamp(0.0, 255.0) as u8
}

pub(crate) fn reduce_row(cs: Colorspace, ring: &RingBuffer, strip: &[usize], coeffs: &[f32], out: &mut [u8]) {
    match cs {
        Colorspace::G => reduce_g(ring, strip, coeffs, out),
        Colorspace::Ga => reduce_ga(ring, strip, coeffs, out),
        Colorspace::Rgb => reduce_rgb(ring, strip, coeffs, out),
        Colorspace::Rgbx => reduce_rgbx(ring, strip, coeffs, out),
        Colorspace::Rgba => reduce_rgba(ring, strip, coeffs, out),
        Colorspace::Cmyk => reduce_cmyk(ring, strip, coeffs, out),
    }
}

fn reduce_g(ring: &RingBuffer, strip: &[usize], coeffs: &[f32], out: &mut [u8]) {
    for (i, byte) in out.iter_mut().enumerate() {
        let mut sum = 0.0f32;
        for (&idx, &coeff) in strip.iter().zip(coeffs) {
            sum += coeff * ring.row(idx)[i];
        }
        *byte = clamp_round(sum * 255.0);
    }
}

fn reduce_ga(ring: &RingBuffer, strip: &[usize], coeffs: &[f32], out: &mut [u8]) {
    let pixels = out.len() / 2;
    for p in 0..pixels {
        let (mut v, mut a) = (0.0f32, 0.0f32);
        for (&idx, &coeff) in strip.iter().zip(coeffs) {
            let row = ring.row(idx);
            v += coeff * row[p * 2];
            a += coeff * row[p * 2 + 1];
        }
        let alpha = clamp01(a);
        if alpha != 0.0 {
            v /= alpha;
        }
        out[p * 2] = clamp_round(v * 255.0);
        out[p * 2 + 1] = (alpha * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

fn reduce_rgb(ring: &RingBuffer, strip: &[usize], coeffs: &[f32], out: &mut [u8]) {
    let pixels = out.len() / 3;
    for p in 0..pixels {
        let mut sum = [0.0f32; 3];
        for (&idx, &coeff) in strip.iter().zip(coeffs) {
            let row = ring.row(idx);
            for (c, s) in sum.iter_mut().enumerate() {
                *s += coeff * row[p * 3 + c];
            }
        }
        for c in 0..3 {
            out[p * 3 + c] = linear_to_srgb(sum[c]);
        }
    }
}

fn reduce_rgbx(ring: &RingBuffer, strip: &[usize], coeffs: &[f32], out: &mut [u8]) {
    let pixels = out.len() / 4;
    for p in 0..pixels {
        let mut sum = [0.0f32; 3];
        for (&idx, &coeff) in strip.iter().zip(coeffs) {
            let row = ring.row(idx);
            for (c, s) in sum.iter_mut().enumerate() {
                *s += coeff * row[p * 4 + c];
            }
        }
        for c in 0..3 {
            out[p * 4 + c] = linear_to_srgb(sum[c]);
        }
        out[p * 4 + 3] = 0;
    }
}

fn reduce_rgba(ring: &RingBuffer, strip: &[usize], coeffs: &[f32], out: &mut [u8]) {
    let pixels = out.len() / 4;
    for p in 0..pixels {
        let mut sum = [0.0f32; 4];
        for (&idx, &coeff) in strip.iter().zip(coeffs) {
            let row = ring.row(idx);
            for (c, s) in sum.iter_mut().enumerate() {
                *s += coeff * row[p * 4 + c];
            }
        }
        let alpha = clamp01(sum[3]);
        if alpha != 0.0 {
            for s in sum.iter_mut().take(3) {
                *s /= alpha;
            }
        }
        for c in 0..3 {
            out[p * 4 + c] = linear_to_srgb(sum[c]);
        }
        out[p * 4 + 3] = (alpha * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

fn reduce_cmyk(ring: &RingBuffer, strip: &[usize], coeffs: &[f32], out: &mut [u8]) {
    let pixels = out.len() / 4;
    for p in 0..pixels {
        let mut sum = [0.0f32; 4];
        for (&idx, &coeff) in strip.iter().zip(coeffs) {
            let row = ring.row(idx);
            for (c, s) in sum.iter_mut().enumerate() {
                *s += coeff * row[p * 4 + c];
            }
        }
        for c in 0..4 {
            out[p * 4 + c] = clamp_round(sum[c] * 255.0);
        }
    }
}
