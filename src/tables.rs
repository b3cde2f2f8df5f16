//! Process-wide sRGB <-> linear conversion tables.
//!
//! The tables are immutable once built and shared by every [`crate::Scaler`]
//! in the process. They are built exactly once, guarded by a
//! [`std::sync::OnceLock`], either lazily on first use or eagerly via
//! [`global_init`].

use std::sync::OnceLock;

struct Tables {
    /// `srgb_to_linear[i]` is the linear-space value of 8-bit sRGB sample `i`.
    srgb_to_linear: [f32; 256],
    /// `l2s_rights[i]` is the linear-domain right boundary for output sample
    /// `i`: the linear value halfway between sRGB samples `i` and `i+1`.
    l2s_rights: [f32; 256],
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(build)
}

fn srgb_decode(srgb_f: f64) -> f64 {
    if srgb_f <= 0.040_448_236_277_1082 {
        srgb_f / 12.92
    } else {
        ((srgb_f + 0.055) / 1.055).powf(2.4)
    }
}

fn build() -> Tables {
    log::trace!("building sRGB <-> linear conversion tables");

    let mut srgb_to_linear = [0f32; 256];
    for (i, slot) in srgb_to_linear.iter_mut().enumerate() {
        *slot = srgb_decode(i as f64 / 255.0) as f32;
    }

    let mut l2s_rights = [0f32; 256];
    for (i, slot) in l2s_rights.iter_mut().enumerate().take(255) {
        *slot = srgb_decode((i as f64 + 0.5) / 255.0) as f32;
    }
    l2s_rights[255] = 256.0;

    Tables { srgb_to_linear, l2s_rights }
}

/// Force the one-time table build now, instead of on first use.
///
/// Only needed when a caller wants to avoid paying the (single) build cost on
/// the first call to [`crate::Scaler::new`], e.g. to keep it off a latency
/// sensitive path. Safe to call from multiple threads or multiple times.
pub fn global_init() {
    tables();
}

/// Convert an 8-bit sRGB sample to a linear float in `[0, 1]`.
#[inline]
pub(crate) fn srgb_to_linear(sample: u8) -> f32 {
    tables().srgb_to_linear[sample as usize]
}

/// Convert a linear float back to an 8-bit sRGB sample, rounding to nearest.
///
/// Implemented as an 8-step binary descent over `l2s_rights`, per the
/// round-to-nearest mapping described in the design: index `i` is chosen
/// whenever `x <= l2s_rights[i]`.
#[inline]
pub(crate) fn linear_to_srgb(x: f32) -> u8 {
    let rights = &tables().l2s_rights;
    let mut offs = 0usize;
    let mut step = 128usize;
    while step > 0 {
        if x > rights[offs + step] {
            offs += step;
        }
        step >>= 1;
    }
    if x > rights[offs] {
        (offs + 1) as u8
    } else {
        offs as u8
    }
}
