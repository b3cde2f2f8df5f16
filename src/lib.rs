//! A streaming, high-quality image resampler.
//!
//! Converts a raster image of dimensions `(Win, Hin)` into one of dimensions
//! `(Wout, Hout)` in a single forward pass, without ever materializing the
//! full source or destination in memory. The resampler is colorspace-aware:
//! it linearizes sRGB and premultiplies alpha before filtering so that
//! resized edges are free of dark halos, and treats grayscale and CMYK as
//! plain channel data.
//!
//! # Examples
//!
//! ```
//! use oil_resample::{Colorspace, Scaler};
//!
//! let (w1, h1) = (4, 4);
//! let (w2, h2) = (7, 7);
//! let mut scaler = Scaler::new(h1, h2, w1, w2, Colorspace::G).unwrap();
//!
//! let src = vec![0u8; w1 * h1];
//! let mut dst = vec![0u8; w2 * h2];
//!
//! let mut row = 0;
//! let mut out_row = vec![0u8; w2];
//! while !scaler.is_done() {
//!     while scaler.slots_needed() > 0 {
//!         scaler.push_row(&src[row * w1..(row + 1) * w1]);
//!         row += 1;
//!     }
//!     scaler.emit(&mut out_row);
//!     let y = scaler.out_pos() - 1;
//!     dst[y * w2..(y + 1) * w2].copy_from_slice(&out_row);
//! }
//! ```
#![deny(missing_docs)]

mod alloc;
mod colorspace;
mod error;
mod horizontal;
mod io;
mod plan;
mod ratio;
mod ring;
mod scaler;
mod tables;
mod vertical;

pub use colorspace::Colorspace;
pub use error::Error;
pub use io::{PpmReader, PpmWriter, RowSink, RowSource, SliceRowSink, SliceRowSource};
pub use ratio::fix_ratio;
pub use scaler::Scaler;
pub use tables::global_init;

/// Largest input or output dimension accepted by [`Scaler::new`] or
/// [`fix_ratio`].
///
/// Beyond this, single-precision floats lose the precision needed for
/// correct coefficient rounding, and 32-bit row-length arithmetic risks
/// overflow.
pub const MAX_DIMENSION: usize = 1_000_000;
