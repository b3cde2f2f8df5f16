//! The scheduler: the pull-driven scaler state machine (spec §4.6).

use crate::alloc::try_vec;
use crate::colorspace::Colorspace;
use crate::plan::{build_hplan, calc_coeffs, split_map, tap_count, HPlan};
use crate::ring::{virtual_strip, RingBuffer};
use crate::horizontal::{scale_row_down, scale_row_up};
use crate::vertical::reduce_row;
use crate::{Error, MAX_DIMENSION};

/// Maps an output row position to the source row its vertical filter window
/// is centered on (`target`) and that row's subpixel offset (`ty`).
fn compute_target(hin: usize, hout: usize, taps: usize, pos: usize) -> (isize, f32) {
    let (smp_i, ty) = split_map(hin, hout, pos);
    (smp_i + taps as isize / 2, ty)
}

/// A streaming, colorspace-aware bicubic resampler.
///
/// Configured once with `(Hin, Hout, Win, Wout, colorspace)` via [`Scaler::new`]
/// and then driven with an alternating push/pull pattern: call
/// [`Scaler::slots_needed`] to find out how many input rows the next output
/// row requires, feed them with [`Scaler::push_row`], then call
/// [`Scaler::emit`] to produce the next output row.
///
/// `push_row` and `emit` are total functions of a correctly-driven state
/// machine: calling them out of turn (more input rows than `Hin`, an `emit`
/// before enough rows were pushed, an `emit` past `Hout`) is a programming
/// error and panics rather than returning a recoverable error — per the
/// design's `StateViolation` error kind, which is not part of the
/// recoverable `Result` surface.
#[derive(Debug)]
pub struct Scaler {
    hin: usize,
    hout: usize,
    win: usize,
    wout: usize,
    cs: Colorspace,
    ty_taps: usize,
    hplan: HPlan,
    ring: RingBuffer,
    coeffs_y: Vec<f32>,
    in_pos: usize,
    out_pos: usize,
    target: isize,
    ty: f32,
}

impl Scaler {
    /// Create a new scaler for the given source and destination dimensions
    /// and colorspace.
    ///
    /// Allocates the colorspace tables (lazily, once per process), the
    /// horizontal coefficient/border plan, and the vertical ring buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BadParam`] if any dimension is `0` or exceeds
    /// [`MAX_DIMENSION`]. Returns [`Error::OutOfMemory`] if an allocation
    /// fails.
    pub fn new(hin: usize, hout: usize, win: usize, wout: usize, cs: Colorspace) -> Result<Self, Error> {
        for dim in [hin, hout, win, wout] {
            if dim < 1 || dim > MAX_DIMENSION {
                return Err(Error::BadParam);
            }
        }

        crate::tables::global_init();

        let hplan = build_hplan(win, wout)?;
        let ty_taps = tap_count(hin, hout);
        let row_len = wout * cs.channels();
        let ring = RingBuffer::new(ty_taps, row_len)?;
        let coeffs_y = try_vec(ty_taps, 0f32)?;
        let (target, ty) = compute_target(hin, hout, ty_taps, 0);

        Ok(Self {
            hin,
            hout,
            win,
            wout,
            cs,
            ty_taps,
            hplan,
            ring,
            coeffs_y,
            in_pos: 0,
            out_pos: 0,
            target,
            ty,
        })
    }

    /// Input image height.
    pub fn in_height(&self) -> usize {
        self.hin
    }

    /// Output image height.
    pub fn out_height(&self) -> usize {
        self.hout
    }

    /// Input image width.
    pub fn in_width(&self) -> usize {
        self.win
    }

    /// Output image width.
    pub fn out_width(&self) -> usize {
        self.wout
    }

    /// The colorspace this scaler was configured with.
    pub fn colorspace(&self) -> Colorspace {
        self.cs
    }

    /// Number of input rows (0 or more) that must be pushed with
    /// [`Scaler::push_row`] before [`Scaler::emit`] may be called.
    ///
    /// A return of `0` means the next call may be `emit`.
    pub fn slots_needed(&self) -> usize {
        let tmp = self.target + 1;
        let safe_target = tmp.min(self.hin as isize);
        (safe_target - self.in_pos as isize).max(0) as usize
    }

    /// Ingest one input row of `Win * colorspace.channels()` bytes,
    /// horizontally scaling and buffering it into the vertical ring.
    ///
    /// # Panics
    ///
    /// Panics if `row.len()` does not match `Win * colorspace.channels()`,
    /// or if all `Hin` input rows have already been pushed.
    pub fn push_row(&mut self, row: &[u8]) {
        assert_eq!(row.len(), self.win * self.cs.channels(), "row length does not match Win * channels");
        assert!(self.in_pos < self.hin, "push_row called after all {} input rows were pushed", self.hin);

        let slot = self.ring.slot_mut(self.in_pos);
        match &self.hplan {
            HPlan::Down(p) => scale_row_down(self.cs, row, slot, &p.coeffs, &p.borders),
            HPlan::Up(p) => scale_row_up(self.cs, row, self.win, slot, &p.coeffs, &p.borders),
        }
        self.in_pos += 1;
    }

    /// Produce the next output row of `Wout * colorspace.channels()` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `out.len()` does not match `Wout * colorspace.channels()`,
    /// if all `Hout` output rows have already been emitted, or if
    /// [`Scaler::slots_needed`] is nonzero (not enough input rows have been
    /// pushed yet).
    pub fn emit(&mut self, out: &mut [u8]) {
        assert_eq!(out.len(), self.wout * self.cs.channels(), "out length does not match Wout * channels");
        assert!(self.out_pos < self.hout, "emit called after all {} output rows were produced", self.hout);
        assert_eq!(self.slots_needed(), 0, "emit called with {} input rows still needed", self.slots_needed());

        calc_coeffs(&mut self.coeffs_y, self.ty, self.ty_taps, 0, 0);
        let strip = virtual_strip(self.target, self.ty_taps, self.hin);
        reduce_row(self.cs, &self.ring, &strip, &self.coeffs_y, out);

        self.out_pos += 1;
        if self.out_pos < self.hout {
            let (target, ty) = compute_target(self.hin, self.hout, self.ty_taps, self.out_pos);
            self.target = target;
            self.ty = ty;
        }
    }

    /// Number of output rows produced so far.
    pub fn out_pos(&self) -> usize {
        self.out_pos
    }

    /// Number of input rows consumed so far.
    pub fn in_pos(&self) -> usize {
        self.in_pos
    }

    /// Whether all `Hout` output rows have been produced.
    pub fn is_done(&self) -> bool {
        self.out_pos == self.hout
    }
}
