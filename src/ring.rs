//! The vertical scanline ring buffer (spec §4.4).
//!
//! Holds the most recent `taps` horizontally-scaled float rows and, given the
//! absolute row index the current output row's filter window is centered on,
//! produces the indices of a "virtual strip" of exactly `taps` rows, with
//! out-of-range indices clamped to the source image's edges.

use crate::alloc::try_vec;
use crate::Error;

#[derive(Debug)]
pub(crate) struct RingBuffer {
    taps: usize,
    row_len: usize,
    data: Vec<f32>,
}

impl RingBuffer {
    pub(crate) fn new(taps: usize, row_len: usize) -> Result<Self, Error> {
        let data = try_vec(taps * row_len, 0f32)?;
        Ok(Self { taps, row_len, data })
    }

    /// The ring slot that absolute row `in_pos` is stored in, ready to be
    /// filled by the horizontal scaler.
    pub(crate) fn slot_mut(&mut self, in_pos: usize) -> &mut [f32] {
        let slot = in_pos % self.taps;
        &mut self.data[slot * self.row_len..(slot + 1) * self.row_len]
    }

    /// The row most recently stored at absolute row index `idx`.
    pub(crate) fn row(&self, idx: usize) -> &[f32] {
        let slot = idx % self.taps;
        &self.data[slot * self.row_len..(slot + 1) * self.row_len]
    }
}

/// The absolute source-row indices (not yet reduced modulo `taps`) the
/// vertical filter reads from to produce the output row whose filter window
/// is centered on `target`, clamped to `[0, hin - 1]`.
pub(crate) fn virtual_strip(target: isize, taps: usize, hin: usize) -> Vec<usize> {
    let max = hin as isize - 1;
    (0..taps as isize)
        .map(|i| (target - taps as isize + 1 + i).clamp(0, max) as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_clamps_to_top_edge() {
        let strip = virtual_strip(1, 4, 10);
        assert_eq!(strip, vec![0, 0, 0, 1]);
    }

    #[test]
    fn strip_clamps_to_bottom_edge() {
        let strip = virtual_strip(20, 4, 10);
        assert_eq!(strip, vec![9, 9, 9, 9]);
    }

    #[test]
    fn single_row_source_clamps_everywhere() {
        let strip = virtual_strip(0, 4, 1);
        assert_eq!(strip, vec![0, 0, 0, 0]);
    }

    #[test]
    fn ring_wraps_on_taps() {
        let mut ring = RingBuffer::new(4, 2).unwrap();
        for i in 0..6 {
            ring.slot_mut(i).copy_from_slice(&[i as f32, i as f32 * 2.0]);
        }
        // Slot for absolute row 4 overwrote the slot for absolute row 0.
        assert_eq!(ring.row(4), &[4.0, 8.0]);
        assert_eq!(ring.row(0), &[4.0, 8.0]);
        assert_eq!(ring.row(5), &[5.0, 10.0]);
    }
}
