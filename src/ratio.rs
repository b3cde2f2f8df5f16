//! The aspect-ratio fitting helper (spec §6), specified by contract only:
//! the out-of-core caller-facing collaborators (codecs, CLIs) are not part
//! of the core, but this numeric contract is small enough, and useful enough
//! to test alongside the core, to carry in-tree.

use crate::Error;

/// Reduce exactly one of `*out_width`/`*out_height` so the resulting ratio
/// matches `src_width / src_height`, within integer rounding. Both outputs
/// are clamped to `>= 1`.
///
/// # Errors
///
/// Returns [`Error::BadParam`] if any input is non-positive. Returns
/// [`Error::OutOfRange`] if the adjusted dimension would exceed the platform
/// integer range.
pub fn fix_ratio(src_width: i64, src_height: i64, out_width: &mut i64, out_height: &mut i64) -> Result<(), Error> {
    if src_width < 1 || src_height < 1 || *out_width < 1 || *out_height < 1 {
        return Err(Error::BadParam);
    }

    let width_ratio = *out_width as f64 / src_width as f64;
    let height_ratio = *out_height as f64 / src_height as f64;

    let (adjusted, adjust_height) = if width_ratio < height_ratio {
        ((width_ratio * src_height as f64).round(), true)
    } else {
        ((height_ratio * src_width as f64).round(), false)
    };

    if adjusted > i64::MAX as f64 {
        return Err(Error::OutOfRange);
    }

    let adjusted = if adjusted as i64 == 0 { 1 } else { adjusted as i64 };
    if adjust_height {
        *out_height = adjusted;
    } else {
        *out_width = adjusted;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_wider_than_tall_ratio() {
        let mut w = 1000;
        let mut h = 1000;
        fix_ratio(1920, 1080, &mut w, &mut h).unwrap();
        assert_eq!(w, 1000);
        assert_eq!(h, 563);
    }

    #[test]
    fn preserves_taller_than_wide_ratio() {
        let mut w = 1000;
        let mut h = 1000;
        fix_ratio(1080, 1920, &mut w, &mut h).unwrap();
        assert_eq!(w, 563);
        assert_eq!(h, 1000);
    }

    #[test]
    fn clamps_adjusted_dimension_to_at_least_one() {
        let mut w = 1;
        let mut h = 1000;
        fix_ratio(1000, 1, &mut w, &mut h).unwrap();
        assert_eq!(h, 1);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let mut w = 10;
        let mut h = 10;
        assert_eq!(fix_ratio(0, 10, &mut w, &mut h).unwrap_err(), Error::BadParam);
        assert_eq!(fix_ratio(10, 10, &mut w, &mut 0).unwrap_err(), Error::BadParam);
    }
}
