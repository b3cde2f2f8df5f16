//! Fallible allocation helper.
//!
//! The spec requires every table, plan, and ring-buffer allocation to
//! surface [`Error::OutOfMemory`](crate::Error::OutOfMemory) rather than
//! abort the process. `Vec::try_reserve_exact` lets us detect an allocation
//! failure before committing to it.

use crate::Error;

pub(crate) fn try_vec<T: Clone>(len: usize, value: T) -> Result<Vec<T>, Error> {
    let mut v = Vec::new();
    v.try_reserve_exact(len).map_err(|_| Error::OutOfMemory)?;
    v.resize(len, value);
    Ok(v)
}
