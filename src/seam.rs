// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam orientation and seam validation.

use crate::error::SeamError;
use itertools::Itertools;

// This is basically a reimplementation of `bool` and `not`, but it
// makes it much clearer in the code what I'm doing.

/// Which dimension a carve shrinks.  Carving the width removes a
/// vertical seam; carving the height removes a horizontal one.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Carve {
    Width,
    Height,
}

impl Carve {
    /// The other direction.
    pub fn turn(self) -> Self {
        match self {
            Carve::Width => Carve::Height,
            Carve::Height => Carve::Width,
        }
    }
}

/// Check a seam against an image before anything is cut.
///
/// `length` is the number of entries the seam must have (the height,
/// for a vertical seam) and `bound` is the exclusive upper limit on
/// every entry (the width, for a vertical seam).  Neighboring entries
/// may differ by at most one.  An empty seam is fine on an image
/// with no rows (for a vertical seam), as long as there is still a
/// column to take away.
pub fn validate_seam(seam: &[usize], length: usize, bound: usize) -> Result<(), SeamError> {
    if seam.len() != length {
        return Err(SeamError::invalid(format!(
            "seam has {} entries, expected {}",
            seam.len(),
            length
        )));
    }
    if let Some((i, &entry)) = seam.iter().enumerate().find(|&(_, &entry)| entry >= bound) {
        return Err(SeamError::invalid(format!(
            "seam entry {} is {}, outside 0..{}",
            i, entry, bound
        )));
    }
    // Only reachable with an empty seam; any entry would be out of range.
    if bound == 0 {
        return Err(SeamError::invalid("no lines left to remove"));
    }
    if let Some((i, (a, b))) = seam
        .iter()
        .tuple_windows()
        .enumerate()
        .find(|&(_, (&a, &b))| (a as isize - b as isize).abs() > 1)
    {
        return Err(SeamError::invalid(format!(
            "seam jumps from {} to {} between entries {} and {}",
            a,
            b,
            i,
            i + 1
        )));
    }
    Ok(())
}
