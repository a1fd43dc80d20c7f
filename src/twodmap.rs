// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A row-major, two-dimensional field of values.
//!
//! The same container holds every grid in the carver: the packed
//! pixels themselves, the energy map, and the distance and
//! back-pointer tables of the seam search.

use crate::error::SeamError;
use itertools::iproduct;
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field.  Addresses are always
/// `(x, y)`, that is, `(column, row)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: usize,
    height: usize,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A new map with every cell set to `P::default()`.
    pub fn new(width: usize, height: usize) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width * height],
        }
    }

    /// A new map with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: P) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Wrap an existing row-major buffer.  The buffer must hold exactly
    /// `width * height` values.
    pub fn from_vec(width: usize, height: usize, data: Vec<P>) -> Result<Self, SeamError> {
        if data.len() != width * height {
            return Err(SeamError::invalid(format!(
                "buffer holds {} values, but a {}x{} map needs {}",
                data.len(),
                width,
                height,
                width * height
            )));
        }
        Ok(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    // Keep the index math in one place and never, ever mess with it
    // anywhere else.
    fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get the value at a single cell's address
    pub fn get_pt(&self, x: usize, y: usize) -> P {
        self.data[self.get_index(x, y)]
    }

    /// Set a value at a single cell's address
    pub fn put_pt(&mut self, x: usize, y: usize, value: P) {
        let index = self.get_index(x, y);
        self.data[index] = value;
    }

    /// One row, as a contiguous slice.
    pub fn row(&self, y: usize) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width]
    }

    /// The whole field, row-major.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    /// Swap rows and columns: the value at `(x, y)` lands at `(y, x)`
    /// of a `height x width` map.
    pub fn transposed(&self) -> Self {
        TwoDimensionalMap {
            width: self.height,
            height: self.width,
            data: iproduct!(0..self.width, 0..self.height)
                .map(|(x, y)| self.get_pt(x, y))
                .collect(),
        }
    }

    /// A copy of this map one column narrower, with the cell at
    /// `(seam[y], y)` dropped from every row `y`.  The seam must
    /// already have been validated against this map's dimensions.
    pub fn without_vertical_seam(&self, seam: &[usize]) -> Self {
        debug_assert!(self.width > 0 && seam.len() == self.height);
        let width = self.width - 1;
        let mut data = Vec::with_capacity(width * self.height);
        for (y, &col) in seam.iter().enumerate() {
            let row = self.row(y);
            data.extend_from_slice(&row[..col]);
            data.extend_from_slice(&row[col + 1..]);
        }
        TwoDimensionalMap {
            width,
            height: self.height,
            data,
        }
    }
}

impl<P: Default + Copy> Index<(usize, usize)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (usize, usize)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(usize, usize)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
