// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarver - the owned image and everything done to it
//!
//! The carver takes a private copy of the caller's image and never
//! hands out a reference to it.  Every removal builds a replacement
//! grid and swaps it in whole.  Horizontal seams are found and removed
//! by transposing the grid and reusing the vertical machinery, so the
//! row-removal logic is written exactly once.

use crate::energy::{calculate_energy, energy_at};
use crate::error::SeamError;
use crate::pixelpairs::{pack_pixel, to_rgb_pixel};
use crate::seam::{validate_seam, Carve};
use crate::seamfinder::{energy_to_vertical_seam, SeamFinder};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive, RgbImage};
use log::{debug, trace};

/// A struct for holding the image to be carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    pixels: TwoDimensionalMap<u32>,
}

impl SeamCarver {
    /// Creates a new SeamCarver from a deep copy of any image the
    /// `image` crate can view.
    pub fn new<I, P, S>(image: &I) -> Self
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = image.dimensions();
        let mut pixels = TwoDimensionalMap::new(width as usize, height as usize);
        image
            .pixels()
            .for_each(|(x, y, p)| pixels[(x as usize, y as usize)] = pack_pixel(&p));
        SeamCarver { pixels }
    }

    /// Creates a new SeamCarver from a row-major buffer of packed
    /// `0xRRGGBB` colors.  Anything above the low 24 bits is dropped.
    pub fn from_packed(width: usize, height: usize, data: Vec<u32>) -> Result<Self, SeamError> {
        let data = data.into_iter().map(|c| c & 0x00FF_FFFF).collect();
        Ok(SeamCarver {
            pixels: TwoDimensionalMap::from_vec(width, height, data)?,
        })
    }

    /// A fresh copy of the current image.
    pub fn picture(&self) -> RgbImage {
        RgbImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            to_rgb_pixel(self.pixels[(x as usize, y as usize)])
        })
    }

    /// A fresh copy of the current image as packed colors, row-major.
    pub fn packed(&self) -> Vec<u32> {
        self.pixels.as_slice().to_vec()
    }

    /// Width of the current image.
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// Height of the current image.
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Energy of the pixel at column `x` and row `y`.
    pub fn energy(&self, x: usize, y: usize) -> Result<f64, SeamError> {
        energy_at(&self.pixels, x, y)
    }

    /// The energy of every pixel in the current image.
    pub fn energy_map(&self) -> TwoDimensionalMap<f64> {
        calculate_energy(&self.pixels)
    }

    /// Remove one pixel from every row, at the column given by the
    /// seam.  The width shrinks by one.
    pub fn remove_vertical_seam(&mut self, seam: &[usize]) -> Result<(), SeamError> {
        validate_seam(seam, self.height(), self.width())?;
        self.pixels = self.pixels.without_vertical_seam(seam);
        debug!("removed vertical seam, now {}x{}", self.width(), self.height());
        Ok(())
    }

    /// Remove one pixel from every column, at the row given by the
    /// seam.  The height shrinks by one.
    pub fn remove_horizontal_seam(&mut self, seam: &[usize]) -> Result<(), SeamError> {
        validate_seam(seam, self.width(), self.height())?;
        self.pixels = self
            .pixels
            .transposed()
            .without_vertical_seam(seam)
            .transposed();
        debug!("removed horizontal seam, now {}x{}", self.width(), self.height());
        Ok(())
    }

    /// Find and remove the cheapest seam in one direction.
    pub fn carve_once(&mut self, direction: Carve) -> Result<(), SeamError> {
        match direction {
            Carve::Width => {
                let seam = self.find_vertical_seam()?;
                self.remove_vertical_seam(&seam)?;
            }
            Carve::Height => {
                let seam = self.find_horizontal_seam()?;
                self.remove_horizontal_seam(&seam)?;
            }
        }
        debug!("carve {:?}: {}x{}", direction, self.width(), self.height());
        Ok(())
    }

    // This is absurdly inefficient, as the entire energy map and
    // shortest-path table is recalculated for every seam.

    /// Given a desired new width and height, repeatedly carve seams
    /// out of the image.  While both dimensions are too large the
    /// carves alternate, starting with the width; then whichever
    /// dimension is left is carved on its own.  Both targets must be
    /// at least one pixel.
    pub fn carve(&mut self, new_width: usize, new_height: usize) -> Result<(), SeamError> {
        if self.width() < new_width || self.height() < new_height {
            return Err(SeamError::invalid(format!(
                "cannot carve a {}x{} image up to {}x{}",
                self.width(),
                self.height(),
                new_width,
                new_height
            )));
        }
        if new_width == 0 || new_height == 0 {
            return Err(SeamError::invalid("cannot carve an image down to nothing"));
        }
        let mut direction = Carve::Width;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
        }
        while self.width() > new_width {
            self.carve_once(Carve::Width)?;
        }
        while self.height() > new_height {
            self.carve_once(Carve::Height)?;
        }
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_vertical_seam(&self) -> Result<Vec<usize>, SeamError> {
        let seam = energy_to_vertical_seam(&calculate_energy(&self.pixels))?;
        trace!("vertical seam {:?}", seam);
        Ok(seam)
    }

    fn find_horizontal_seam(&self) -> Result<Vec<usize>, SeamError> {
        let seam = energy_to_vertical_seam(&calculate_energy(&self.pixels.transposed()))?;
        trace!("horizontal seam {:?}", seam);
        Ok(seam)
    }
}
