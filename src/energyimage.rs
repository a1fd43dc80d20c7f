// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Energy Map -> Image
//!
//! Renders an energy map as a greyscale picture, which is mostly
//! useful for seeing where the carver thinks the content is.

use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, Luma};

/// Scale every energy so the largest maps to 255.  An all-zero map
/// renders black.
pub fn energy_to_image(energy: &TwoDimensionalMap<f64>) -> GrayImage {
    let (width, height) = energy.dimensions();
    let factor = energy.as_slice().iter().cloned().fold(0.0, f64::max);
    GrayImage::from_fn(width as u32, height as u32, |x, y| {
        let e = energy[(x as usize, y as usize)];
        let level = if factor > 0.0 {
            (e * 255.0 / factor).round().min(255.0) as u8
        } else {
            0
        };
        Luma([level])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightest_pixel_is_the_most_energetic() {
        let energy = TwoDimensionalMap::from_vec(3, 1, vec![0.0, 5.0, 10.0]).unwrap();
        let image = energy_to_image(&energy);
        assert_eq!(image.dimensions(), (3, 1));
        assert_eq!(image.into_raw(), vec![0, 128, 255]);
    }

    #[test]
    fn flat_energy_is_black() {
        let energy = TwoDimensionalMap::filled(2, 2, 0.0);
        assert_eq!(energy_to_image(&energy).into_raw(), vec![0; 4]);
    }
}
