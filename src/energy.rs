// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is its dual gradient: the squared color
//! distance between its left and right neighbors, plus the squared
//! color distance between its upper and lower neighbors, square
//! rooted.  The pixel itself never contributes.
//!
//! ```text
//!       |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!       |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!      e(x,y) = √(|Δx|²+|Δy|²)
//! ```
//!
//! The image is treated as a torus: the left neighbor of column 0 is
//! the last column, the upper neighbor of row 0 is the last row, and
//! so on.  On a one-pixel-wide image both horizontal neighbors are the
//! pixel itself.

use crate::cq;
use crate::error::SeamError;
use crate::pixelpairs::energy_of_pair;
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;

// No bounds checking; callers guarantee (x, y) is inside the image.
fn dual_gradient(pixels: &TwoDimensionalMap<u32>, x: usize, y: usize) -> f64 {
    let (width, height) = pixels.dimensions();
    let (left, right, up, down) = (
        cq!(x == 0, width - 1, x - 1),
        cq!(x == width - 1, 0, x + 1),
        cq!(y == 0, height - 1, y - 1),
        cq!(y == height - 1, 0, y + 1),
    );
    let delta_x = energy_of_pair(pixels[(left, y)], pixels[(right, y)]);
    let delta_y = energy_of_pair(pixels[(x, up)], pixels[(x, down)]);
    f64::from(delta_x + delta_y).sqrt()
}

/// The energy of the pixel at column `x`, row `y` of a packed pixel
/// grid.  Fails if the address lies outside the grid.
pub fn energy_at(pixels: &TwoDimensionalMap<u32>, x: usize, y: usize) -> Result<f64, SeamError> {
    let (width, height) = pixels.dimensions();
    if x >= width {
        return Err(SeamError::invalid(format!(
            "column {} is outside 0..{}",
            x, width
        )));
    }
    if y >= height {
        return Err(SeamError::invalid(format!(
            "row {} is outside 0..{}",
            y, height
        )));
    }
    Ok(dual_gradient(pixels, x, y))
}

// Image -> Energy Map

/// Compute the energy of every pixel in a packed pixel grid.  The map
/// is always computed fresh; nothing is cached between seams.
pub fn calculate_energy(pixels: &TwoDimensionalMap<u32>) -> TwoDimensionalMap<f64> {
    let (width, height) = pixels.dimensions();
    let mut emap = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = dual_gradient(pixels, x, y);
    }
    emap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixelpairs::pack_rgb;

    // A 3x4 image whose red channel is constant; the interesting
    // energies are easy to check by hand.
    fn three_by_four() -> TwoDimensionalMap<u32> {
        let rows: [[(u8, u8, u8); 3]; 4] = [
            [(255, 101, 51), (255, 101, 153), (255, 101, 255)],
            [(255, 153, 51), (255, 153, 153), (255, 153, 255)],
            [(255, 203, 51), (255, 204, 153), (255, 205, 255)],
            [(255, 255, 51), (255, 255, 153), (255, 255, 255)],
        ];
        let data = rows
            .iter()
            .flat_map(|row| row.iter().map(|&(r, g, b)| pack_rgb(r, g, b)))
            .collect();
        TwoDimensionalMap::from_vec(3, 4, data).unwrap()
    }

    const THREE_BY_FOUR_SQUARED: [u32; 12] = [
        20808, 52020, 20808, 20808, 52225, 21220, 20809, 52024, 20809, 20808, 52225, 21220,
    ];

    #[test]
    fn energy_generator_works() {
        let energy = calculate_energy(&three_by_four());
        let expected: Vec<f64> = THREE_BY_FOUR_SQUARED
            .iter()
            .map(|&e| f64::from(e).sqrt())
            .collect();
        assert_eq!(energy.as_slice(), &expected[..]);
    }

    #[test]
    fn interior_pixel_uses_its_four_neighbors() {
        let energy = energy_at(&three_by_four(), 1, 2).unwrap();
        assert_eq!(energy, 52024f64.sqrt());
    }

    #[test]
    fn border_pixel_wraps_around() {
        // The upper neighbor of (1, 0) is (1, 3), not (1, 0).
        let energy = energy_at(&three_by_four(), 1, 0).unwrap();
        assert_eq!(energy, 52020f64.sqrt());
    }

    #[test]
    fn single_row_wraps_instead_of_clamping() {
        let row = vec![pack_rgb(10, 20, 30), pack_rgb(40, 50, 60), pack_rgb(200, 0, 5)];
        let pixels = TwoDimensionalMap::from_vec(3, 1, row).unwrap();
        let energy = calculate_energy(&pixels);
        assert_eq!(energy.as_slice(), &[31125f64.sqrt(), 37125f64.sqrt(), 2700f64.sqrt()]);
    }

    #[test]
    fn single_pixel_is_its_own_neighbor() {
        let pixels = TwoDimensionalMap::from_vec(1, 1, vec![pack_rgb(80, 80, 80)]).unwrap();
        assert_eq!(energy_at(&pixels, 0, 0).unwrap(), 0.0);
    }

    #[test]
    fn energies_are_never_negative() {
        let energy = calculate_energy(&three_by_four());
        assert!(energy.as_slice().iter().all(|&e| e >= 0.0));
    }

    #[test]
    fn out_of_range_addresses_are_rejected() {
        let pixels = three_by_four();
        assert!(energy_at(&pixels, 3, 0).is_err());
        assert!(energy_at(&pixels, 0, 4).is_err());
        let empty: TwoDimensionalMap<u32> = TwoDimensionalMap::new(0, 0);
        assert!(energy_at(&empty, 0, 0).is_err());
    }
}
