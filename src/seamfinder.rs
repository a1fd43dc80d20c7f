// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Energy Map -> Seam
//!
//! Under the seam adjacency (every pixel feeds the three pixels below
//! it) the image is a DAG layered by row, so a single top-to-bottom
//! relaxation pass finds every shortest path from the top row.  Each
//! cell of the table records the cheapest accumulated energy that can
//! reach it, and the column in the row above that it came from.

use crate::error::SeamError;
use crate::twodmap::TwoDimensionalMap;
use itertools::Itertools;

/// This trait defines how we will ask for seams.  A seam is a vector
/// of indices: for a vertical seam, the column to remove in each row;
/// for a horizontal seam, the row to remove in each column.
pub trait SeamFinder {
    /// Request a top-to-bottom seam, one column index per row.
    fn find_vertical_seam(&self) -> Result<Vec<usize>, SeamError>;

    /// Request a left-to-right seam, one row index per column.
    fn find_horizontal_seam(&self) -> Result<Vec<usize>, SeamError>;
}

/// One cell of the shortest-path table: the distance to this pixel,
/// and the column in the row above it was reached from.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub(crate) struct EnergyAndBackPointer {
    pub energy: f64,
    pub parent: usize,
}

const UNREACHED: EnergyAndBackPointer = EnergyAndBackPointer {
    energy: f64::INFINITY,
    parent: 0,
};

/// The distance and back-pointer tables for one seam search.  They
/// live only as long as the search that built them.
#[derive(Debug)]
pub struct ShortestPaths {
    table: TwoDimensionalMap<EnergyAndBackPointer>,
}

impl ShortestPaths {
    /// Relax every pixel of the energy map, top row to bottom.
    pub fn compute(energy: &TwoDimensionalMap<f64>) -> Result<Self, SeamError> {
        let (width, height) = energy.dimensions();
        if width == 0 || height == 0 {
            return Err(SeamError::invalid(format!(
                "a {}x{} image has no seams",
                width, height
            )));
        }

        let mut table = TwoDimensionalMap::filled(width, height, UNREACHED);

        // Populate the first row with their native energies.
        for x in 0..width {
            table[(x, 0)].energy = energy[(x, 0)];
        }

        // For every row but the last, push each pixel's distance down
        // to the three pixels beneath it.  Strict less-than: on a tie
        // the leftmost parent, which is relaxed first, keeps the cell.
        for y in 0..height - 1 {
            for x in 0..width {
                relax(&mut table, energy, x, y, x);
                if x + 1 < width {
                    relax(&mut table, energy, x, y, x + 1);
                }
                if x > 0 {
                    relax(&mut table, energy, x, y, x - 1);
                }
            }
        }

        Ok(ShortestPaths { table })
    }

    /// The least accumulated energy of any path from the top row to
    /// `(x, y)`.
    pub fn distance(&self, x: usize, y: usize) -> f64 {
        self.table[(x, y)].energy
    }

    /// The column in row `y - 1` that the best path to `(x, y)` came
    /// from.  Meaningless for the top row.
    pub fn parent(&self, x: usize, y: usize) -> usize {
        self.table[(x, y)].parent
    }

    /// The bottom-row column with the least distance.  Ties go to the
    /// lowest column.
    pub fn min_bottom_column(&self) -> usize {
        let bottom = self.table.height() - 1;
        self.table
            .row(bottom)
            .iter()
            .position_min_by(|a, b| a.energy.total_cmp(&b.energy))
            .unwrap_or(0)
    }

    /// Working backwards from `(column, bottom row)`, collect the
    /// column of every row on the path, then reverse so the seam
    /// reads top to bottom.
    pub fn seam_ending_at(&self, column: usize) -> Vec<usize> {
        let height = self.table.height();
        let mut seam_col = column;
        (0..height)
            .rev()
            .fold(Vec::with_capacity(height), |mut acc, y| {
                acc.push(seam_col);
                seam_col = self.table[(seam_col, y)].parent;
                acc
            })
            .into_iter()
            .rev()
            .collect()
    }
}

fn relax(
    table: &mut TwoDimensionalMap<EnergyAndBackPointer>,
    energy: &TwoDimensionalMap<f64>,
    x: usize,
    y: usize,
    to: usize,
) {
    let candidate = table[(x, y)].energy + energy[(to, y + 1)];
    if candidate < table[(to, y + 1)].energy {
        table[(to, y + 1)] = EnergyAndBackPointer {
            energy: candidate,
            parent: x,
        };
    }
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.
pub fn energy_to_vertical_seam(energy: &TwoDimensionalMap<f64>) -> Result<Vec<usize>, SeamError> {
    let paths = ShortestPaths::compute(energy)?;
    Ok(paths.seam_ending_at(paths.min_bottom_column()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENERGY_DATA: [f64; 20] = [
        9., 9., 0., 9., 9., 9., 1., 9., 8., 9., 9., 9., 9., 9., 0., 9., 9., 9., 0., 9.,
    ];

    fn energies() -> TwoDimensionalMap<f64> {
        TwoDimensionalMap::from_vec(5, 4, ENERGY_DATA.to_vec()).unwrap()
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        assert_eq!(energy_to_vertical_seam(&energies()).unwrap(), [2, 3, 4, 3]);
    }

    #[test]
    fn energy_grid_to_horizontal_seam_by_transposition() {
        let flipped = energies().transposed();
        assert_eq!(energy_to_vertical_seam(&flipped).unwrap(), [0, 1, 0, 1, 2]);
    }

    #[test]
    fn seam_cost_is_the_bottom_row_minimum() {
        let energy = energies();
        let paths = ShortestPaths::compute(&energy).unwrap();
        let column = paths.min_bottom_column();
        let seam = paths.seam_ending_at(column);
        let total = seam
            .iter()
            .enumerate()
            .fold(0.0, |acc, (y, &x)| acc + energy[(x, y)]);
        assert_eq!(total, paths.distance(column, 3));
        assert_eq!(total, 8.0);
        for x in 0..5 {
            assert!(paths.distance(x, 3) >= total);
        }
    }

    #[test]
    fn back_pointers_stay_adjacent() {
        let paths = ShortestPaths::compute(&energies()).unwrap();
        for (x, y) in itertools::iproduct!(0..5usize, 1..4usize) {
            let parent = paths.parent(x, y);
            assert!(parent + 1 >= x && parent <= x + 1);
        }
    }

    #[test]
    fn flat_energy_prefers_the_leftmost_column() {
        let flat = TwoDimensionalMap::filled(3, 3, 0.0);
        assert_eq!(energy_to_vertical_seam(&flat).unwrap(), [0, 0, 0]);
    }

    #[test]
    fn bottom_row_ties_go_to_the_lowest_column() {
        let energy =
            TwoDimensionalMap::from_vec(4, 2, vec![5., 1., 5., 1., 3., 2., 2., 9.]).unwrap();
        let paths = ShortestPaths::compute(&energy).unwrap();
        assert_eq!(paths.distance(1, 1), 3.0);
        assert_eq!(paths.distance(2, 1), 3.0);
        assert_eq!(paths.min_bottom_column(), 1);
        assert_eq!(paths.seam_ending_at(1), [1, 1]);
    }

    #[test]
    fn single_row_picks_the_cheapest_pixel() {
        let energy = TwoDimensionalMap::from_vec(3, 1, vec![4., 2., 2.]).unwrap();
        assert_eq!(energy_to_vertical_seam(&energy).unwrap(), [1]);
    }

    #[test]
    fn empty_maps_have_no_seam() {
        assert!(energy_to_vertical_seam(&TwoDimensionalMap::new(0, 3)).is_err());
        assert!(energy_to_vertical_seam(&TwoDimensionalMap::new(3, 0)).is_err());
    }
}
