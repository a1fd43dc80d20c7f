// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! A [`SeamCarver`] owns a private copy of an image, computes the
//! dual-gradient energy of every pixel, finds the connected seam of
//! least total energy, and removes it, one column or one row at a
//! time.

pub mod ternary;

pub mod error;
pub use error::SeamError;

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;

pub mod pixelpairs;

pub mod energy;
pub use energy::{calculate_energy, energy_at};

pub mod energyimage;
pub use energyimage::energy_to_image;

pub mod seamfinder;
pub use seamfinder::{energy_to_vertical_seam, SeamFinder, ShortestPaths};

pub mod seam;
pub use seam::{validate_seam, Carve};

pub mod seamcarver;
pub use seamcarver::SeamCarver;
