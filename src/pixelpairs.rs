// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Packed colors, and the energy of a pixel pair
//!
//! The carver keeps every pixel as a single `0xRRGGBB` word.  Given
//! two such pixels, the energy between them is the classic squared
//! distance between their colors:
//!
//! ```text
//!        |Δ|² = (Δr)² + (Δg)² + (Δb)²
//! ```

use image::{Pixel, Primitive, Rgb};
use num_traits::cast;
use std::iter::zip;

/// Pack three 8-bit channels into a single `0xRRGGBB` word.
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Split a packed word back into its red, green and blue channels.
#[inline]
pub fn unpack_rgb(color: u32) -> [u8; 3] {
    [
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    ]
}

// Rescale any subpixel to eight bits.  For `u8` images this is an
// exact identity; 16-bit and floating-point images are mapped from
// their nominal range onto 0..=255.
fn channel_to_u8<S: Primitive>(channel: S) -> u8 {
    let value = cast::<S, f64>(channel).unwrap_or(0.0);
    let max = cast::<S, f64>(S::DEFAULT_MAX_VALUE).unwrap_or(255.0);
    let scaled = (value * 255.0 / max).round().max(0.0).min(255.0);
    cast::<f64, u8>(scaled).unwrap_or(0)
}

/// Pixel -> packed color
///
/// Converts any `image` pixel (grey, RGB, with or without alpha, any
/// subpixel depth) to a packed RGB word.  Alpha is dropped.
pub fn pack_pixel<P, S>(pixel: &P) -> u32
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let Rgb([r, g, b]) = pixel.to_rgb();
    pack_rgb(channel_to_u8(r), channel_to_u8(g), channel_to_u8(b))
}

/// Packed color -> `image` pixel
#[inline]
pub fn to_rgb_pixel(color: u32) -> Rgb<u8> {
    Rgb(unpack_rgb(color))
}

/// (Pixel, Pixel) -> squared gradient
///
/// Maps the difference between each channel of two packed colors,
/// squares it, and sums them all up.
#[inline]
pub fn energy_of_pair(p1: u32, p2: u32) -> u32 {
    zip(unpack_rgb(p1), unpack_rgb(p2))
        .map(|(c1, c2)| {
            let delta = i32::from(c1) - i32::from(c2);
            (delta * delta) as u32
        })
        .sum()
}
