//! Pixel interpolation methods for image transformations.
//!
//! This module provides the interpolation algorithms used when resampling
//! images during geometric transformations like resizing or warping.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: Fastest, uses nearest pixel value (no interpolation)
//! - **Bilinear**: Linear interpolation between the 2x2 neighborhood
//! - **Bicubic**: Cubic convolution over the 4x4 neighborhood
//! - **Area**: Box average of the covered source pixels when shrinking
//! - **Lanczos4**: Windowed sinc over the 8x8 neighborhood

mod area;
mod bicubic;
mod bilinear;
mod lanczos;
mod nearest;

/// Grid generation and coordinate mapping utilities.
pub mod grid;

pub(crate) mod interpolate;

pub(crate) use area::area_interpolation;
pub use interpolate::{interpolate_pixel, BorderMode, InterpolationMode};
