#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image cropping module.
pub mod crop;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallization utilities.
pub mod parallel;

/// image border padding module.
pub mod padding;

/// utility functions for resizing images.
pub mod resize;

/// image geometric transformations module.
pub mod warp;
