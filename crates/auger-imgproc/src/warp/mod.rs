//! Affine warping of images.
//!
//! A warp is described by a 2x3 matrix mapping source coordinates to
//! destination coordinates. [`warp_affine`] inverts it and samples the source
//! for every destination pixel, so the destination size is free.
//!
//! ```
//! use auger_imgproc::warp::{get_rotation_matrix2d, transform_point};
//!
//! // a rotation keeps its center in place
//! let m = get_rotation_matrix2d((16.0, 8.0), 30.0, 1.0);
//! let (u, v) = transform_point(16.0, 8.0, &m);
//! assert!((u - 16.0).abs() < 1e-4 && (v - 8.0).abs() < 1e-4);
//! ```

mod affine;

pub use affine::{get_rotation_matrix2d, invert_affine_transform, transform_point, warp_affine};
