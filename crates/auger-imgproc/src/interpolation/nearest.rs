use super::interpolate::{fetch, BorderMode};
use auger_image::{Image, ImageDtype};

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `border` - How a position outside the image is resolved.
///
/// # Returns
///
/// The pixel values of the closest source pixel.
pub(crate) fn nearest_neighbor_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
    border: &BorderMode<C>,
) -> [f32; C] {
    fetch(image, u.round() as isize, v.round() as isize, border)
}
