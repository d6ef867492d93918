use auger_image::{Image, ImageDtype, ImageError};

use crate::interpolation::{
    grid::meshgrid_from_fn, interpolate_pixel, BorderMode, InterpolationMode,
};
use crate::parallel;

/// Inverse of a row-major 2x3 affine matrix.
///
/// A singular matrix has no inverse; its linear part becomes zero and every
/// point maps onto the negated translation.
pub fn invert_affine_transform(m: &[f32; 6]) -> [f32; 6] {
    let [m00, m01, tx, m10, m11, ty] = *m;

    let det = m00 * m11 - m01 * m10;
    let inv_det = if det == 0.0 { 0.0 } else { det.recip() };

    let i00 = m11 * inv_det;
    let i01 = -m01 * inv_det;
    let i10 = -m10 * inv_det;
    let i11 = m00 * inv_det;

    [
        i00,
        i01,
        -(i00 * tx + i01 * ty),
        i10,
        i11,
        -(i10 * tx + i11 * ty),
    ]
}

/// Rotation by `angle` degrees around `center`, scaled by `scale`.
///
/// With `a = scale * cos(angle)` and `b = scale * sin(angle)` the matrix is
/// `[a, b, (1 - a) * cx - b * cy; -b, a, b * cx + (1 - a) * cy]`, which keeps
/// `center` fixed. Positive angles turn counter-clockwise on screen.
pub fn get_rotation_matrix2d(center: (f32, f32), angle: f32, scale: f32) -> [f32; 6] {
    let (sin, cos) = angle.to_radians().sin_cos();
    let (a, b) = (scale * cos, scale * sin);
    let (cx, cy) = center;

    [a, b, (1.0 - a) * cx - b * cy, -b, a, b * cx + (1.0 - a) * cy]
}

/// Map the point `(x, y)` through `m`.
#[inline]
pub fn transform_point(x: f32, y: f32, m: &[f32; 6]) -> (f32, f32) {
    (m[0] * x + m[1] * y + m[2], m[3] * x + m[4] * y + m[5])
}

/// Warp `src` into `dst` with the forward matrix `m`.
///
/// Each pixel of `dst` is pulled back into `src` through the inverse of `m` and
/// sampled with `interpolation`; the size of `dst` is the output canvas. Taps
/// outside `src` are resolved by `border`, so [`BorderMode::Constant`] paints
/// the exposed canvas with one color. [`InterpolationMode::Area`] samples a
/// single point here and behaves as bilinear.
///
/// # Errors
///
/// Returns [`ImageError::InvalidTransform`] when `m` holds a NaN or an infinity.
///
/// # Example
///
/// ```
/// use auger_image::Image;
/// use auger_imgproc::interpolation::{BorderMode, InterpolationMode};
/// use auger_imgproc::warp::warp_affine;
///
/// let src = Image::<u8, 3>::from_size_pixel([6, 4].into(), [0, 255, 0]).unwrap();
/// let mut dst = Image::<u8, 3>::from_size_val([8, 4].into(), 0).unwrap();
///
/// // move the content two columns to the right
/// let m = [1.0, 0.0, 2.0, 0.0, 1.0, 0.0];
/// warp_affine(&src, &mut dst, &m, InterpolationMode::Nearest, BorderMode::Constant([9.0; 3]))
///     .unwrap();
///
/// assert_eq!(dst.pixel(1, 0), Some(&[9u8, 9, 9][..]));
/// assert_eq!(dst.pixel(2, 0), Some(&[0u8, 255, 0][..]));
/// ```
pub fn warp_affine<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    m: &[f32; 6],
    interpolation: InterpolationMode,
    border: BorderMode<C>,
) -> Result<(), ImageError> {
    if m.iter().any(|v| !v.is_finite()) {
        return Err(ImageError::InvalidTransform);
    }

    let m_inv = invert_affine_transform(m);

    let (map_x, map_y) = meshgrid_from_fn(dst.cols(), dst.rows(), |x, y| {
        transform_point(x as f32, y as f32, &m_inv)
    });

    parallel::par_iter_rows_resample(dst, &map_x, &map_y, |u, v, dst_pixel| {
        let sample = interpolate_pixel(src, u, v, interpolation, &border);
        for (d, s) in dst_pixel.iter_mut().zip(sample) {
            *d = T::from_f32(s);
        }
    });

    Ok(())
}
