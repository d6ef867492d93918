use super::bicubic::bicubic_weights;
use super::bilinear::bilinear_weights;
use super::lanczos::lanczos4_weights;
use super::nearest::nearest_neighbor_interpolation;
use auger_image::{Image, ImageDtype};

/// Interpolation mode for the resize and warp operations
///
/// The discriminants follow the usual numeric codes of image libraries:
/// 0 nearest, 1 bilinear, 2 bicubic, 3 area, 4 lanczos4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation
    Nearest = 0,
    /// Bilinear interpolation
    Bilinear = 1,
    /// Bicubic interpolation over a 4x4 neighborhood
    Bicubic = 2,
    /// Pixel area relation; behaves as bilinear when sampling a single point
    Area = 3,
    /// Lanczos interpolation over an 8x8 neighborhood
    Lanczos4 = 4,
}

impl InterpolationMode {
    /// Every concrete mode, ordered by numeric code.
    pub const ALL: [InterpolationMode; 5] = [
        InterpolationMode::Nearest,
        InterpolationMode::Bilinear,
        InterpolationMode::Bicubic,
        InterpolationMode::Area,
        InterpolationMode::Lanczos4,
    ];

    /// The numeric code of the mode.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// How samples falling outside the source image are resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BorderMode<const C: usize> {
    /// Outside taps read a fixed value per channel.
    Constant([f32; C]),
    /// Outside taps read the closest edge pixel.
    Replicate,
}

/// Read one pixel as `f32`, resolving out-of-bounds coordinates with `border`.
#[inline]
pub(crate) fn fetch<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    x: isize,
    y: isize,
    border: &BorderMode<C>,
) -> [f32; C] {
    let (cols, rows) = (image.cols() as isize, image.rows() as isize);

    let (x, y) = if x >= 0 && x < cols && y >= 0 && y < rows {
        (x, y)
    } else {
        match border {
            BorderMode::Constant(value) => return *value,
            BorderMode::Replicate if cols == 0 || rows == 0 => return [0.0; C],
            BorderMode::Replicate => (x.clamp(0, cols - 1), y.clamp(0, rows - 1)),
        }
    };

    let base = (y as usize * cols as usize + x as usize) * C;
    let mut pixel = [0.0; C];
    for (dst, src) in pixel.iter_mut().zip(&image.as_slice()[base..base + C]) {
        *dst = (*src).into();
    }

    pixel
}

/// Separable weighted sum over an `N x N` neighborhood whose top-left tap is `(x0, y0)`.
#[inline]
pub(crate) fn convolve<T: ImageDtype, const C: usize, const N: usize>(
    image: &Image<T, C>,
    x0: isize,
    y0: isize,
    wx: &[f32; N],
    wy: &[f32; N],
    border: &BorderMode<C>,
) -> [f32; C] {
    let mut pixel = [0.0; C];
    for (j, wy) in wy.iter().enumerate() {
        if *wy == 0.0 {
            continue;
        }
        for (i, wx) in wx.iter().enumerate() {
            let w = wx * wy;
            if w == 0.0 {
                continue;
            }
            let tap = fetch(image, x0 + i as isize, y0 + j as isize, border);
            for (acc, v) in pixel.iter_mut().zip(tap.iter()) {
                *acc += w * v;
            }
        }
    }
    pixel
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
/// * `border` - How taps outside the image are resolved.
///
/// # Returns
///
/// The interpolated value of every channel.
pub fn interpolate_pixel<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
    border: &BorderMode<C>,
) -> [f32; C] {
    let (x0, fx) = (u.floor(), u - u.floor());
    let (y0, fy) = (v.floor(), v - v.floor());
    let (x0, y0) = (x0 as isize, y0 as isize);

    match interpolation {
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v, border),
        InterpolationMode::Bilinear | InterpolationMode::Area => convolve(
            image,
            x0,
            y0,
            &bilinear_weights(fx),
            &bilinear_weights(fy),
            border,
        ),
        InterpolationMode::Bicubic => convolve(
            image,
            x0 - 1,
            y0 - 1,
            &bicubic_weights(fx),
            &bicubic_weights(fy),
            border,
        ),
        InterpolationMode::Lanczos4 => convolve(
            image,
            x0 - 3,
            y0 - 3,
            &lanczos4_weights(fx),
            &lanczos4_weights(fy),
            border,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use auger_image::{ImageError, ImageSize};

    fn ramp() -> Result<Image<f32, 1>, ImageError> {
        Image::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            (0..16).map(|x| x as f32).collect(),
        )
    }

    #[test]
    fn interpolate_on_grid_points_is_exact() -> Result<(), ImageError> {
        let image = ramp()?;
        for mode in InterpolationMode::ALL {
            let [v] = interpolate_pixel(&image, 1.0, 2.0, mode, &BorderMode::Replicate);
            assert_relative_eq!(v, 9.0, epsilon = 1e-4);
        }
        Ok(())
    }

    #[test]
    fn interpolate_bilinear_midpoint() -> Result<(), ImageError> {
        let image = ramp()?;
        let [v] = interpolate_pixel(
            &image,
            1.5,
            1.5,
            InterpolationMode::Bilinear,
            &BorderMode::Replicate,
        );
        assert_relative_eq!(v, 7.5);
        Ok(())
    }

    #[test]
    fn interpolate_constant_border() -> Result<(), ImageError> {
        let image = ramp()?;
        let border = BorderMode::Constant([100.0]);
        for mode in InterpolationMode::ALL {
            let [v] = interpolate_pixel(&image, -20.0, -20.0, mode, &border);
            assert_relative_eq!(v, 100.0, epsilon = 1e-3);
        }
        Ok(())
    }

    #[test]
    fn interpolation_codes() {
        let codes: Vec<i32> = InterpolationMode::ALL.iter().map(|m| m.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4]);
    }
}
