use crate::interpolation::{
    area_interpolation, grid::meshgrid_from_fn, interpolate_pixel, BorderMode, InterpolationMode,
};
use crate::parallel;
use auger_image::{Image, ImageDtype, ImageError};
use fast_image_resize as fr;

/// Resample `src` to the size of `dst` with the interpolation kernels of this crate.
///
/// Works for any pixel type and channel count. Pixel centers are aligned
/// (half-pixel convention) and samples past the border replicate the edge pixels.
/// [`InterpolationMode::Area`] averages the covered source pixels when shrinking and
/// behaves as bilinear otherwise.
///
/// An empty `dst` is a no-op; an empty `src` with a non-empty `dst` is an error.
///
/// # Example
///
/// ```
/// use auger_image::Image;
/// use auger_imgproc::interpolation::InterpolationMode;
/// use auger_imgproc::resize::resize_native;
///
/// let image = Image::<f32, 1>::new([2, 1].into(), vec![0.0, 4.0]).unwrap();
/// let mut wide = Image::<f32, 1>::from_size_val([4, 1].into(), 0.0).unwrap();
///
/// resize_native(&image, &mut wide, InterpolationMode::Bilinear).unwrap();
///
/// assert_eq!(wide.as_slice(), &[0.0, 1.0, 3.0, 4.0]);
/// ```
pub fn resize_native<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if dst.size().area() == 0 {
        return Ok(());
    }

    if src.size().area() == 0 {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let scale_x = src.width() as f32 / dst.width() as f32;
    let scale_y = src.height() as f32 / dst.height() as f32;
    let shrinking = scale_x >= 1.0 && scale_y >= 1.0;

    let (map_x, map_y) = meshgrid_from_fn(dst.width(), dst.height(), |x, y| {
        let (x, y) = (x as f32, y as f32);
        match interpolation {
            InterpolationMode::Nearest => ((x * scale_x).floor(), (y * scale_y).floor()),
            InterpolationMode::Area if shrinking => (x * scale_x, y * scale_y),
            _ => ((x + 0.5) * scale_x - 0.5, (y + 0.5) * scale_y - 0.5),
        }
    });

    parallel::par_iter_rows_resample(dst, &map_x, &map_y, |u, v, dst_pixel| {
        let pixel = match interpolation {
            InterpolationMode::Area if shrinking => {
                area_interpolation(src, (u, u + scale_x), (v, v + scale_y))
            }
            _ => interpolate_pixel(src, u, v, interpolation, &BorderMode::Replicate),
        };
        dst_pixel
            .iter_mut()
            .zip(pixel.iter())
            .for_each(|(d, &p)| *d = T::from_f32(p));
    });

    Ok(())
}

fn resize_alg(interpolation: InterpolationMode) -> fr::ResizeAlg {
    match interpolation {
        InterpolationMode::Nearest => fr::ResizeAlg::Nearest,
        InterpolationMode::Bilinear => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
        InterpolationMode::Bicubic => fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom),
        InterpolationMode::Area => fr::ResizeAlg::Convolution(fr::FilterType::Box),
        InterpolationMode::Lanczos4 => fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3),
    }
}

/// Resample an 8-bit BGR image with [fast_image_resize](https://crates.io/crates/fast_image_resize).
///
/// The modes map onto the filters of the backend: bicubic uses Catmull-Rom,
/// area uses a box filter and lanczos4 uses the three-lobe Lanczos filter.
///
/// # Example
///
/// ```
/// use auger_image::Image;
/// use auger_imgproc::interpolation::InterpolationMode;
/// use auger_imgproc::resize::resize_fast;
///
/// let image = Image::<u8, 3>::from_size_pixel([64, 48].into(), [10, 20, 30]).unwrap();
/// let mut thumb = Image::<u8, 3>::from_size_val([16, 12].into(), 0).unwrap();
///
/// resize_fast(&image, &mut thumb, InterpolationMode::Area).unwrap();
///
/// assert_eq!(thumb.pixel(8, 6), Some(&[10u8, 20, 30][..]));
/// ```
///
/// # Errors
///
/// Returns [`ImageError::ResizeError`] when the backend rejects the buffers.
pub fn resize_fast(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if dst.size().area() == 0 {
        return Ok(());
    }

    if src.size().area() == 0 {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    // prepare the input image for the fast_image_resize crate
    let src_image = fr::images::ImageRef::new(
        src.width() as u32,
        src.height() as u32,
        src.as_slice(),
        fr::PixelType::U8x3,
    )
    .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    // prepare the output image for the fast_image_resize crate
    let (dst_width, dst_height) = (dst.width() as u32, dst.height() as u32);
    let mut dst_image = fr::images::Image::from_slice_u8(
        dst_width,
        dst_height,
        dst.as_slice_mut(),
        fr::PixelType::U8x3,
    )
    .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    let options = fr::ResizeOptions::new().resize_alg(resize_alg(interpolation));

    let mut resizer = fr::Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use auger_image::{Image, ImageError, ImageSize};

    #[test]
    fn resize_native_every_mode_fills_dst() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::from_size_val([9, 6].into(), 0.5)?;

        for mode in InterpolationMode::ALL {
            let mut image_resized = Image::<f32, 3>::from_size_val([5, 4].into(), -1.0)?;
            resize_native(&image, &mut image_resized, mode)?;
            assert!(image_resized.as_slice().iter().all(|&v| v >= 0.0));
        }
        Ok(())
    }

    #[test]
    fn resize_native_constant_image_stays_constant() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val([7, 5].into(), 77)?;

        for new_size in [[3, 2], [14, 11]] {
            for mode in InterpolationMode::ALL {
                let mut image_resized = Image::<u8, 3>::from_size_val(new_size.into(), 0)?;
                resize_native(&image, &mut image_resized, mode)?;
                assert!(image_resized.as_slice().iter().all(|&v| v == 77));
            }
        }
        Ok(())
    }

    #[test]
    fn resize_native_area_halves() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([4, 2].into(), vec![0, 10, 20, 30, 40, 50, 60, 70])?;
        let mut image_resized = Image::<u8, 1>::from_size_val([2, 1].into(), 0)?;

        resize_native(&image, &mut image_resized, InterpolationMode::Area)?;

        // each output pixel averages a 2x2 block
        assert_eq!(image_resized.as_slice(), &[25, 45]);
        Ok(())
    }

    #[test]
    fn resize_native_nearest_picks_top_left() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([4, 1].into(), vec![1, 2, 3, 4])?;
        let mut image_resized = Image::<u8, 1>::from_size_val([2, 1].into(), 0)?;

        resize_native(&image, &mut image_resized, InterpolationMode::Nearest)?;

        assert_eq!(image_resized.as_slice(), &[1, 3]);
        Ok(())
    }

    #[test]
    fn resize_native_empty_source() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val([0, 0].into(), 0)?;
        let mut image_resized = Image::<u8, 3>::from_size_val([2, 2].into(), 0)?;
        assert!(resize_native(&image, &mut image_resized, InterpolationMode::Bilinear).is_err());
        Ok(())
    }

    #[test]
    fn resize_fast_every_mode() -> Result<(), ImageError> {
        let data = (0..12 * 10 * 3).map(|i| (i % 251) as u8).collect();
        let image = Image::<u8, 3>::new([12, 10].into(), data)?;
        let new_size = ImageSize {
            width: 20,
            height: 7,
        };

        for mode in InterpolationMode::ALL {
            let mut image_resized = Image::<u8, 3>::from_size_val(new_size, 0)?;
            super::resize_fast(&image, &mut image_resized, mode)?;
            assert_eq!(image_resized.size(), new_size);
        }
        Ok(())
    }

    #[test]
    fn resize_fast_constant_image_stays_constant() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val([9, 9].into(), 128)?;
        let mut image_resized = Image::<u8, 3>::from_size_val([4, 4].into(), 0)?;

        super::resize_fast(&image, &mut image_resized, InterpolationMode::Bilinear)?;

        assert!(image_resized.as_slice().iter().all(|&v| v == 128));
        Ok(())
    }
}
