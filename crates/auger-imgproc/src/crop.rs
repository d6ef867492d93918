use auger_image::{Image, ImageError};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

/// Copy the region of `src` with top-left corner `(x, y)` into `dst`.
///
/// The size of the region is the size of `dst`.
///
/// # Errors
///
/// Returns [`ImageError::InvalidCropRegion`] if the region does not fit inside `src`.
///
/// # Examples
///
/// ```rust
/// use auger_image::{Image, ImageSize};
/// use auger_imgproc::crop::crop_image;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize { width: 3, height: 3 },
///     (0..9).collect(),
/// )
/// .unwrap();
///
/// let mut center = Image::<u8, 1>::from_size_val(ImageSize { width: 1, height: 1 }, 0).unwrap();
/// crop_image(&image, &mut center, 1, 1).unwrap();
///
/// assert_eq!(center.as_slice(), &[4]);
/// ```
pub fn crop_image<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    x: usize,
    y: usize,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    let (width, height) = (dst.width(), dst.height());

    if x + width > src.width() || y + height > src.height() {
        return Err(ImageError::InvalidCropRegion(
            x,
            y,
            width,
            height,
            src.width(),
            src.height(),
        ));
    }

    if width == 0 {
        return Ok(());
    }

    let src_stride = src.width() * C;
    let row_len = width * C;
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(row, dst_row)| {
            let start = (y + row) * src_stride + x * C;
            dst_row.copy_from_slice(&src_data[start..start + row_len]);
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::crop_image;
    use auger_image::{Image, ImageError, ImageSize};

    #[test]
    fn crop_bgr_region() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 4,
                height: 3,
            },
            (0..36).collect(),
        )?;

        let mut region = Image::<u8, 3>::from_size_val([2, 2].into(), 0)?;
        crop_image(&image, &mut region, 2, 1)?;

        #[rustfmt::skip]
        let expected = [
            18, 19, 20, 21, 22, 23,
            30, 31, 32, 33, 34, 35,
        ];
        assert_eq!(region.as_slice(), &expected);
        Ok(())
    }

    #[test]
    fn crop_full_image_is_a_copy() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new([2, 2].into(), (0..12).collect())?;
        let mut copy = Image::<u8, 3>::from_size_val(image.size(), 0)?;
        crop_image(&image, &mut copy, 0, 0)?;
        assert_eq!(copy, image);
        Ok(())
    }

    #[test]
    fn crop_out_of_bounds() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val([4, 4].into(), 0)?;
        let mut cropped = Image::<u8, 3>::from_size_val([3, 3].into(), 0)?;

        let res = crop_image(&image, &mut cropped, 2, 0);
        assert_eq!(res, Err(ImageError::InvalidCropRegion(2, 0, 3, 3, 4, 4)));
        Ok(())
    }
}
