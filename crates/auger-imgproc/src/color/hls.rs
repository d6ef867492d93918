use crate::parallel;
use auger_image::{Image, ImageError};

/// Scale from 8-bit hue units (degrees / 2) to the six color-wheel sectors.
const HUE_TO_SECTOR: f32 = 6.0 / 180.0;

/// Channel order of each sector as indices into `[p2, p1, falling, rising]`,
/// listed as (blue, green, red).
const SECTOR_DATA: [[usize; 3]; 6] = [
    [1, 3, 0],
    [1, 0, 2],
    [3, 0, 1],
    [0, 2, 1],
    [0, 1, 3],
    [2, 1, 0],
];

#[inline]
fn saturate_u8(x: f32) -> u8 {
    num_traits::clamp(x.round(), 0.0, 255.0) as u8
}

/// Convert a BGR image to the 8-bit HLS representation.
///
/// The input image is assumed to have 3 channels in the order B, G, R.
///
/// # Arguments
///
/// * `src` - The input BGR image.
/// * `dst` - The output HLS image.
///
/// # Returns
///
/// The HLS image with the following channels:
///
/// * H: The hue channel in the range [0, 180] (degrees / 2).
/// * L: The lightness channel in the range [0, 255].
/// * S: The saturation channel in the range [0, 255].
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use auger_image::{Image, ImageSize};
/// use auger_imgproc::color::hls_from_bgr;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     vec![255, 0, 0],
/// )
/// .unwrap();
///
/// let mut hls = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// hls_from_bgr(&image, &mut hls).unwrap();
///
/// assert_eq!(hls.as_slice(), &[120, 128, 255]);
/// ```
pub fn hls_from_bgr(src: &Image<u8, 3>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        // Normalize the input to the range [0, 1]
        let b = src_pixel[0] as f32 / 255.0;
        let g = src_pixel[1] as f32 / 255.0;
        let r = src_pixel[2] as f32 / 255.0;

        let vmax = r.max(g).max(b);
        let vmin = r.min(g).min(b);
        let diff = vmax - vmin;
        let l = (vmax + vmin) * 0.5;

        let (h, s) = if diff > f32::EPSILON {
            let s = if l < 0.5 {
                diff / (vmax + vmin)
            } else {
                diff / (2.0 - vmax - vmin)
            };

            let scale = 60.0 / diff;
            let h = if vmax == r {
                (g - b) * scale
            } else if vmax == g {
                (b - r) * scale + 120.0
            } else {
                (r - g) * scale + 240.0
            };

            (if h < 0.0 { h + 360.0 } else { h }, s)
        } else {
            (0.0, 0.0)
        };

        dst_pixel[0] = saturate_u8(h * 0.5);
        dst_pixel[1] = saturate_u8(l * 255.0);
        dst_pixel[2] = saturate_u8(s * 255.0);
    });

    Ok(())
}

/// Convert an 8-bit HLS image back to BGR.
///
/// The inverse of [`hls_from_bgr`]; a hue of 180 is the same as a hue of 0.
///
/// # Arguments
///
/// * `src` - The input HLS image.
/// * `dst` - The output BGR image.
///
/// Precondition: the input and output images must have the same size.
pub fn bgr_from_hls(src: &Image<u8, 3>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let l = src_pixel[1] as f32 / 255.0;
        let s = src_pixel[2] as f32 / 255.0;

        if s == 0.0 {
            dst_pixel.fill(saturate_u8(l * 255.0));
            return;
        }

        let p2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p1 = 2.0 * l - p2;

        let mut h = src_pixel[0] as f32 * HUE_TO_SECTOR;
        if h < 0.0 {
            h += 6.0;
        } else if h >= 6.0 {
            h -= 6.0;
        }

        let sector = (h.floor() as usize).min(5);
        let frac = h - sector as f32;

        let tab = [
            p2,
            p1,
            p1 + (p2 - p1) * (1.0 - frac),
            p1 + (p2 - p1) * frac,
        ];

        for (dst, &idx) in dst_pixel.iter_mut().zip(SECTOR_DATA[sector].iter()) {
            *dst = saturate_u8(tab[idx] * 255.0);
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use auger_image::{Image, ImageError, ImageSize};

    #[test]
    fn hls_from_bgr_primaries() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 5,
                height: 1,
            },
            vec![
                255, 0, 0,
                0, 255, 0,
                0, 0, 255,
                100, 100, 100,
                255, 255, 255,
            ],
        )?;

        let mut hls = Image::<u8, 3>::from_size_val(image.size(), 0)?;
        super::hls_from_bgr(&image, &mut hls)?;

        #[rustfmt::skip]
        let expected = [
            120, 128, 255,
            60, 128, 255,
            0, 128, 255,
            0, 100, 0,
            0, 255, 0,
        ];
        assert_eq!(hls.as_slice(), &expected);

        Ok(())
    }

    #[test]
    fn bgr_from_hls_gray_is_exact() -> Result<(), ImageError> {
        let hls = Image::<u8, 3>::new([2, 1].into(), vec![37, 100, 0, 180, 7, 0])?;
        let mut bgr = Image::<u8, 3>::from_size_val(hls.size(), 0)?;

        super::bgr_from_hls(&hls, &mut bgr)?;

        assert_eq!(bgr.as_slice(), &[100, 100, 100, 7, 7, 7]);
        Ok(())
    }

    #[test]
    fn bgr_from_hls_hue_180_wraps_to_red() -> Result<(), ImageError> {
        let hls = Image::<u8, 3>::new([2, 1].into(), vec![0, 128, 255, 180, 128, 255])?;
        let mut bgr = Image::<u8, 3>::from_size_val(hls.size(), 0)?;

        super::bgr_from_hls(&hls, &mut bgr)?;

        let px: Vec<&[u8]> = bgr.as_slice().chunks_exact(3).collect();
        assert_eq!(px[0], px[1]);
        assert_eq!(px[0][2], 255);
        Ok(())
    }

    #[test]
    fn hls_roundtrip_close() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let data = vec![
            10, 200, 50,
            90, 30, 160,
            250, 240, 5,
            12, 12, 200,
            128, 64, 32,
            0, 0, 0,
        ];
        let image = Image::<u8, 3>::new([6, 1].into(), data)?;

        let mut hls = Image::<u8, 3>::from_size_val(image.size(), 0)?;
        let mut back = Image::<u8, 3>::from_size_val(image.size(), 0)?;
        super::hls_from_bgr(&image, &mut hls)?;
        super::bgr_from_hls(&hls, &mut back)?;

        for (a, b) in image.as_slice().iter().zip(back.as_slice()) {
            assert!((*a as i32 - *b as i32).abs() <= 6, "{a} vs {b}");
        }
        Ok(())
    }

    #[test]
    fn hls_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val([2, 2].into(), 0)?;
        let mut hls = Image::<u8, 3>::from_size_val([2, 1].into(), 0)?;
        assert!(super::hls_from_bgr(&image, &mut hls).is_err());
        assert!(super::bgr_from_hls(&image, &mut hls).is_err());
        Ok(())
    }
}
