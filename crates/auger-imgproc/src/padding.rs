use auger_image::{Image, ImageError, ImageSize};
use rayon::prelude::*;

/// How the added border is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingMode {
    /// One color for the whole border: `x y z | c c c`.
    Constant,

    /// The edge pixel repeated outward: `x y z | z z z`.
    Replicate,
}

/// Border widths in pixels, one per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding2D {
    /// Rows added above the image.
    pub top: usize,
    /// Rows added below the image.
    pub bottom: usize,
    /// Columns added left of the image.
    pub left: usize,
    /// Columns added right of the image.
    pub right: usize,
}

impl Padding2D {
    /// The same amount of padding on every side.
    pub const fn uniform(pad: usize) -> Self {
        Self {
            top: pad,
            bottom: pad,
            left: pad,
            right: pad,
        }
    }

    /// The size of an image of `size` once this padding is applied.
    pub fn padded_size(&self, size: ImageSize) -> ImageSize {
        ImageSize {
            width: size.width + self.left + self.right,
            height: size.height + self.top + self.bottom,
        }
    }

    /// Whether `new_size` is `old_size` grown by this padding.
    ///
    /// ```rust
    /// use auger_image::ImageSize;
    /// use auger_imgproc::padding::Padding2D;
    ///
    /// let padding = Padding2D { top: 0, bottom: 2, left: 3, right: 1 };
    /// assert!(padding.validate_size([10, 5].into(), [14, 7].into()));
    /// assert!(!padding.validate_size([10, 5].into(), [10, 5].into()));
    /// ```
    pub fn validate_size(&self, old_size: ImageSize, new_size: ImageSize) -> bool {
        self.padded_size(old_size) == new_size
    }
}

/// Copy `src` into `dst` at offset `(left, top)` and fill the border around it.
///
/// `constant_value` holds one value per channel and is only read in
/// [`PaddingMode::Constant`].
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] when `dst` is not `src` grown by `padding`.
///
/// # Example
///
/// ```rust
/// use auger_image::Image;
/// use auger_imgproc::padding::{spatial_padding, Padding2D, PaddingMode};
///
/// let src = Image::<u8, 3>::from_size_val([3, 2].into(), 50).unwrap();
/// let padding = Padding2D::uniform(2);
/// let mut dst = Image::<u8, 3>::from_size_val(padding.padded_size(src.size()), 0).unwrap();
///
/// spatial_padding(&src, &mut dst, padding, PaddingMode::Constant, [255, 0, 0]).unwrap();
///
/// assert_eq!(dst.pixel(0, 0), Some(&[255u8, 0, 0][..]));
/// assert_eq!(dst.pixel(2, 2), Some(&[50u8, 50, 50][..]));
/// ```
pub fn spatial_padding<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    padding: Padding2D,
    padding_mode: PaddingMode,
    constant_value: [T; C],
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if !padding.validate_size(src.size(), dst.size()) {
        let expected = padding.padded_size(src.size());
        return Err(ImageError::InvalidImageSize(
            dst.width(),
            dst.height(),
            expected.width,
            expected.height,
        ));
    }

    let (old_width, old_height) = (src.width(), src.height());
    let new_width = dst.width();
    if new_width == 0 {
        return Ok(());
    }

    let old_data = src.as_slice();
    let row_stride = new_width * C;

    dst.as_slice_mut()
        .par_chunks_exact_mut(row_stride)
        .enumerate()
        .for_each(|(y, dst_row)| {
            // source row feeding this destination row, if any
            let src_y = match padding_mode {
                _ if old_width == 0 || old_height == 0 => None,
                PaddingMode::Constant => y
                    .checked_sub(padding.top)
                    .filter(|&sy| sy < old_height),
                PaddingMode::Replicate => {
                    Some(y.saturating_sub(padding.top).min(old_height - 1))
                }
            };

            let Some(src_y) = src_y else {
                dst_row
                    .chunks_exact_mut(C)
                    .for_each(|px| px.copy_from_slice(&constant_value));
                return;
            };

            let src_row = &old_data[src_y * old_width * C..(src_y + 1) * old_width * C];
            let (left, rest) = dst_row.split_at_mut(padding.left * C);
            let (center, right) = rest.split_at_mut(old_width * C);
            center.copy_from_slice(src_row);

            let (left_px, right_px) = match padding_mode {
                PaddingMode::Constant => (constant_value, constant_value),
                PaddingMode::Replicate => {
                    let mut first = constant_value;
                    let mut last = constant_value;
                    first.copy_from_slice(&src_row[..C]);
                    last.copy_from_slice(&src_row[(old_width - 1) * C..]);
                    (first, last)
                }
            };

            left.chunks_exact_mut(C)
                .for_each(|px| px.copy_from_slice(&left_px));
            right
                .chunks_exact_mut(C)
                .for_each(|px| px.copy_from_slice(&right_px));
        });

    Ok(())
}
