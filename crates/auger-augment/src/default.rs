use std::borrow::Cow;

use auger_image::{Image, ImageSize};
use auger_imgproc::{
    color::{bgr_from_hls, hls_from_bgr},
    crop::crop_image,
    interpolation::BorderMode,
    padding::{spatial_padding, Padding2D, PaddingMode},
    parallel,
    resize::resize_fast,
    warp::warp_affine,
};
use log::{debug, trace};
use rand::{Rng, RngCore};

use crate::affine::AffineParams;
use crate::augmenter::ImageAugmenter;
use crate::error::AugmentError;
use crate::inter::{get_inter_method, InterMethod};
use crate::params::{parse_rotate_list, AugmentParams, DataShape, FillColor};

/// Upper bound of the H, L and S channels of an 8-bit HLS image.
const HLS_LIMITS: [i32; 3] = [180, 255, 255];

/// A rectangle of the working image selected by the crop stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    /// Column of the top-left corner.
    pub x: usize,
    /// Row of the top-left corner.
    pub y: usize,
    /// Size of the window.
    pub size: ImageSize,
    /// Whether the window is resized to the data shape afterwards.
    pub resize: bool,
}

#[derive(Debug, Clone)]
struct Config {
    params: AugmentParams,
    rotate_list: Vec<i32>,
    inter: InterMethod,
    fill: FillColor,
    shape: DataShape,
}

/// The default augmenter.
///
/// Runs four stages in order, each reading the output of the previous one:
///
/// 1. affine: random rotation, shear, scale and aspect ratio in one warp,
/// 2. pad: constant border of `pad` pixels,
/// 3. crop: random-size square crop resized to the data shape, or an exact crop,
/// 4. color jitter: bounded random offsets in HLS space.
///
/// Stages whose parameters are left at their defaults pass the image through.
///
/// # Examples
///
/// ```
/// use auger_augment::{DefaultAugmenter, ImageAugmenter};
/// use auger_image::{Image, ImageSize};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut augmenter = DefaultAugmenter::new();
/// augmenter
///     .init(&[
///         ("data_shape".to_string(), "(3,24,24)".to_string()),
///         ("rand_crop".to_string(), "1".to_string()),
///         ("max_rotate_angle".to_string(), "10".to_string()),
///     ])
///     .unwrap();
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 32, height: 32 }, 0).unwrap();
/// let mut rng = StdRng::seed_from_u64(0);
/// let out = augmenter.process(&image, &mut rng).unwrap();
///
/// assert_eq!(out.size(), ImageSize { width: 24, height: 24 });
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultAugmenter {
    config: Option<Config>,
}

impl DefaultAugmenter {
    /// Name of the augmenter in the registry.
    pub const NAME: &'static str = "aug_default";

    /// Description of the augmenter in the registry.
    pub const DESCRIPTION: &'static str = "default augmenter";

    /// Create an augmenter that still needs to be initialized.
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Create an initialized augmenter from typed parameters.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the parameters are invalid, see
    /// [`AugmentParams::validate`].
    pub fn from_params(params: AugmentParams, rotate_list: Vec<i32>) -> Result<Self, AugmentError> {
        let shape = params.validate()?;
        let inter = InterMethod::from_code(params.inter_method)
            .ok_or(AugmentError::InvalidInterMethod(params.inter_method))?;
        let fill = params.fill_color();

        debug!(
            "{} configured: shape {:?}, inter {:?}, fill {:?}, rotate_list {:?}, {:?}",
            Self::NAME,
            shape,
            inter,
            fill,
            rotate_list,
            params
        );

        Ok(Self {
            config: Some(Config {
                params,
                rotate_list,
                inter,
                fill,
                shape,
            }),
        })
    }

    /// The parameters, once initialized.
    pub fn params(&self) -> Option<&AugmentParams> {
        self.config.as_ref().map(|config| &config.params)
    }

    /// The discrete rotation angles.
    pub fn rotate_list(&self) -> &[i32] {
        self.config
            .as_ref()
            .map(|config| config.rotate_list.as_slice())
            .unwrap_or_default()
    }

    /// The resolved border fill color, once initialized.
    pub fn fill_color(&self) -> Option<FillColor> {
        self.config.as_ref().map(|config| config.fill)
    }

    fn config(&self) -> Result<&Config, AugmentError> {
        self.config.as_ref().ok_or(AugmentError::NotInitialized)
    }

    /// Affine stage: rotate, shear, scale and distort the aspect ratio in one warp.
    ///
    /// Pixels of the canvas that have no source pixel take the fill color.
    /// Returns `src` itself when no affine parameter is set.
    pub fn affine<'a, R: Rng + ?Sized>(
        &self,
        src: &'a Image<u8, 3>,
        rng: &mut R,
    ) -> Result<Cow<'a, Image<u8, 3>>, AugmentError> {
        let config = self.config()?;
        let params = &config.params;

        if !params.has_affine(&config.rotate_list) {
            return Ok(Cow::Borrowed(src));
        }

        let affine = AffineParams::sample(params, &config.rotate_list, rng);
        let extent = affine.canvas_extent(src.size(), params.min_img_size, params.max_img_size);
        let canvas = affine.canvas_size(src.size(), params.min_img_size, params.max_img_size);
        let m = affine.matrix(src.size(), extent);
        let mode = get_inter_method(config.inter, src.size(), canvas, rng);

        trace!("affine: {affine:?}, canvas {canvas}, {mode:?}");

        let fill = config.fill.bgr();
        let mut dst = Image::from_size_pixel(canvas, fill)?;
        warp_affine(src, &mut dst, &m, mode, BorderMode::Constant(fill.map(f32::from)))?;

        Ok(Cow::Owned(dst))
    }

    /// Padding stage: surround the image with `pad` pixels of the fill color.
    pub fn pad<'a>(&self, image: Cow<'a, Image<u8, 3>>) -> Result<Cow<'a, Image<u8, 3>>, AugmentError> {
        let config = self.config()?;
        if config.params.pad <= 0 {
            return Ok(image);
        }

        let padding = Padding2D::uniform(config.params.pad as usize);
        let mut dst = Image::from_size_val(padding.padded_size(image.size()), 0u8)?;
        spatial_padding(
            &*image,
            &mut dst,
            padding,
            PaddingMode::Constant,
            config.fill.bgr(),
        )?;

        Ok(Cow::Owned(dst))
    }

    /// Draw the crop window for an image of `size`.
    ///
    /// With a crop size range the window is a square whose side is drawn in
    /// `[min_crop_size, max_crop_size]`, otherwise it has the data shape. The
    /// window is placed at random with `rand_crop` and centered otherwise.
    ///
    /// # Errors
    ///
    /// Fails when the range is empty, when it allows non-positive sizes and
    /// when the window cannot fit inside `size`.
    pub fn crop_window<R: Rng + ?Sized>(
        &self,
        size: ImageSize,
        rng: &mut R,
    ) -> Result<CropWindow, AugmentError> {
        let config = self.config()?;
        let params = &config.params;

        if !params.has_crop_range() {
            let target = config.shape.size();
            if size.height < target.height || size.width < target.width {
                return Err(AugmentError::ImageSmallerThanShape {
                    width: size.width,
                    height: size.height,
                    target_width: target.width,
                    target_height: target.height,
                });
            }

            let (y, x) = crop_offset(
                size.height - target.height,
                size.width - target.width,
                params.rand_crop,
                rng,
            );
            return Ok(CropWindow {
                x,
                y,
                size: target,
                resize: false,
            });
        }

        let max = params.max_crop_size;
        let min = match params.min_crop_size {
            -1 => max,
            min => min,
        };
        if max < min || min < 1 {
            return Err(AugmentError::InvalidCropRange { min, max });
        }

        let (min, max) = (min as usize, max as usize);
        if size.width < max || size.height < max {
            return Err(AugmentError::CropLargerThanImage {
                width: size.width,
                height: size.height,
                crop_size: params.max_crop_size,
            });
        }

        let side = rng.random_range(min..=max);
        let (y, x) = crop_offset(size.height - side, size.width - side, params.rand_crop, rng);

        Ok(CropWindow {
            x,
            y,
            size: ImageSize {
                width: side,
                height: side,
            },
            resize: true,
        })
    }

    /// Crop stage: extract the crop window and bring it to the data shape.
    ///
    /// The output always has the spatial size of the data shape.
    pub fn crop<R: Rng + ?Sized>(
        &self,
        image: &Image<u8, 3>,
        rng: &mut R,
    ) -> Result<Image<u8, 3>, AugmentError> {
        let config = self.config()?;
        let target = config.shape.size();
        let window = self.crop_window(image.size(), rng)?;

        let mut roi = Image::from_size_val(window.size, 0u8)?;
        crop_image(image, &mut roi, window.x, window.y)?;

        if !window.resize {
            trace!("crop: {window:?}");
            return Ok(roi);
        }

        let mode = get_inter_method(config.inter, window.size, target, rng);
        trace!("crop: {window:?}, {mode:?}");

        let mut dst = Image::from_size_val(target, 0u8)?;
        resize_fast(&roi, &mut dst, mode)?;

        Ok(dst)
    }

    /// Color jitter stage: shift hue, lightness and saturation by bounded random offsets.
    ///
    /// Offsets are drawn in the order h, s, l and each channel is clamped to its
    /// range afterwards. The hue saturates at 180 instead of wrapping around.
    pub fn color_jitter<R: Rng + ?Sized>(
        &self,
        image: Image<u8, 3>,
        rng: &mut R,
    ) -> Result<Image<u8, 3>, AugmentError> {
        let config = self.config()?;
        let params = &config.params;

        if !params.has_color_jitter() {
            return Ok(image);
        }

        let mut hls = Image::from_size_val(image.size(), 0u8)?;
        hls_from_bgr(&image, &mut hls)?;

        let h = jitter_offset(params.random_h, rng);
        let s = jitter_offset(params.random_s, rng);
        let l = jitter_offset(params.random_l, rng);
        trace!("color jitter: h {h}, l {l}, s {s}");

        shift_hls(&mut hls, [h, l, s]);

        let mut dst = image;
        bgr_from_hls(&hls, &mut dst)?;

        Ok(dst)
    }
}

impl ImageAugmenter for DefaultAugmenter {
    fn init(&mut self, kwargs: &[(String, String)]) -> Result<(), AugmentError> {
        let (params, rest) = AugmentParams::from_kwargs(kwargs)?;

        let mut rotate_list = Vec::new();
        for (key, value) in &rest {
            if key == "rotate_list" {
                rotate_list.extend(parse_rotate_list(value)?);
            } else {
                debug!("{}: ignoring parameter {key}={value}", Self::NAME);
            }
        }

        *self = Self::from_params(params, rotate_list)?;
        Ok(())
    }

    fn process(
        &self,
        src: &Image<u8, 3>,
        rng: &mut dyn RngCore,
    ) -> Result<Image<u8, 3>, AugmentError> {
        let image = self.affine(src, rng)?;
        let image = self.pad(image)?;
        let image = self.crop(&image, rng)?;
        self.color_jitter(image, rng)
    }
}

/// Top-left offset `(y, x)` inside the free ranges, random or centered.
fn crop_offset<R: Rng + ?Sized>(
    range_y: usize,
    range_x: usize,
    random: bool,
    rng: &mut R,
) -> (usize, usize) {
    if random {
        let y = rng.random_range(0..=range_y);
        let x = rng.random_range(0..=range_x);
        (y, x)
    } else {
        (range_y / 2, range_x / 2)
    }
}

/// Add `offsets` to the H, L and S channels, saturating at the channel limits.
fn shift_hls(hls: &mut Image<u8, 3>, offsets: [i32; 3]) {
    parallel::par_iter_rows_inplace(hls, |pixel| {
        for ((v, offset), limit) in pixel.iter_mut().zip(offsets).zip(HLS_LIMITS) {
            *v = (*v as i32 + offset).clamp(0, limit) as u8;
        }
    });
}

/// Offset in `[-max, max]`, truncated toward zero.
fn jitter_offset<R: Rng + ?Sized>(max: i32, rng: &mut R) -> i32 {
    let max = max as f32;
    (rng.random::<f32>() * max * 2.0 - max) as i32
}
