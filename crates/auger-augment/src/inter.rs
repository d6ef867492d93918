use auger_image::ImageSize;
use auger_imgproc::interpolation::InterpolationMode;
use rand::Rng;

/// Requested interpolation method, as configured by `inter_method`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterMethod {
    /// Always use the given mode.
    Fixed(InterpolationMode),
    /// Bicubic when enlarging, area when shrinking, bilinear otherwise.
    Auto,
    /// Uniform draw among the concrete modes at every resize.
    Random,
}

impl InterMethod {
    /// Numeric code of [`InterMethod::Auto`].
    pub const AUTO_CODE: i32 = 9;
    /// Numeric code of [`InterMethod::Random`].
    pub const RANDOM_CODE: i32 = 10;

    /// Decode a numeric interpolation code.
    ///
    /// Codes 0 to 4 are the concrete modes, 9 is auto and 10 is random.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            Self::AUTO_CODE => Some(InterMethod::Auto),
            Self::RANDOM_CODE => Some(InterMethod::Random),
            _ => InterpolationMode::ALL
                .into_iter()
                .find(|mode| mode.code() == code)
                .map(InterMethod::Fixed),
        }
    }

    /// The numeric code of the method.
    pub fn code(self) -> i32 {
        match self {
            InterMethod::Fixed(mode) => mode.code(),
            InterMethod::Auto => Self::AUTO_CODE,
            InterMethod::Random => Self::RANDOM_CODE,
        }
    }
}

/// Resolve the interpolation mode used to resample an image from `old` to `new` size.
///
/// Must be called at every resize point since the sizes differ between them.
/// Only [`InterMethod::Random`] draws from `rng`.
///
/// # Examples
///
/// ```
/// use auger_augment::inter::{get_inter_method, InterMethod};
/// use auger_imgproc::interpolation::InterpolationMode;
///
/// let mut rng = rand::rng();
/// let mode = get_inter_method(
///     InterMethod::Auto,
///     [10, 10].into(),
///     [20, 20].into(),
///     &mut rng,
/// );
/// assert_eq!(mode, InterpolationMode::Bicubic);
/// ```
pub fn get_inter_method<R: Rng + ?Sized>(
    requested: InterMethod,
    old: ImageSize,
    new: ImageSize,
    rng: &mut R,
) -> InterpolationMode {
    match requested {
        InterMethod::Fixed(mode) => mode,
        InterMethod::Auto => {
            if new.width > old.width && new.height > old.height {
                InterpolationMode::Bicubic
            } else if new.width < old.width && new.height < old.height {
                InterpolationMode::Area
            } else {
                InterpolationMode::Bilinear
            }
        }
        InterMethod::Random => {
            InterpolationMode::ALL[rng.random_range(0..InterpolationMode::ALL.len())]
        }
    }
}
