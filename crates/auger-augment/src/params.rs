use std::str::FromStr;

use auger_image::ImageSize;

use crate::error::AugmentError;
use crate::inter::InterMethod;

/// Value of `max_img_size` meaning the affine canvas is unbounded.
pub const MAX_IMG_SIZE_UNBOUNDED: f32 = 1e10;

/// Shape of every image produced by an augmenter, as `(channels, height, width)`.
///
/// The three dimensions are always non-zero.
///
/// # Examples
///
/// ```
/// use auger_augment::params::DataShape;
///
/// let shape: DataShape = "(3, 224, 200)".parse().unwrap();
/// assert_eq!(shape.height(), 224);
/// assert_eq!(shape.width(), 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct DataShape {
    channels: usize,
    height: usize,
    width: usize,
}

impl DataShape {
    /// Create a new shape, rejecting zero dimensions.
    pub fn new(channels: usize, height: usize, width: usize) -> Result<Self, AugmentError> {
        if channels == 0 || height == 0 || width == 0 {
            return Err(AugmentError::InvalidDataShape(vec![channels, height, width]));
        }
        Ok(Self {
            channels,
            height,
            width,
        })
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Output height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Output width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Spatial size of the output.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }
}

impl TryFrom<Vec<usize>> for DataShape {
    type Error = AugmentError;

    fn try_from(dims: Vec<usize>) -> Result<Self, Self::Error> {
        match <[usize; 3]>::try_from(dims) {
            Ok([channels, height, width]) => DataShape::new(channels, height, width),
            Err(dims) => Err(AugmentError::InvalidDataShape(dims)),
        }
    }
}

impl From<DataShape> for Vec<usize> {
    fn from(shape: DataShape) -> Self {
        vec![shape.channels, shape.height, shape.width]
    }
}

impl FromStr for DataShape {
    type Err = AugmentError;

    /// Accepts `(3,224,224)`, `[3,224,224]` or `3,224,224`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .trim_start_matches(['(', '['])
            .trim_end_matches([')', ']']);

        let dims = inner
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| parse_value::<usize>("data_shape", token))
            .collect::<Result<Vec<_>, _>>()?;

        DataShape::try_from(dims)
    }
}

/// Resolved border fill color, one value per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillColor {
    /// Red channel.
    pub r: i32,
    /// Green channel.
    pub g: i32,
    /// Blue channel.
    pub b: i32,
}

impl FillColor {
    /// The color in blue, green, red order saturated to 8 bits.
    pub fn bgr(&self) -> [u8; 3] {
        [saturate_u8(self.b), saturate_u8(self.g), saturate_u8(self.r)]
    }
}

fn saturate_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Parameters of the default augmenter.
///
/// Every field has a documented default, see [`list_params`]. The only
/// mandatory field is `data_shape`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AugmentParams {
    /// Whether the crop is placed at random instead of centered.
    pub rand_crop: bool,
    /// Fixed crop offset on y. Accepted but not used for placement.
    pub crop_y_start: i32,
    /// Fixed crop offset on x. Accepted but not used for placement.
    pub crop_x_start: i32,
    /// Rotation is drawn in `[-max_rotate_angle, max_rotate_angle]` degrees.
    pub max_rotate_angle: i32,
    /// Maximum aspect ratio distortion.
    pub max_aspect_ratio: f32,
    /// Shear is drawn in `[-max_shear_ratio, max_shear_ratio]`.
    pub max_shear_ratio: f32,
    /// Upper bound of the square crop size, `-1` when unset.
    pub max_crop_size: i32,
    /// Lower bound of the square crop size, `-1` when unset.
    pub min_crop_size: i32,
    /// Upper bound of the random scale.
    pub max_random_scale: f32,
    /// Lower bound of the random scale.
    pub min_random_scale: f32,
    /// Upper bound of the canvas size after the affine stage.
    pub max_img_size: f32,
    /// Lower bound of the canvas size after the affine stage.
    pub min_img_size: f32,
    /// Maximum offset of the hue channel.
    pub random_h: i32,
    /// Maximum offset of the saturation channel.
    pub random_s: i32,
    /// Maximum offset of the lightness channel.
    pub random_l: i32,
    /// Fixed rotation angle in degrees, used when positive.
    pub rotate: i32,
    /// Fill value used for every channel unless the full triple is given.
    pub fill_value: i32,
    /// Red fill value, `-1` when unset.
    pub fill_value_r: i32,
    /// Green fill value, `-1` when unset.
    pub fill_value_g: i32,
    /// Blue fill value, `-1` when unset.
    pub fill_value_b: i32,
    /// Interpolation code: 0-NN 1-bilinear 2-cubic 3-area 4-lanczos4 9-auto 10-rand.
    pub inter_method: i32,
    /// Size of the constant border added on every side.
    pub pad: i32,
    /// Output shape `(channels, height, width)`.
    pub data_shape: Option<DataShape>,
}

impl Default for AugmentParams {
    fn default() -> Self {
        Self {
            rand_crop: false,
            crop_y_start: -1,
            crop_x_start: -1,
            max_rotate_angle: 0,
            max_aspect_ratio: 0.0,
            max_shear_ratio: 0.0,
            max_crop_size: -1,
            min_crop_size: -1,
            max_random_scale: 1.0,
            min_random_scale: 1.0,
            max_img_size: MAX_IMG_SIZE_UNBOUNDED,
            min_img_size: 0.0,
            random_h: 0,
            random_s: 0,
            random_l: 0,
            rotate: -1,
            fill_value: 255,
            fill_value_r: -1,
            fill_value_g: -1,
            fill_value_b: -1,
            inter_method: 1,
            pad: 0,
            data_shape: None,
        }
    }
}

impl AugmentParams {
    /// Parse parameters from textual key/value pairs.
    ///
    /// Recognised keys are parsed into their fields. Every other pair is
    /// returned untouched, in input order, for a secondary consumer.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::InvalidValue`] when a recognised key holds a
    /// malformed value and [`AugmentError::InvalidDataShape`] for a shape that
    /// is not made of three non-zero dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use auger_augment::params::AugmentParams;
    ///
    /// let (params, rest) = AugmentParams::from_kwargs(&[
    ///     ("data_shape", "(3,32,32)"),
    ///     ("pad", "4"),
    ///     ("batch_size", "128"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(params.pad, 4);
    /// assert_eq!(rest, vec![("batch_size".to_string(), "128".to_string())]);
    /// ```
    pub fn from_kwargs<K, V>(kwargs: &[(K, V)]) -> Result<(Self, Vec<(String, String)>), AugmentError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        let mut unknown = Vec::new();

        for (key, value) in kwargs {
            let (key, value) = (key.as_ref(), value.as_ref());
            if !params.set(key, value)? {
                unknown.push((key.to_string(), value.to_string()));
            }
        }

        Ok((params, unknown))
    }

    /// Set one parameter from its textual value.
    ///
    /// Returns `false` when the key is not a parameter of this record.
    pub fn set(&mut self, key: &str, value: &str) -> Result<bool, AugmentError> {
        match key {
            "rand_crop" => self.rand_crop = parse_bool(key, value)?,
            "crop_y_start" => self.crop_y_start = parse_value(key, value)?,
            "crop_x_start" => self.crop_x_start = parse_value(key, value)?,
            "max_rotate_angle" => self.max_rotate_angle = parse_value(key, value)?,
            "max_aspect_ratio" => self.max_aspect_ratio = parse_value(key, value)?,
            "max_shear_ratio" => self.max_shear_ratio = parse_value(key, value)?,
            "max_crop_size" => self.max_crop_size = parse_value(key, value)?,
            "min_crop_size" => self.min_crop_size = parse_value(key, value)?,
            "max_random_scale" => self.max_random_scale = parse_value(key, value)?,
            "min_random_scale" => self.min_random_scale = parse_value(key, value)?,
            "max_img_size" => self.max_img_size = parse_value(key, value)?,
            "min_img_size" => self.min_img_size = parse_value(key, value)?,
            "random_h" => self.random_h = parse_value(key, value)?,
            "random_s" => self.random_s = parse_value(key, value)?,
            "random_l" => self.random_l = parse_value(key, value)?,
            "rotate" => self.rotate = parse_value(key, value)?,
            "fill_value" => self.fill_value = parse_value(key, value)?,
            "fill_value_r" => self.fill_value_r = parse_value(key, value)?,
            "fill_value_g" => self.fill_value_g = parse_value(key, value)?,
            "fill_value_b" => self.fill_value_b = parse_value(key, value)?,
            "inter_method" => self.inter_method = parse_value(key, value)?,
            "pad" => self.pad = parse_value(key, value)?,
            "data_shape" => self.data_shape = Some(value.parse()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Check the invariants the augmenter relies on.
    ///
    /// # Errors
    ///
    /// Fails when `data_shape` is missing and when `inter_method` is not one
    /// of 1, 2, 3, 4, 9 or 10.
    pub fn validate(&self) -> Result<DataShape, AugmentError> {
        let shape = self.data_shape.ok_or(AugmentError::MissingDataShape)?;
        // deserialized shapes skip the constructor
        let shape = DataShape::new(shape.channels, shape.height, shape.width)?;

        match InterMethod::from_code(self.inter_method) {
            // nearest neighbour cannot be requested explicitly
            Some(InterMethod::Fixed(mode)) if mode.code() == 0 => {
                Err(AugmentError::InvalidInterMethod(self.inter_method))
            }
            Some(_) => Ok(shape),
            None => Err(AugmentError::InvalidInterMethod(self.inter_method)),
        }
    }

    /// Resolve the border fill color.
    ///
    /// The triple `fill_value_r/g/b` is used only when all three channels are
    /// set. Otherwise every channel takes `fill_value`.
    pub fn fill_color(&self) -> FillColor {
        if self.fill_value_r < 0 || self.fill_value_g < 0 || self.fill_value_b < 0 {
            FillColor {
                r: self.fill_value,
                g: self.fill_value,
                b: self.fill_value,
            }
        } else {
            FillColor {
                r: self.fill_value_r,
                g: self.fill_value_g,
                b: self.fill_value_b,
            }
        }
    }

    /// Whether the affine stage transforms the image.
    pub fn has_affine(&self, rotate_list: &[i32]) -> bool {
        self.max_rotate_angle > 0
            || self.max_shear_ratio > 0.0
            || self.rotate > 0
            || !rotate_list.is_empty()
            || self.max_random_scale != 1.0
            || self.min_random_scale != 1.0
            || self.max_aspect_ratio != 0.0
            || self.max_img_size != MAX_IMG_SIZE_UNBOUNDED
            || self.min_img_size != 0.0
    }

    /// Whether a crop size range is configured.
    pub fn has_crop_range(&self) -> bool {
        self.max_crop_size != -1 || self.min_crop_size != -1
    }

    /// Whether the color jitter stage is active.
    pub fn has_color_jitter(&self) -> bool {
        self.random_h != 0 || self.random_s != 0 || self.random_l != 0
    }
}

/// Parse a comma separated list of rotation angles in degrees.
///
/// Empty tokens are skipped.
///
/// # Examples
///
/// ```
/// use auger_augment::params::parse_rotate_list;
///
/// assert_eq!(parse_rotate_list("0,90,-90").unwrap(), vec![0, 90, -90]);
/// assert!(parse_rotate_list("").unwrap().is_empty());
/// ```
pub fn parse_rotate_list(value: &str) -> Result<Vec<i32>, AugmentError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| parse_value("rotate_list", token))
        .collect()
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, AugmentError> {
    value.trim().parse().map_err(|_| AugmentError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, AugmentError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(AugmentError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Description of one parameter, for documentation and help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFieldInfo {
    /// Key of the parameter.
    pub name: &'static str,
    /// Type of the value.
    pub type_info: &'static str,
    /// Default value, `None` when the parameter is required.
    pub default: Option<&'static str>,
    /// Human readable description.
    pub description: &'static str,
}

const PARAM_FIELDS: &[ParamFieldInfo] = &[
    ParamFieldInfo {
        name: "rand_crop",
        type_info: "boolean",
        default: Some("false"),
        description: "Whether to random crop on the image.",
    },
    ParamFieldInfo {
        name: "crop_y_start",
        type_info: "int",
        default: Some("-1"),
        description: "Where to nonrandom crop on y.",
    },
    ParamFieldInfo {
        name: "crop_x_start",
        type_info: "int",
        default: Some("-1"),
        description: "Where to nonrandom crop on x.",
    },
    ParamFieldInfo {
        name: "max_rotate_angle",
        type_info: "int",
        default: Some("0"),
        description: "Rotated randomly in [-max_rotate_angle, max_rotate_angle].",
    },
    ParamFieldInfo {
        name: "max_aspect_ratio",
        type_info: "float",
        default: Some("0"),
        description: "Max ratio of random aspect ratio augmentation.",
    },
    ParamFieldInfo {
        name: "max_shear_ratio",
        type_info: "float",
        default: Some("0"),
        description: "Max random shearing ratio.",
    },
    ParamFieldInfo {
        name: "max_crop_size",
        type_info: "int",
        default: Some("-1"),
        description: "Maximum crop size.",
    },
    ParamFieldInfo {
        name: "min_crop_size",
        type_info: "int",
        default: Some("-1"),
        description: "Minimum crop size.",
    },
    ParamFieldInfo {
        name: "max_random_scale",
        type_info: "float",
        default: Some("1"),
        description: "Maximum scale ratio.",
    },
    ParamFieldInfo {
        name: "min_random_scale",
        type_info: "float",
        default: Some("1"),
        description: "Minimum scale ratio.",
    },
    ParamFieldInfo {
        name: "max_img_size",
        type_info: "float",
        default: Some("1e10"),
        description: "Maximum image size after resizing.",
    },
    ParamFieldInfo {
        name: "min_img_size",
        type_info: "float",
        default: Some("0"),
        description: "Minimum image size after resizing.",
    },
    ParamFieldInfo {
        name: "random_h",
        type_info: "int",
        default: Some("0"),
        description: "Maximum offset of the H channel in HLS color space.",
    },
    ParamFieldInfo {
        name: "random_s",
        type_info: "int",
        default: Some("0"),
        description: "Maximum offset of the S channel in HLS color space.",
    },
    ParamFieldInfo {
        name: "random_l",
        type_info: "int",
        default: Some("0"),
        description: "Maximum offset of the L channel in HLS color space.",
    },
    ParamFieldInfo {
        name: "rotate",
        type_info: "int",
        default: Some("-1"),
        description: "Fixed rotate angle, used when positive.",
    },
    ParamFieldInfo {
        name: "fill_value",
        type_info: "int",
        default: Some("255"),
        description: "Fill value of every channel for exposed and padded pixels.",
    },
    ParamFieldInfo {
        name: "fill_value_r",
        type_info: "int",
        default: Some("-1"),
        description: "Red fill value, used when the whole r/g/b triple is set.",
    },
    ParamFieldInfo {
        name: "fill_value_g",
        type_info: "int",
        default: Some("-1"),
        description: "Green fill value, used when the whole r/g/b triple is set.",
    },
    ParamFieldInfo {
        name: "fill_value_b",
        type_info: "int",
        default: Some("-1"),
        description: "Blue fill value, used when the whole r/g/b triple is set.",
    },
    ParamFieldInfo {
        name: "data_shape",
        type_info: "Shape(tuple)",
        default: None,
        description: "Shape of each instance generated by the augmenter, (C, H, W).",
    },
    ParamFieldInfo {
        name: "inter_method",
        type_info: "int",
        default: Some("1"),
        description: "0-NN 1-bilinear 2-cubic 3-area 4-lanczos4 9-auto 10-rand.",
    },
    ParamFieldInfo {
        name: "pad",
        type_info: "int",
        default: Some("0"),
        description: "Padding size.",
    },
    ParamFieldInfo {
        name: "rotate_list",
        type_info: "string",
        default: Some(""),
        description: "Comma separated list of rotate angles, one is drawn per image.",
    },
];

/// The parameters understood by the default augmenter.
pub fn list_params() -> Vec<ParamFieldInfo> {
    PARAM_FIELDS.to_vec()
}
