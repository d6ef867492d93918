use auger_image::ImageError;

/// An error type for the augmentation module.
///
/// Configuration errors are raised while building an augmenter and mean the
/// pipeline must not be started. Precondition errors are raised per call and
/// only affect the image being processed.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AugmentError {
    /// The mandatory `data_shape` parameter was not provided.
    #[error("Parameter data_shape is required")]
    MissingDataShape,

    /// The `data_shape` parameter is not made of three non-zero dimensions.
    #[error("Invalid data_shape {0:?}: expected three non-zero dimensions (C, H, W)")]
    InvalidDataShape(Vec<usize>),

    /// The interpolation code is not one of 1, 2, 3, 4, 9 or 10.
    #[error("Invalid inter_method {0}: valid values are 1, 2, 3, 4, 9, 10")]
    InvalidInterMethod(i32),

    /// A recognised parameter holds a value that cannot be parsed.
    #[error("Invalid value {value:?} for parameter {key}")]
    InvalidValue {
        /// The parameter name.
        key: String,
        /// The raw value.
        value: String,
    },

    /// The augmenter was used before a successful `init`.
    #[error("Augmenter is not initialized")]
    NotInitialized,

    /// No augmenter is registered under the requested name.
    #[error("No augmenter registered under the name {0:?}")]
    UnknownAugmenter(String),

    /// The working image is smaller than the largest crop that can be drawn.
    #[error("Image size {width}x{height} is smaller than max_crop_size {crop_size}")]
    CropLargerThanImage {
        /// Width of the working image.
        width: usize,
        /// Height of the working image.
        height: usize,
        /// The configured upper crop bound.
        crop_size: i32,
    },

    /// The crop size range is empty or contains non-positive sizes.
    #[error("Invalid crop size range [{min}, {max}]")]
    InvalidCropRange {
        /// Lower bound of the range.
        min: i32,
        /// Upper bound of the range.
        max: i32,
    },

    /// The working image is smaller than the requested output shape.
    #[error("Image size {width}x{height} is smaller than the data shape {target_width}x{target_height}")]
    ImageSmallerThanShape {
        /// Width of the working image.
        width: usize,
        /// Height of the working image.
        height: usize,
        /// Width of the requested output.
        target_width: usize,
        /// Height of the requested output.
        target_height: usize,
    },

    /// An image kernel failed.
    #[error("Image operation failed. {0}")]
    Image(#[from] ImageError),
}

impl AugmentError {
    /// Whether the error comes from the configuration rather than from a single call.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            AugmentError::MissingDataShape
                | AugmentError::InvalidDataShape(_)
                | AugmentError::InvalidInterMethod(_)
                | AugmentError::InvalidValue { .. }
                | AugmentError::NotInitialized
                | AugmentError::UnknownAugmenter(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_errors() {
        assert!(AugmentError::MissingDataShape.is_config());
        assert!(AugmentError::InvalidInterMethod(0).is_config());
        assert!(!AugmentError::InvalidCropRange { min: 5, max: 2 }.is_config());
        assert!(!AugmentError::Image(ImageError::InvalidTransform).is_config());
    }

    #[test]
    fn error_messages() {
        let err = AugmentError::InvalidValue {
            key: "pad".into(),
            value: "x".into(),
        };
        assert_eq!(err.to_string(), "Invalid value \"x\" for parameter pad");
        assert_eq!(
            AugmentError::InvalidInterMethod(7).to_string(),
            "Invalid inter_method 7: valid values are 1, 2, 3, 4, 9, 10"
        );
    }
}
