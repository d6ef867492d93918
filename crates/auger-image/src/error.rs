/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image size is not valid.
    #[error("Invalid image size ({0}, {1}) mismatch ({2}, {3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a crop region does not fit inside the source image.
    #[error("Crop region at ({0}, {1}) with size {2}x{3} exceeds the image size {4}x{5}")]
    InvalidCropRegion(usize, usize, usize, usize, usize, usize),

    /// Error when a transformation matrix holds non-finite values.
    #[error("Transformation matrix contains non-finite values")]
    InvalidTransform,

    /// Error when a pixel value cannot be cast to the target type.
    #[error("Failed to cast image data to {0}")]
    CastError(String),

    /// Error raised by the resize backend.
    #[error("Failed to resize the image: {0}")]
    ResizeError(String),
}
