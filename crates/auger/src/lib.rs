#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use auger_image as image;

#[doc(inline)]
pub use auger_imgproc as imgproc;

#[doc(inline)]
pub use auger_augment as augment;
