#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// affine transformation sampling.
pub mod affine;

/// the augmenter trait.
pub mod augmenter;

/// the default four-stage augmenter.
pub mod default;

/// error types of the augmentation module.
pub mod error;

/// interpolation method selection.
pub mod inter;

/// augmentation parameters and their parsing.
pub mod params;

/// name-keyed augmenter registry.
pub mod registry;

pub use crate::augmenter::ImageAugmenter;
pub use crate::default::DefaultAugmenter;
pub use crate::error::AugmentError;
pub use crate::params::{list_params, AugmentParams};
pub use crate::registry::AugmenterRegistry;

/// Construct the augmenter registered under `name` in the global registry.
///
/// # Examples
///
/// ```
/// let augmenter = auger_augment::create("aug_default");
/// assert!(augmenter.is_ok());
/// ```
pub fn create(name: &str) -> Result<Box<dyn ImageAugmenter>, AugmentError> {
    AugmenterRegistry::global().create(name)
}
