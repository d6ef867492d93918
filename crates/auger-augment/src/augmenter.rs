use auger_image::Image;
use rand::RngCore;

use crate::error::AugmentError;

/// An image augmentation algorithm.
///
/// Implementations are configured once with [`ImageAugmenter::init`] and are
/// read-only afterwards, so one instance may serve many threads as long as
/// every caller brings its own random source.
pub trait ImageAugmenter: Send + Sync {
    /// Configure the augmenter from textual key/value pairs.
    ///
    /// Keys the augmenter does not know are ignored.
    fn init(&mut self, kwargs: &[(String, String)]) -> Result<(), AugmentError>;

    /// Produce an augmented copy of `src`, drawing every random value from `rng`.
    ///
    /// `src` holds 8-bit pixels in blue, green, red order.
    fn process(
        &self,
        src: &Image<u8, 3>,
        rng: &mut dyn RngCore,
    ) -> Result<Image<u8, 3>, AugmentError>;
}
