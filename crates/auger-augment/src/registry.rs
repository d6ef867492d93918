use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::augmenter::ImageAugmenter;
use crate::default::DefaultAugmenter;
use crate::error::AugmentError;

/// Constructor of a boxed, not yet initialized augmenter.
pub type AugmenterFactory = fn() -> Box<dyn ImageAugmenter>;

/// A named augmenter implementation.
#[derive(Debug, Clone, Copy)]
pub struct AugmenterEntry {
    /// Name the augmenter is looked up by.
    pub name: &'static str,
    /// Human readable description.
    pub description: &'static str,
    /// Zero-argument constructor.
    pub body: AugmenterFactory,
}

/// Augmenter implementations keyed by name.
///
/// # Examples
///
/// ```
/// use auger_augment::registry::AugmenterRegistry;
///
/// let registry = AugmenterRegistry::global();
/// assert_eq!(registry.names(), vec!["aug_default"]);
/// assert!(registry.create("aug_default").is_ok());
/// assert!(registry.create("aug_unknown").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AugmenterRegistry {
    entries: BTreeMap<&'static str, AugmenterEntry>,
}

impl AugmenterRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in augmenters.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(AugmenterEntry {
            name: DefaultAugmenter::NAME,
            description: DefaultAugmenter::DESCRIPTION,
            body: || Box::new(DefaultAugmenter::new()),
        });
        registry
    }

    /// The process-wide registry, built with the built-in augmenters on first use.
    pub fn global() -> &'static AugmenterRegistry {
        static REGISTRY: OnceLock<AugmenterRegistry> = OnceLock::new();
        REGISTRY.get_or_init(AugmenterRegistry::with_builtins)
    }

    /// Add an augmenter, returning the entry previously registered under the same name.
    pub fn register(&mut self, entry: AugmenterEntry) -> Option<AugmenterEntry> {
        self.entries.insert(entry.name, entry)
    }

    /// Look up an augmenter by name.
    pub fn find(&self, name: &str) -> Option<&AugmenterEntry> {
        self.entries.get(name)
    }

    /// Construct the augmenter registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::UnknownAugmenter`] when no augmenter has this name.
    pub fn create(&self, name: &str) -> Result<Box<dyn ImageAugmenter>, AugmentError> {
        self.find(name)
            .map(|entry| (entry.body)())
            .ok_or_else(|| AugmentError::UnknownAugmenter(name.to_string()))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auger_image::Image;
    use rand::RngCore;

    struct Identity;

    impl ImageAugmenter for Identity {
        fn init(&mut self, _kwargs: &[(String, String)]) -> Result<(), AugmentError> {
            Ok(())
        }

        fn process(
            &self,
            src: &Image<u8, 3>,
            _rng: &mut dyn RngCore,
        ) -> Result<Image<u8, 3>, AugmentError> {
            Ok(src.clone())
        }
    }

    #[test]
    fn builtins() {
        let registry = AugmenterRegistry::with_builtins();
        let entry = registry.find("aug_default");
        assert_eq!(entry.map(|e| e.description), Some("default augmenter"));
        assert!(registry.find("aug_identity").is_none());
    }

    #[test]
    fn register_and_create() -> Result<(), AugmentError> {
        let mut registry = AugmenterRegistry::with_builtins();
        let previous = registry.register(AugmenterEntry {
            name: "aug_identity",
            description: "returns the input",
            body: || Box::new(Identity),
        });
        assert!(previous.is_none());
        assert_eq!(registry.names(), vec!["aug_default", "aug_identity"]);

        let mut augmenter = registry.create("aug_identity")?;
        augmenter.init(&[])?;

        let image = Image::<u8, 3>::from_size_val([3, 2].into(), 9)?;
        let out = augmenter.process(&image, &mut rand::rng())?;
        assert_eq!(out, image);
        Ok(())
    }

    #[test]
    fn create_unknown() {
        let err = AugmenterRegistry::new().create("aug_default").err();
        assert_eq!(err, Some(AugmentError::UnknownAugmenter("aug_default".into())));
    }

    #[test]
    fn created_augmenter_needs_init() -> Result<(), AugmentError> {
        let augmenter = AugmenterRegistry::global().create("aug_default")?;
        let image = Image::<u8, 3>::from_size_val([3, 2].into(), 9)?;
        let res = augmenter.process(&image, &mut rand::rng());
        assert_eq!(res, Err(AugmentError::NotInitialized));
        Ok(())
    }
}
