//! Ordered registries backing an [`ErrorMapper`](crate::ErrorMapper).
//!
//! All three registries are accumulate-only: entries are appended in
//! registration order and never removed or reordered.

use core::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::traits::Thrown;
use crate::types::{ErrorOutput, Meta};

/// A recognizer: produces an output for errors it knows, `None` otherwise.
pub type MappingFn = Arc<dyn Fn(&dyn Thrown) -> Option<ErrorOutput> + Send + Sync>;

/// An enrichment step: receives the output built so far and returns the next one.
pub type TransformFn = Arc<dyn Fn(ErrorOutput, &dyn Thrown, &Meta) -> ErrorOutput + Send + Sync>;

/// A side-effect-only callback fired for errors no mapping recognized.
pub type ObserverFn = Arc<dyn Fn(&dyn Thrown) + Send + Sync>;

/// Inline storage for the handful of entries a typical mapper carries.
pub type Registry<T> = SmallVec<[T; 4]>;

/// Mappings evaluated in registration order; the first match wins.
#[derive(Clone, Default)]
pub struct MappingRegistry {
    mappings: Registry<MappingFn>,
}

impl MappingRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<F>(&mut self, mapping: F)
    where
        F: Fn(&dyn Thrown) -> Option<ErrorOutput> + Send + Sync + 'static,
    {
        self.mappings.push(Arc::new(mapping));
    }

    /// Runs mappings in order and returns the first output produced.
    ///
    /// Mappings after the first match are not invoked.
    #[inline]
    pub fn evaluate(&self, error: &dyn Thrown) -> Option<ErrorOutput> {
        self.mappings.iter().find_map(|mapping| mapping(error))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl fmt::Debug for MappingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingRegistry").field("len", &self.len()).finish()
    }
}

/// Transformers applied as a left fold: each sees the previous one's result.
#[derive(Clone, Default)]
pub struct TransformChain {
    transforms: Registry<TransformFn>,
}

impl TransformChain {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<F>(&mut self, transform: F)
    where
        F: Fn(ErrorOutput, &dyn Thrown, &Meta) -> ErrorOutput + Send + Sync + 'static,
    {
        self.transforms.push(Arc::new(transform));
    }

    /// Appends every transform of `other`, keeping its order.
    pub fn extend_from(&mut self, other: &TransformChain) {
        self.transforms.extend(other.transforms.iter().cloned());
    }

    /// Folds `seed` through every transform in registration order.
    #[inline]
    pub fn apply(&self, seed: ErrorOutput, error: &dyn Thrown, meta: &Meta) -> ErrorOutput {
        self.transforms
            .iter()
            .fold(seed, |output, transform| transform(output, error, meta))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl fmt::Debug for TransformChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformChain").field("len", &self.len()).finish()
    }
}

/// Unknown-error observers, notified in registration order.
#[derive(Clone, Default)]
pub struct ObserverList {
    observers: Registry<ObserverFn>,
}

impl ObserverList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<F>(&mut self, observer: F)
    where
        F: Fn(&dyn Thrown) + Send + Sync + 'static,
    {
        self.observers.push(Arc::new(observer));
    }

    /// Invokes every observer once with the raw error.
    #[inline]
    pub fn notify(&self, error: &dyn Thrown) {
        for observer in &self.observers {
            observer(error);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList").field("len", &self.len()).finish()
    }
}
