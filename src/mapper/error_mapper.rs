use core::fmt;
use std::sync::Arc;

use crate::mapper::registry::{MappingRegistry, ObserverList, TransformChain};
use crate::mapper::transformers::unknown_seed;
use crate::traits::Thrown;
use crate::types::{ErrorOutput, MapperOptions, Meta};

/// A finished, immutable error mapping pipeline.
///
/// Produced by [`ErrorMapperBuilder::build`](crate::ErrorMapperBuilder::build).
/// Mapping a raw error runs, in order:
///
/// 1. the registered mappings, stopping at the first that recognizes the error
/// 2. the unknown-error observers, only if none did
/// 3. the transform chain, seeded with the mapping's output or a minimal
///    `{ message }` output
///
/// The mapper holds no mutable state; clones share the same snapshot and can
/// be used from any number of threads.
///
/// # Examples
///
/// ```
/// use error_mapper::{CaughtError, ErrorMapperBuilder, MapperOptions};
///
/// let mapper = ErrorMapperBuilder::new(MapperOptions::default()).build();
///
/// let output = mapper.map(&CaughtError::new("db password is hunter2"));
/// assert_eq!(output.message, "Internal server error. Please try again later.");
/// assert!(output.stack.is_none());
/// ```
#[derive(Clone)]
pub struct ErrorMapper {
    inner: Arc<Snapshot>,
}

pub(crate) struct Snapshot {
    pub(crate) mappings: MappingRegistry,
    pub(crate) transforms: TransformChain,
    pub(crate) observers: ObserverList,
    pub(crate) options: MapperOptions,
}

impl ErrorMapper {
    pub(crate) fn from_snapshot(snapshot: Snapshot) -> Self {
        Self { inner: Arc::new(snapshot) }
    }

    /// Maps a raw error to its output.
    ///
    /// Panics raised by user supplied mappings, observers, or transformers
    /// propagate to the caller.
    pub fn map(&self, error: &dyn Thrown) -> ErrorOutput {
        let mapped = self.inner.mappings.evaluate(error);
        let meta = Meta { is_known: mapped.is_some() };

        let seed = match mapped {
            Some(output) => {
                trace_event!(mapped_message = %output.message, "error recognized by mapping");
                output
            },
            None => {
                trace_event!(
                    observers = self.inner.observers.len(),
                    "error not recognized by any mapping"
                );
                self.inner.observers.notify(error);
                unknown_seed(error)
            },
        };

        self.inner.transforms.apply(seed, error, &meta)
    }

    /// Typed convenience over [`map`](Self::map).
    #[inline]
    pub fn map_value<T: Thrown>(&self, error: &T) -> ErrorOutput {
        self.map(error)
    }

    /// Classifies a raw error without notifying observers or transforming.
    #[inline]
    pub fn meta_for(&self, error: &dyn Thrown) -> Meta {
        Meta { is_known: self.inner.mappings.evaluate(error).is_some() }
    }

    /// The options this mapper was built with.
    #[inline]
    pub fn options(&self) -> MapperOptions {
        self.inner.options
    }

    /// Turns the mapper into a plain closure.
    pub fn into_fn(self) -> impl Fn(&dyn Thrown) -> ErrorOutput + Clone + Send + Sync + 'static {
        move |error: &dyn Thrown| self.map(error)
    }
}

impl fmt::Debug for ErrorMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorMapper")
            .field("options", &self.inner.options)
            .field("mappings", &self.inner.mappings)
            .field("transforms", &self.inner.transforms)
            .field("observers", &self.inner.observers)
            .finish()
    }
}
