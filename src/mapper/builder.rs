use crate::mapper::error_mapper::{ErrorMapper, Snapshot};
use crate::mapper::registry::{MappingRegistry, ObserverList, TransformChain};
use crate::mapper::transformers;
use crate::traits::Thrown;
use crate::types::{Environment, ErrorOutput, MapperOptions, Meta, OptionsPatch};

/// Assembles an [`ErrorMapper`] from mappings, transformers, observers and
/// options.
///
/// The builder only accumulates: each registration appends to its registry in
/// order. [`build`](Self::build) snapshots everything into an immutable
/// mapper; later changes to the builder never affect mappers already built.
///
/// # Examples
///
/// ```
/// use error_mapper::{CaughtError, ErrorMapperBuilder, ErrorOutput, MapperOptions};
///
/// let mapper = ErrorMapperBuilder::new(MapperOptions::default())
///     .register_mapping(|err| {
///         (err.message().as_deref() == Some("no such user")).then(|| ErrorOutput::new("Not Found"))
///     })
///     .register_output_transformer(|output, _err, meta| {
///         output.with_field("known", meta.is_known)
///     })
///     .build();
///
/// let output = mapper.map(&CaughtError::new("no such user"));
/// assert_eq!(output.message, "Not Found");
/// assert_eq!(output.field("known"), Some(&serde_json::Value::Bool(true)));
/// ```
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct ErrorMapperBuilder {
    mappings: MappingRegistry,
    transforms: TransformChain,
    observers: ObserverList,
    options: MapperOptions,
}

impl ErrorMapperBuilder {
    /// Creates a builder with explicit options.
    #[inline]
    pub fn new(options: MapperOptions) -> Self {
        Self {
            mappings: MappingRegistry::new(),
            transforms: TransformChain::new(),
            observers: ObserverList::new(),
            options,
        }
    }

    /// Creates a builder with the defaults for `env`: stack traces and
    /// unknown error messages are shown in development and test only.
    #[inline]
    pub fn from_env(env: &Environment) -> Self {
        Self::new(MapperOptions::for_environment(env))
    }

    /// [`from_env`](Self::from_env) with the mode read from `APP_ENV`.
    #[inline]
    pub fn from_process_env() -> Self {
        Self::from_env(&Environment::detect())
    }

    /// Shallow-merges `patch` into the current options.
    #[inline]
    pub fn set_options(mut self, patch: impl Into<OptionsPatch>) -> Self {
        self.options = self.options.merge(patch.into());
        self
    }

    /// Appends a mapping. Mappings run in registration order and the first
    /// one returning `Some` decides the output.
    pub fn register_mapping<F>(mut self, mapping: F) -> Self
    where
        F: Fn(&dyn Thrown) -> Option<ErrorOutput> + Send + Sync + 'static,
    {
        self.mappings.push(mapping);
        self
    }

    /// Appends an output transformer. User transformers run after the
    /// built-in ones, in registration order.
    pub fn register_output_transformer<F>(mut self, transform: F) -> Self
    where
        F: Fn(ErrorOutput, &dyn Thrown, &Meta) -> ErrorOutput + Send + Sync + 'static,
    {
        self.transforms.push(transform);
        self
    }

    /// Appends an observer called with every error no mapping recognized.
    pub fn on_unknown_error<F>(mut self, observer: F) -> Self
    where
        F: Fn(&dyn Thrown) + Send + Sync + 'static,
    {
        self.observers.push(observer);
        self
    }

    /// The options as currently configured.
    #[inline]
    pub fn options(&self) -> MapperOptions {
        self.options
    }

    /// Freezes the current configuration into an [`ErrorMapper`].
    ///
    /// Built-in transformers are chosen from the options at this moment and
    /// placed ahead of user transformers. Each call yields an independent
    /// mapper.
    pub fn build(&self) -> ErrorMapper {
        let options = self.options;

        let mut transforms = TransformChain::new();
        if options.show_stack_trace {
            transforms.push(transformers::stack_trace);
        }
        transforms.push(transformers::forward_code);
        if !options.show_unknown_error_message {
            transforms.push(transformers::redact_unknown_message);
        }
        transforms.extend_from(&self.transforms);

        trace_event!(
            mappings = self.mappings.len(),
            transforms = transforms.len(),
            observers = self.observers.len(),
            show_stack_trace = options.show_stack_trace,
            show_unknown_error_message = options.show_unknown_error_message,
            "error mapper built"
        );

        ErrorMapper::from_snapshot(Snapshot {
            mappings: self.mappings.clone(),
            transforms,
            observers: self.observers.clone(),
            options,
        })
    }
}
