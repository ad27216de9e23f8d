//! The mapping pipeline: registries, built-in transformers, builder and mapper.
//!
//! - [`ErrorMapperBuilder`]: accumulates mappings, transformers and observers
//! - [`ErrorMapper`]: the frozen `raw error -> ErrorOutput` function
//! - [`mapping`]: helpers that construct common mappings
//! - [`transformers`]: the stack trace, code forwarding and redaction policies

pub mod builder;
pub mod error_mapper;
pub mod mapping;
pub mod registry;
pub mod transformers;

#[cfg(feature = "tracing")]
pub mod observers;

pub use builder::ErrorMapperBuilder;
pub use error_mapper::ErrorMapper;
pub use registry::{
    MappingFn, MappingRegistry, ObserverFn, ObserverList, TransformChain, TransformFn,
};
