//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_mapper::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`impl_thrown!`]
//! - **Types**: [`ErrorMapperBuilder`], [`ErrorMapper`], [`ErrorOutput`], [`CaughtError`],
//!   [`MapperOptions`], [`OptionsPatch`], [`Environment`], [`Meta`]
//! - **Traits**: [`Thrown`]
//! - **Modules**: [`mapping`]
//!
//! # Examples
//!
//! ```
//! use error_mapper::prelude::*;
//!
//! let mapper = ErrorMapperBuilder::from_env(&Environment::DEVELOPMENT).build();
//! let output = mapper.map(&CaughtError::new("boom").without_stack());
//! assert_eq!(output.message, "boom");
//! ```

// Macros
pub use crate::impl_thrown;

// Core types
pub use crate::mapper::{mapping, ErrorMapper, ErrorMapperBuilder};
pub use crate::types::{CaughtError, Environment, ErrorOutput, MapperOptions, Meta, OptionsPatch};

// Traits
pub use crate::traits::Thrown;
