//! Turns arbitrary runtime errors into stable, serializable API payloads.
//!
//! Catch whatever failed at a service boundary, hand it to an [`ErrorMapper`]
//! and get back an [`ErrorOutput`] that is safe to send to the caller:
//!
//! - registered mappings recognize known errors and decide their output
//! - unknown errors notify observers (logging, alerting) and get a generic
//!   message unless the environment allows showing internals
//! - output transformers enrich or redact the result, in order
//!
//! # Examples
//!
//! ## Production defaults
//!
//! ```
//! use error_mapper::{CaughtError, Environment, ErrorMapperBuilder};
//!
//! let mapper = ErrorMapperBuilder::from_env(&Environment::PRODUCTION).build();
//! let output = mapper.map(&CaughtError::new("connection refused").with_code("ECONNREFUSED"));
//!
//! assert_eq!(output.message, "Internal server error. Please try again later.");
//! assert_eq!(output.code.as_deref(), Some("ECONNREFUSED"));
//! assert!(output.stack.is_none());
//! ```
//!
//! ## Known errors
//!
//! ```
//! use error_mapper::mapper::mapping;
//! use error_mapper::{impl_thrown, ErrorMapperBuilder, ErrorOutput, MapperOptions};
//!
//! #[derive(Debug)]
//! struct UserNotFound(u64);
//!
//! impl std::fmt::Display for UserNotFound {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "user {} not found", self.0)
//!     }
//! }
//!
//! impl_thrown!(UserNotFound);
//!
//! let mapper = ErrorMapperBuilder::new(MapperOptions::default())
//!     .register_mapping(mapping::for_type(|e: &UserNotFound| {
//!         ErrorOutput::new("User not found").with_field("userId", e.0)
//!     }))
//!     .build();
//!
//! let json = serde_json::to_value(mapper.map(&UserNotFound(42))).unwrap();
//! assert_eq!(json, serde_json::json!({ "message": "User not found", "userId": 42 }));
//! ```

#[macro_use]
mod macros;

/// The mapping pipeline: builder, mapper, registries and built-in transformers
pub mod mapper;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits describing raw error values
pub mod traits;
/// Output shape, options and other pipeline data
pub mod types;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use mapper::{mapping, transformers, ErrorMapper, ErrorMapperBuilder};
pub use traits::Thrown;
pub use types::{CaughtError, Environment, ErrorOutput, MapperOptions, Meta, OptionsPatch};
