//! Data types flowing through the mapping pipeline.
//!
//! # Examples
//!
//! ```
//! use error_mapper::{Environment, ErrorOutput, MapperOptions};
//!
//! let options = MapperOptions::for_environment(&Environment::TEST);
//! assert!(options.show_stack_trace);
//!
//! let output = ErrorOutput::new("Not Found").with_code("E_NOT_FOUND");
//! assert_eq!(output.to_string(), "Not Found (code: E_NOT_FOUND)");
//! ```

pub mod caught_error;
pub mod error_output;
pub mod meta;
pub mod options;

pub use caught_error::CaughtError;
pub use error_output::ErrorOutput;
pub use meta::Meta;
pub use options::{Environment, MapperOptions, OptionsPatch, ENV_VAR};
