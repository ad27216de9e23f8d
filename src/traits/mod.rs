//! Core traits for error mapping.
//!
//! - [`Thrown`]: structural capabilities of a raw error value (message,
//!   stack trace, code) plus typed downcasting
//!
//! # Examples
//!
//! ```
//! use error_mapper::traits::Thrown;
//!
//! let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
//! let raw: &dyn Thrown = &io;
//!
//! assert!(raw.is_error_like());
//! assert_eq!(raw.code().as_deref(), Some("NotFound"));
//! assert!(raw.downcast_ref::<std::io::Error>().is_some());
//! ```

pub mod thrown;

pub use thrown::Thrown;
