//! Constructors for common mapping functions.
//!
//! A mapping is any `Fn(&dyn Thrown) -> Option<ErrorOutput>`; these helpers
//! cover recognizing by concrete type, by code, and by arbitrary predicate.
//!
//! # Examples
//!
//! ```
//! use error_mapper::mapper::mapping;
//! use error_mapper::{CaughtError, ErrorMapperBuilder, ErrorOutput, MapperOptions};
//!
//! let mapper = ErrorMapperBuilder::new(MapperOptions::default())
//!     .register_mapping(mapping::by_code("E_NOT_FOUND", |_| ErrorOutput::new("Not Found")))
//!     .build();
//!
//! let err = CaughtError::new("row missing").with_code("E_NOT_FOUND");
//! assert_eq!(mapper.map(&err).message, "Not Found");
//! ```

use crate::traits::Thrown;
use crate::types::ErrorOutput;

/// Recognizes raw errors of concrete type `T`.
pub fn for_type<T, F>(f: F) -> impl Fn(&dyn Thrown) -> Option<ErrorOutput> + Send + Sync + 'static
where
    T: Thrown,
    F: Fn(&T) -> ErrorOutput + Send + Sync + 'static,
{
    move |error: &dyn Thrown| error.downcast_ref::<T>().map(|typed| f(typed))
}

/// Recognizes raw errors exposing exactly `code`.
pub fn by_code<F>(
    code: impl Into<String>,
    f: F,
) -> impl Fn(&dyn Thrown) -> Option<ErrorOutput> + Send + Sync + 'static
where
    F: Fn(&dyn Thrown) -> ErrorOutput + Send + Sync + 'static,
{
    let code = code.into();
    move |error: &dyn Thrown| {
        if error.code().as_deref() == Some(code.as_str()) {
            Some(f(error))
        } else {
            None
        }
    }
}

/// Recognizes raw errors for which `predicate` holds.
pub fn when<P, F>(predicate: P, f: F) -> impl Fn(&dyn Thrown) -> Option<ErrorOutput> + Send + Sync + 'static
where
    P: Fn(&dyn Thrown) -> bool + Send + Sync + 'static,
    F: Fn(&dyn Thrown) -> ErrorOutput + Send + Sync + 'static,
{
    move |error: &dyn Thrown| if predicate(error) { Some(f(error)) } else { None }
}
