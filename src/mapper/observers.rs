//! Ready-made unknown-error observers (requires `tracing` feature).

use crate::mapper::transformers::UNKNOWN_ERROR_MESSAGE;
use crate::traits::Thrown;

/// Emits an `ERROR` level `tracing` event for an unrecognized error.
///
/// The event carries the raw error's own message and code, so the details
/// hidden from the API caller still reach the logs.
///
/// # Examples
///
/// ```
/// use error_mapper::mapper::observers::log_unknown_error;
/// use error_mapper::{ErrorMapperBuilder, MapperOptions};
///
/// let mapper = ErrorMapperBuilder::new(MapperOptions::default())
///     .on_unknown_error(log_unknown_error)
///     .build();
/// # let _ = mapper;
/// ```
pub fn log_unknown_error(error: &dyn Thrown) {
    let message = error.message();
    let code = error.code();
    let stack = error.stack();
    tracing::error!(
        error.message = message.as_deref().unwrap_or(UNKNOWN_ERROR_MESSAGE),
        error.code = code.as_deref(),
        error.has_stack = stack.is_some(),
        "unrecognized error reached the service boundary"
    );
}
