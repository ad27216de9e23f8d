//! Built-in output transformers.
//!
//! [`ErrorMapperBuilder::build`](crate::ErrorMapperBuilder::build) registers
//! these ahead of user transformers, in this order:
//!
//! 1. [`stack_trace`] when `show_stack_trace` is on
//! 2. [`forward_code`], always
//! 3. [`redact_unknown_message`] when `show_unknown_error_message` is off
//!
//! They are plain functions with the transformer signature, so they can also
//! be registered by hand.

use crate::traits::Thrown;
use crate::types::{ErrorOutput, Meta};

/// Message of the seed output when the raw error exposes no message.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Message that replaces the text of unrecognized errors when redaction is on.
pub const REDACTED_MESSAGE: &str = "Internal server error. Please try again later.";

/// Copies the raw error's stack trace into `output.stack`.
///
/// Only error-like values are considered; anything else leaves the output
/// untouched. Applies to known and unknown errors alike.
pub fn stack_trace(mut output: ErrorOutput, error: &dyn Thrown, _meta: &Meta) -> ErrorOutput {
    if error.is_error_like() {
        if let Some(stack) = error.stack() {
            output.stack = Some(stack.into_owned());
        }
    }
    output
}

/// Copies the raw error's `code` into `output.code`.
pub fn forward_code(mut output: ErrorOutput, error: &dyn Thrown, _meta: &Meta) -> ErrorOutput {
    if let Some(code) = error.code() {
        output.code = Some(code.into_owned());
    }
    output
}

/// Replaces the message of unknown errors with [`REDACTED_MESSAGE`].
pub fn redact_unknown_message(
    mut output: ErrorOutput,
    _error: &dyn Thrown,
    meta: &Meta,
) -> ErrorOutput {
    if !meta.is_known {
        output.message = REDACTED_MESSAGE.into();
    }
    output
}

/// Seed output for an error no mapping recognized.
pub(crate) fn unknown_seed(error: &dyn Thrown) -> ErrorOutput {
    match error.message() {
        Some(message) => ErrorOutput::new(message.into_owned()),
        None => ErrorOutput::new(UNKNOWN_ERROR_MESSAGE),
    }
}
