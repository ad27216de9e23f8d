//! A general purpose "standard error object".

use std::any::Any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use crate::traits::Thrown;

#[derive(Debug)]
enum Stack {
    None,
    Text(String),
    Captured { backtrace: Backtrace, rendered: OnceLock<String> },
}

/// An error carrying a message, an optional code and name, and a stack trace.
///
/// Use it where a raw error should behave like a standard error object
/// without defining a dedicated type. [`CaughtError::new`] captures the
/// current backtrace through [`Backtrace::capture`], so a stack trace is only
/// recorded when `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` enables it. Use
/// [`with_stack`](CaughtError::with_stack) to supply one explicitly. A
/// captured backtrace is rendered to text on first use and reused after.
///
/// # Examples
///
/// ```
/// use error_mapper::traits::Thrown;
/// use error_mapper::CaughtError;
///
/// let err = CaughtError::new("connection reset")
///     .with_code("ECONNRESET")
///     .with_stack("at db::connect");
/// assert_eq!(err.message().as_deref(), Some("connection reset"));
/// assert_eq!(err.code().as_deref(), Some("ECONNRESET"));
/// assert_eq!(err.stack().as_deref(), Some("at db::connect"));
/// ```
#[derive(Debug)]
pub struct CaughtError {
    message: String,
    code: Option<String>,
    name: Option<String>,
    stack: Stack,
}

impl CaughtError {
    /// Creates an error and captures the current backtrace as its stack, if
    /// backtraces are enabled for the process.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        let backtrace = Backtrace::capture();
        let stack = match backtrace.status() {
            BacktraceStatus::Captured => Stack::Captured { backtrace, rendered: OnceLock::new() },
            _ => Stack::None,
        };
        Self { message: message.into(), code: None, name: None, stack }
    }

    /// Creates an error from any `std::error::Error`, using its `Display` text.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::new(error.to_string())
    }

    /// Sets the machine readable code.
    #[inline]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the error name, e.g. the kind of failure.
    #[inline]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the captured stack with explicit text.
    #[inline]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Stack::Text(stack.into());
        self
    }

    /// Drops the stack trace.
    #[inline]
    pub fn without_stack(mut self) -> Self {
        self.stack = Stack::None;
        self
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for CaughtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}: {}", name, self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for CaughtError {}

impl Thrown for CaughtError {
    fn message(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.message))
    }

    fn stack(&self) -> Option<Cow<'_, str>> {
        match &self.stack {
            Stack::None => None,
            Stack::Text(text) => Some(Cow::Borrowed(text)),
            Stack::Captured { backtrace, rendered } => {
                Some(Cow::Borrowed(rendered.get_or_init(|| backtrace.to_string())))
            },
        }
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        self.code.as_deref().map(Cow::Borrowed)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
