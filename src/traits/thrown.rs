//! Structural view over arbitrary raw error values.
//!
//! A service boundary can receive anything: a domain error enum, an
//! `io::Error`, a JSON blob from a downstream service, or a bare string.
//! [`Thrown`] lets the mapper ask such values what they look like instead of
//! what type they are.
//!
//! # Examples
//!
//! ```
//! use error_mapper::traits::Thrown;
//! use serde_json::json;
//!
//! let raw = json!({ "message": "boom", "code": "E_BOOM" });
//! assert_eq!(raw.message().as_deref(), Some("boom"));
//! assert_eq!(raw.code().as_deref(), Some("E_BOOM"));
//!
//! // A thrown string is not an error object.
//! assert!(String::from("boom").message().is_none());
//! ```

use std::any::Any;
use std::borrow::Cow;

use serde_json::Value;

/// A raw error value as seen by the mapping pipeline.
///
/// Every capability defaults to "absent"; implementors only override the
/// fields their values actually expose.
///
/// - [`message`](Thrown::message) is present iff the value behaves like a
///   standard error object.
/// - [`stack`](Thrown::stack) is only consulted for error-like values.
/// - [`code`](Thrown::code) is present iff the value exposes a `code` field,
///   whether or not it is error-like.
pub trait Thrown: Any + Send + Sync + 'static {
    /// Message text, if the value looks like a standard error.
    fn message(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Stack trace text, if the value carries one.
    fn stack(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Machine readable code, if the value exposes one.
    fn code(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Upcast used for typed recognition through `<dyn Thrown>::downcast_ref`.
    fn as_any(&self) -> &dyn Any;
}

impl dyn Thrown {
    /// Returns `true` if the raw error is a `T`.
    #[inline]
    pub fn is<T: Thrown>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Returns the raw error as a `T`, if it is one.
    #[inline]
    pub fn downcast_ref<T: Thrown>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Whether the value behaves like a standard error object.
    #[inline]
    pub fn is_error_like(&self) -> bool {
        self.message().is_some()
    }
}

impl core::fmt::Debug for dyn Thrown {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Thrown")
            .field("message", &self.message())
            .field("code", &self.code())
            .finish_non_exhaustive()
    }
}

/// JSON values are matched purely by shape.
///
/// An object with a string `message` is error-like; its string `stack` is the
/// stack trace. Any object with a non-null `code` exposes it, scalars rendered
/// as text.
impl Thrown for Value {
    fn message(&self) -> Option<Cow<'_, str>> {
        self.get("message")
            .and_then(Value::as_str)
            .map(Cow::Borrowed)
    }

    fn stack(&self) -> Option<Cow<'_, str>> {
        self.message()?;
        self.get("stack").and_then(Value::as_str).map(Cow::Borrowed)
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        match self.as_object()?.get("code")? {
            Value::Null => None,
            Value::String(code) => Some(Cow::Borrowed(code.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Thrown for String {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Thrown for &'static str {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Thrown for std::io::Error {
    fn message(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(format!("{:?}", self.kind())))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Thrown for Box<dyn std::error::Error + Send + Sync> {
    fn message(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
