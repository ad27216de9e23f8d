//! Macros for making domain error types mappable.
//!
//! - [`macro@crate::impl_thrown`] - Implements [`Thrown`](crate::traits::Thrown) for a
//!   `Display` type so its values behave like standard error objects.

/// Implements [`Thrown`](crate::traits::Thrown) for a type implementing `Display`.
///
/// The value's `Display` text becomes its message. An optional `code`
/// extractor exposes a machine readable code.
///
/// # Examples
///
/// ```
/// use error_mapper::impl_thrown;
/// use error_mapper::traits::Thrown;
///
/// #[derive(Debug)]
/// struct NotFound {
///     id: u64,
/// }
///
/// impl std::fmt::Display for NotFound {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "record {} not found", self.id)
///     }
/// }
///
/// impl_thrown!(NotFound, code = |_| Some("E_NOT_FOUND".to_string()));
///
/// let err = NotFound { id: 7 };
/// assert_eq!(err.message().as_deref(), Some("record 7 not found"));
/// assert_eq!(err.code().as_deref(), Some("E_NOT_FOUND"));
/// ```
#[macro_export]
macro_rules! impl_thrown {
    ($ty:ty) => {
        impl $crate::traits::Thrown for $ty {
            fn message(&self) -> ::core::option::Option<::std::borrow::Cow<'_, str>> {
                ::core::option::Option::Some(::std::borrow::Cow::Owned(
                    ::std::string::ToString::to_string(self),
                ))
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }
    };
    ($ty:ty, code = $code:expr) => {
        impl $crate::traits::Thrown for $ty {
            fn message(&self) -> ::core::option::Option<::std::borrow::Cow<'_, str>> {
                ::core::option::Option::Some(::std::borrow::Cow::Owned(
                    ::std::string::ToString::to_string(self),
                ))
            }

            fn code(&self) -> ::core::option::Option<::std::borrow::Cow<'_, str>> {
                let extract: fn(&$ty) -> ::core::option::Option<::std::string::String> = $code;
                extract(self).map(::std::borrow::Cow::Owned)
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }
    };
}

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}
