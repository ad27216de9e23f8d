use std::borrow::Cow;

use error_mapper::traits::Thrown;
use error_mapper::CaughtError;

#[test]
fn exposes_message_code_and_explicit_stack() {
    let err = CaughtError::new("boom").with_code("E_BOOM").with_stack("at main");

    assert_eq!(err.message().as_deref(), Some("boom"));
    assert_eq!(err.code().as_deref(), Some("E_BOOM"));
    assert_eq!(err.stack().as_deref(), Some("at main"));
}

#[test]
fn without_stack_drops_trace() {
    let err = CaughtError::new("boom").without_stack();

    assert!(err.stack().is_none());
    assert!(err.message().is_some());
}

#[test]
fn display_prefixes_name() {
    let err = CaughtError::new("token expired").with_name("AuthError");

    assert_eq!(err.name(), Some("AuthError"));
    assert_eq!(err.to_string(), "AuthError: token expired");
    assert_eq!(CaughtError::new("plain").to_string(), "plain");
}

#[test]
fn from_error_uses_display_text() {
    let source = std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out");
    let err = CaughtError::from_error(&source);

    assert_eq!(err.message().as_deref(), Some("read timed out"));
    assert!(err.code().is_none());
}

#[test]
fn stack_text_is_stable_across_reads() {
    let err = CaughtError::new("boom");

    let first = err.stack();
    let second = err.stack();
    assert_eq!(first, second);
    if let (Some(first), Some(second)) = (first, second) {
        assert!(matches!(first, Cow::Borrowed(_)));
        assert!(matches!(second, Cow::Borrowed(_)));
        assert!(std::ptr::eq(first.as_ptr(), second.as_ptr()));
    }
}

#[test]
fn explicit_stack_is_borrowed() {
    let err = CaughtError::new("boom").with_stack("at main");

    assert!(matches!(err.stack(), Some(Cow::Borrowed("at main"))));
}
