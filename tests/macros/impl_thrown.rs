use error_mapper::traits::Thrown;
use error_mapper::{impl_thrown, ErrorMapperBuilder, MapperOptions};

#[derive(Debug)]
struct Timeout;

impl std::fmt::Display for Timeout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("upstream timed out")
    }
}

impl_thrown!(Timeout);

#[derive(Debug)]
struct HttpFailure {
    status: u16,
}

impl std::fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "upstream answered {}", self.status)
    }
}

impl_thrown!(HttpFailure, code = |e| Some(format!("HTTP_{}", e.status)));

#[test]
fn display_becomes_message() {
    assert_eq!(Timeout.message().as_deref(), Some("upstream timed out"));
    assert!(Timeout.code().is_none());
    assert!(Timeout.stack().is_none());
}

#[test]
fn code_extractor_is_used() {
    let err = HttpFailure { status: 502 };

    assert_eq!(err.code().as_deref(), Some("HTTP_502"));
    assert_eq!(err.message().as_deref(), Some("upstream answered 502"));
}

#[test]
fn macro_types_flow_through_mapper() {
    let mapper = ErrorMapperBuilder::new(MapperOptions::new(false, true)).build();

    let output = mapper.map_value(&HttpFailure { status: 503 });

    assert_eq!(output.message, "upstream answered 503");
    assert_eq!(output.code.as_deref(), Some("HTTP_503"));
}
