use error_mapper::mapping::{by_code, for_type, when};
use error_mapper::{impl_thrown, CaughtError, ErrorMapperBuilder, ErrorOutput};
use serde_json::json;

use super::options;

#[derive(Debug)]
enum RepoError {
    Missing(u64),
    Conflict,
}

impl std::fmt::Display for RepoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepoError::Missing(id) => write!(f, "row {} missing", id),
            RepoError::Conflict => f.write_str("version conflict"),
        }
    }
}

impl_thrown!(RepoError);

#[test]
fn for_type_recognizes_only_its_type() {
    let mapper = ErrorMapperBuilder::new(options(false, false))
        .register_mapping(for_type(|err: &RepoError| match err {
            RepoError::Missing(id) => ErrorOutput::new("Not Found").with_field("id", *id),
            RepoError::Conflict => ErrorOutput::new("Conflict"),
        }))
        .build();

    let output = mapper.map(&RepoError::Missing(3));
    assert_eq!(serde_json::to_value(&output).unwrap(), json!({ "message": "Not Found", "id": 3 }));
    assert_eq!(mapper.map(&RepoError::Conflict).message, "Conflict");

    let output = mapper.map(&CaughtError::new("row 3 missing"));
    assert_eq!(output.message, "Internal server error. Please try again later.");
}

#[test]
fn by_code_matches_exact_code() {
    let mapper = ErrorMapperBuilder::new(options(false, true))
        .register_mapping(by_code("E_NOT_FOUND", |_| ErrorOutput::new("Not Found")))
        .build();

    assert_eq!(mapper.map(&json!({ "code": "E_NOT_FOUND" })).message, "Not Found");
    assert_eq!(mapper.map(&json!({ "code": "E_NOT_FOUND_2", "message": "x" })).message, "x");
}

#[test]
fn when_uses_predicate_and_sees_raw_error() {
    let mapper = ErrorMapperBuilder::new(options(false, false))
        .register_mapping(when(
            |err| err.message().is_some_and(|m| m.contains("timeout")),
            |err| {
                let detail = err.message().unwrap_or_default().into_owned();
                ErrorOutput::new("Upstream timed out").with_field("detail", detail)
            },
        ))
        .build();

    let output = mapper.map(&CaughtError::new("db timeout after 5s"));
    assert_eq!(output.message, "Upstream timed out");
    assert_eq!(output.field("detail"), Some(&json!("db timeout after 5s")));
}

#[test]
fn helpers_compose_in_registration_order() {
    let mapper = ErrorMapperBuilder::new(options(false, true))
        .register_mapping(by_code("E_ANY", |_| ErrorOutput::new("by code")))
        .register_mapping(for_type(|_: &CaughtError| ErrorOutput::new("by type")))
        .build();

    let error = CaughtError::new("both").with_code("E_ANY");
    assert_eq!(mapper.map(&error).message, "by code");
    assert_eq!(mapper.map(&CaughtError::new("typed")).message, "by type");
}
