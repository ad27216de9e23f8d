use error_mapper::ErrorOutput;
use serde_json::json;

#[test]
fn serializes_only_present_fields() {
    let output = ErrorOutput::new("Not Found");

    assert_eq!(serde_json::to_value(&output).unwrap(), json!({ "message": "Not Found" }));
}

#[test]
fn serializes_extra_fields_flattened() {
    let output = ErrorOutput::new("Invalid")
        .with_code("E_INVALID")
        .with_name("ValidationError")
        .with_stack("at validate")
        .with_field("fields", json!(["email"]));

    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        json!({
            "message": "Invalid",
            "code": "E_INVALID",
            "name": "ValidationError",
            "stack": "at validate",
            "fields": ["email"]
        })
    );
}

#[test]
fn deserializes_unknown_keys_into_extra() {
    let output: ErrorOutput =
        serde_json::from_value(json!({ "message": "m", "code": "C", "retryAfter": 30 })).unwrap();

    assert_eq!(output.code.as_deref(), Some("C"));
    assert_eq!(output.field("retryAfter"), Some(&json!(30)));
    assert!(output.stack.is_none());
}

#[test]
fn deserializing_requires_message() {
    let result = serde_json::from_value::<ErrorOutput>(json!({ "code": "C" }));

    assert!(result.is_err());
}

#[test]
fn well_known_keys_route_to_typed_fields() {
    let mut output = ErrorOutput::new("first")
        .with_field("code", "E_1")
        .with_field("message", "second")
        .with_field("stack", json!(null));

    assert_eq!(output.message, "second");
    assert_eq!(output.code.as_deref(), Some("E_1"));
    assert!(output.extra().is_empty());

    output.set_field("code", 500);
    assert_eq!(output.code.as_deref(), Some("500"));

    output.set_field("code", json!(null));
    assert!(output.code.is_none());
}

#[test]
fn remove_field_returns_previous_value() {
    let mut output = ErrorOutput::new("m").with_field("traceId", "abc");

    assert_eq!(output.remove_field("traceId"), Some(json!("abc")));
    assert_eq!(output.remove_field("traceId"), None);
}

#[test]
fn display_includes_code() {
    assert_eq!(ErrorOutput::new("boom").to_string(), "boom");
    assert_eq!(ErrorOutput::new("boom").with_code("E").to_string(), "boom (code: E)");
}

#[test]
fn converts_from_text() {
    assert_eq!(ErrorOutput::from("a"), ErrorOutput::new("a"));
    assert_eq!(ErrorOutput::from(String::from("b")), ErrorOutput::new("b"));
}

#[test]
fn well_known_field_keys_serialize_once() {
    let output = ErrorOutput::new("safe")
        .with_field("message", "leaked internal")
        .with_field("code", "E_INNER")
        .with_field("name", "Inner")
        .with_field("stack", "at inner")
        .with_field("traceId", "abc");

    let body = serde_json::to_string(&output).unwrap();
    for key in ["\"message\"", "\"code\"", "\"name\"", "\"stack\"", "\"traceId\""] {
        assert_eq!(body.matches(key).count(), 1, "{key} in {body}");
    }

    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["message"], json!(output.message));
    assert_eq!(output.extra().len(), 1);

    let back: ErrorOutput = serde_json::from_str(&body).unwrap();
    assert_eq!(back, output);
}
