use error_mapper::{Environment, MapperOptions, OptionsPatch};
use serde_json::json;

#[test]
fn defaults_hide_everything() {
    assert_eq!(MapperOptions::default(), MapperOptions::new(false, false));
}

#[test]
fn environment_defaults() {
    assert_eq!(MapperOptions::for_environment(&Environment::DEVELOPMENT), MapperOptions::new(true, true));
    assert_eq!(MapperOptions::for_environment(&Environment::TEST), MapperOptions::new(true, true));
    assert_eq!(
        MapperOptions::for_environment(&Environment { is_development: true, is_test: true }),
        MapperOptions::new(true, true)
    );
    assert_eq!(MapperOptions::for_environment(&Environment::PRODUCTION), MapperOptions::new(false, false));
}

#[test]
fn merge_keeps_unset_fields() {
    let base = MapperOptions::new(true, false);

    assert_eq!(base.merge(OptionsPatch::default()), base);
    assert_eq!(
        base.merge(OptionsPatch { show_stack_trace: Some(false), show_unknown_error_message: None }),
        MapperOptions::new(false, false)
    );
    assert_eq!(base.merge(MapperOptions::new(false, true).into()), MapperOptions::new(false, true));
}

#[test]
fn environment_names() {
    assert_eq!(Environment::from_name("development"), Environment::DEVELOPMENT);
    assert_eq!(Environment::from_name(" Dev "), Environment::DEVELOPMENT);
    assert_eq!(Environment::from_name("TEST"), Environment::TEST);
    assert_eq!(Environment::from_name("testing"), Environment::TEST);
    assert_eq!(Environment::from_name("production"), Environment::PRODUCTION);
    assert_eq!(Environment::from_name(""), Environment::PRODUCTION);
    assert!(Environment::from_name("staging").is_production());
}

#[test]
fn options_deserialize_from_config() {
    let options: MapperOptions =
        serde_json::from_value(json!({ "show_stack_trace": true })).unwrap();
    assert_eq!(options, MapperOptions::new(true, false));

    let options: MapperOptions =
        serde_json::from_value(json!({ "showUnknownErrorMessage": true })).unwrap();
    assert_eq!(options, MapperOptions::new(false, true));

    let patch: OptionsPatch = serde_json::from_value(json!({ "showStackTrace": false })).unwrap();
    assert_eq!(patch, OptionsPatch { show_stack_trace: Some(false), show_unknown_error_message: None });
}
