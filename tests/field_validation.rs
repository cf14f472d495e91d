use fieldcheck::validators::{
    IntegerInRange, MatchesPattern, NonNegativeDuration, NonNegativeInteger, Ratio,
};
use fieldcheck::{FloatValidator, IntValidator, StringValidator};

#[test]
fn validators_register_as_trait_objects() {
    // The host holds validators behind the capability traits, selected per
    // field at schema-registration time.
    let int_checks: Vec<Box<dyn IntValidator>> = vec![
        Box::new(IntegerInRange::new(0, 65_535)),
        Box::new(NonNegativeInteger),
    ];
    for check in &int_checks {
        assert!(check.validate(8080, "external_port").is_valid());
        assert!(!check.validate(-1, "external_port").is_valid());
    }

    let string_checks: Vec<Box<dyn StringValidator>> = vec![
        Box::new(NonNegativeDuration),
        Box::new(MatchesPattern::new("^[0-9]+[smh]$")),
    ];
    for check in &string_checks {
        assert!(check.validate("30s", "health_interval").is_valid());
    }
}

#[test]
fn validators_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + ?Sized>() {}
    assert_send_sync::<IntegerInRange>();
    assert_send_sync::<NonNegativeInteger>();
    assert_send_sync::<Ratio>();
    assert_send_sync::<NonNegativeDuration>();
    assert_send_sync::<MatchesPattern>();
    assert_send_sync::<dyn IntValidator>();
    assert_send_sync::<dyn FloatValidator>();
    assert_send_sync::<dyn StringValidator>();
}

#[test]
fn error_messages_match_the_reporting_contract() {
    let below = IntegerInRange::new(1, 10).validate(0, "retry_count");
    insta::assert_snapshot!(below.errors[0], @r#""retry_count" cannot be lower than 1: 0"#);

    let above = IntegerInRange::new(1, 10).validate(11, "retry_count");
    insta::assert_snapshot!(above.errors[0], @r#""retry_count" cannot be higher than 10: 11"#);

    let negative = NonNegativeInteger.validate(-1, "memory");
    insta::assert_snapshot!(negative.errors[0], @r#""memory" cannot be lower than 0"#);

    let ratio = Ratio.validate(1.5, "cpu_ratio");
    insta::assert_snapshot!(ratio.errors[0], @r#""cpu_ratio" has to be between 0.0 and 1.0"#);

    let unparseable = NonNegativeDuration.validate("abc", "health_interval");
    insta::assert_snapshot!(unparseable.errors[0], @r#""health_interval" is not a valid duration"#);

    let negative_duration = NonNegativeDuration.validate("-5s", "health_interval");
    insta::assert_snapshot!(negative_duration.errors[0], @"duration must not be negative");

    let bad_pattern = MatchesPattern::new("(").validate("anything", "name");
    insta::assert_snapshot!(bad_pattern.errors[0], @r#""(" regex does not compile"#);

    let mismatch = MatchesPattern::new("^[a-z]+$").validate("ABC", "name");
    insta::assert_snapshot!(mismatch.errors[0], @r#""name" doesn't match the pattern ("^[a-z]+$"): "ABC""#);
}
