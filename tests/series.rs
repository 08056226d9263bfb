use anyhow::Result;
use series_reduce::{Number, ReducerKind, Series, is_absent, reduce};

#[test]
fn absent_predicate() {
    assert!(is_absent(None));
    assert!(is_absent(Some(f64::NAN)));
    assert!(!is_absent(Some(0.0)));
    assert!(!is_absent(Some(-0.0)));
    assert!(!is_absent(Some(f64::NEG_INFINITY)));
}

#[test]
fn valid_values_skip_absent_in_order() {
    let s = Series::from_samples(vec![None, Some(1.0), Some(f64::NAN), Some(2.0), None]);
    assert_eq!(s.valid_values().collect::<Vec<_>>(), vec![1.0, 2.0]);
    assert_eq!(s.valid_values().next_back(), Some(2.0));
    assert_eq!(s.absent_count(), 3);
    assert_eq!(s.len(), 5);
}

#[test]
fn from_json_reads_nulls_as_missing() -> Result<()> {
    let s = Series::from_json(
        r#"{"name":"latency","labels":{"region":"eu","host":"a"},"values":[1.5,null,2.5]}"#,
    )?;
    assert_eq!(s.name, "latency");
    assert_eq!(s.labels.get("region").map(String::as_str), Some("eu"));
    assert_eq!(s.values(), &[Some(1.5), None, Some(2.5)]);
    Ok(())
}

#[test]
fn from_json_defaults_name_and_labels() -> Result<()> {
    let s = Series::from_json(r#"{"values":[]}"#)?;
    assert!(s.is_empty());
    assert!(s.name.is_empty());
    assert!(s.labels.is_empty());
    Ok(())
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = Series::from_json(r#"{"values":"nope"}"#).unwrap_err();
    assert!(err.to_string().contains("failed to parse series"));
}

#[test]
fn conversions() {
    let a: Series = vec![1.0, 2.0].into();
    let b: Series = vec![Some(1.0), Some(2.0)].into();
    let c: Series = [Some(1.0), Some(2.0)].into_iter().collect();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn number_display_and_conversions() {
    assert_eq!(Number::no_value().to_string(), "<no value>");
    assert_eq!(Number::from_value(2.5).to_string(), "2.5");
    assert_eq!(Number::from(Some(1.0)).value(), Some(1.0));
    assert_eq!(Option::<f64>::from(Number::no_value()), None);
    assert!(!Number::from_value(f64::NAN).is_finite());
    assert!(Number::from_value(f64::NAN).has_value());
    assert!(!Number::no_value().is_finite());
}

#[test]
fn number_serializes_as_nullable_float() -> Result<()> {
    assert_eq!(serde_json::to_string(&Number::from_value(3.0))?, "3.0");
    assert_eq!(serde_json::to_string(&Number::no_value())?, "null");
    Ok(())
}

#[test]
fn infinite_result_survives_json_round_trip() -> Result<()> {
    let n = reduce(&Series::from_values(vec![0.0, 5.0]), ReducerKind::PercentDiffAbs);
    let json = serde_json::to_string(&n)?;
    assert_eq!(json, r#""+Inf""#);

    let back: Number = serde_json::from_str(&json)?;
    assert!(back.has_value());
    assert_eq!(back.value(), Some(f64::INFINITY));
    Ok(())
}

#[test]
fn nan_result_survives_json_round_trip() -> Result<()> {
    let n = reduce(&Series::from_values(vec![0.0, 0.0]), ReducerKind::PercentDiff);
    let json = serde_json::to_string(&n)?;
    assert_eq!(json, r#""NaN""#);

    let back: Number = serde_json::from_str(&json)?;
    assert!(back.has_value());
    assert!(back.value().is_some_and(f64::is_nan));
    Ok(())
}

#[test]
fn negative_infinity_and_no_value_round_trip() -> Result<()> {
    let neg = Number::from_value(f64::NEG_INFINITY);
    assert_eq!(serde_json::to_string(&neg)?, r#""-Inf""#);
    assert_eq!(serde_json::from_str::<Number>(r#""-Inf""#)?, neg);

    let none: Number = serde_json::from_str("null")?;
    assert!(!none.has_value());
    assert_eq!(serde_json::from_str::<Number>("2.5")?, Number::from_value(2.5));
    Ok(())
}

#[test]
fn unknown_non_finite_string_is_rejected() {
    assert!(serde_json::from_str::<Number>(r#""Infinity""#).is_err());
}

#[test]
fn valid_values_match_present_samples_helper() {
    let s = Series::from_samples(vec![Some(f64::NAN), Some(3.0), None, Some(-1.0)]);
    assert_eq!(
        series_reduce::series::present(s.values()).collect::<Vec<_>>(),
        s.valid_values().collect::<Vec<_>>()
    );
}
