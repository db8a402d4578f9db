use jsonenc::{Value, bool, constant, float, int, null, string, uint, value};
use serde_json::json;

#[test]
fn scalars_match_direct_construction() {
    assert_eq!(string().encode("x"), Value::String("x".to_string()));
    assert_eq!(int().encode(&-3), Value::from(-3i64));
    assert_eq!(uint().encode(&u64::MAX), Value::from(u64::MAX));
    assert_eq!(float().encode(&1.25), Value::from(1.25f64));
    assert_eq!(bool().encode(&true), Value::Bool(true));
}

#[test]
fn null_is_a_placeholder_for_any_shape() {
    assert_eq!(null::<i64>().encode(&5), Value::Null);
    assert_eq!(null::<[String]>().encode(&[]), Value::Null);
}

#[test]
fn constant_and_value_passthrough() {
    assert_eq!(constant::<str>(json!("v1")).encode("ignored"), json!("v1"));
    let raw = json!({"nested": [1, {"a": null}]});
    assert_eq!(value().encode(&raw), raw);
}

#[test]
fn float_defers_non_finite_to_serde_json() {
    for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(float().encode(&f), Value::from(f));
    }
}
