//! Scalar encoders. Each one hands its input straight to the matching
//! `serde_json::Value` constructor without validation.

use serde_json::Value;

use crate::Encoder;

/// Encodes a string slice as a JSON string.
pub fn string() -> Encoder<str> {
    Encoder::new(|s: &str| Value::String(s.to_owned()))
}

/// Encodes a signed integer as a JSON number.
pub fn int() -> Encoder<i64> {
    Encoder::new(|n: &i64| Value::from(*n))
}

/// Encodes an unsigned integer as a JSON number.
pub fn uint() -> Encoder<u64> {
    Encoder::new(|n: &u64| Value::from(*n))
}

/// Encodes a float as a JSON number.
///
/// Non-finite input is left to serde_json, which maps it to `null`.
pub fn float() -> Encoder<f64> {
    Encoder::new(|n: &f64| Value::from(*n))
}

/// Encodes a boolean as a JSON boolean.
pub fn bool() -> Encoder<bool> {
    Encoder::new(|b: &bool| Value::Bool(*b))
}

/// Ignores its input and always yields JSON `null`.
pub fn null<T: ?Sized + 'static>() -> Encoder<T> {
    Encoder::new(|_: &T| Value::Null)
}

/// Ignores its input and always yields a clone of `value`.
pub fn constant<T: ?Sized + 'static>(value: Value) -> Encoder<T> {
    Encoder::new(move |_: &T| value.clone())
}

/// Passes an already-built JSON value through.
pub fn value() -> Encoder<Value> {
    Encoder::new(Value::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_finite_float_is_delegated() {
        assert_eq!(float().encode(&f64::NAN), Value::from(f64::NAN));
        assert_eq!(float().encode(&f64::INFINITY), Value::Null);
    }

    #[test]
    fn null_ignores_input() {
        assert_eq!(null::<str>().encode("anything"), Value::Null);
        assert_eq!(null::<Vec<u8>>().encode(&vec![1, 2]), Value::Null);
    }

    #[test]
    fn constant_repeats_value() {
        let e = constant::<i64>(json!({"k": [1]}));
        assert_eq!(e.encode(&1), json!({"k": [1]}));
        assert_eq!(e.encode(&2), json!({"k": [1]}));
    }
}
