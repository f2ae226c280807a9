//! Pure helper functions for extracting typed parameters from a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.
//! These never fail — they always produce a usable value, which is how the
//! engine keeps configuration loading infallible.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts both JSON numbers (including integers) and converts them to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `u32` from `params[name]`, returning `default` if missing,
/// negative, fractional, or out of range.
pub fn param_u32(params: &Value, name: &str, default: u32) -> u32 {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}

/// Extracts a `u64` from `params[name]`, returning `default` if missing,
/// negative, or fractional.
pub fn param_u64(params: &Value, name: &str, default: u64) -> u64 {
    params.get(name).and_then(Value::as_u64).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- param_f64 --

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"speed": 2.5});
        assert!((param_f64(&params, "speed", 1.0) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let params = json!({"speed": 10});
        assert!((param_f64(&params, "speed", 0.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_key_missing() {
        let params = json!({"other": 1.0});
        assert!((param_f64(&params, "speed", 3.0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_wrong_type() {
        let params = json!({"speed": "fast"});
        assert!((param_f64(&params, "speed", 1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_for_non_object() {
        let params = json!("not an object");
        assert!((param_f64(&params, "speed", 7.0) - 7.0).abs() < f64::EPSILON);
    }

    // -- param_u32 --

    #[test]
    fn param_u32_extracts_existing_integer() {
        let params = json!({"frame_limit": 60});
        assert_eq!(param_u32(&params, "frame_limit", 0), 60);
    }

    #[test]
    fn param_u32_returns_default_when_key_missing() {
        let params = json!({});
        assert_eq!(param_u32(&params, "frame_limit", 30), 30);
    }

    #[test]
    fn param_u32_returns_default_for_float_value() {
        let params = json!({"frame_limit": 2.5});
        assert_eq!(param_u32(&params, "frame_limit", 99), 99);
    }

    #[test]
    fn param_u32_returns_default_for_negative_integer() {
        let params = json!({"frame_limit": -1});
        assert_eq!(param_u32(&params, "frame_limit", 5), 5);
    }

    #[test]
    fn param_u32_returns_default_for_overflowing_value() {
        let params = json!({"frame_limit": u64::from(u32::MAX) + 1});
        assert_eq!(param_u32(&params, "frame_limit", 8), 8);
    }

    // -- param_u64 --

    #[test]
    fn param_u64_extracts_existing_integer() {
        let params = json!({"seed": 8_675_309});
        assert_eq!(param_u64(&params, "seed", 0), 8_675_309);
    }

    #[test]
    fn param_u64_returns_default_when_key_missing() {
        let params = json!({});
        assert_eq!(param_u64(&params, "seed", 42), 42);
    }

    #[test]
    fn param_u64_returns_default_for_string_value() {
        let params = json!({"seed": "many"});
        assert_eq!(param_u64(&params, "seed", 7), 7);
    }
}
