//! Defaulting readers for engine parameters stored in a `serde_json::Value`.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or holds the wrong type, the default is returned. Range checks are
//! left to the engine, which clamps to its own bounds.

use serde_json::Value;

/// Extracts a signed integer from `params[name]`, returning `default` if
/// missing, fractional, or not a number.
pub fn param_i64(params: &Value, name: &str, default: i64) -> i64 {
    params.get(name).and_then(Value::as_i64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing,
/// negative, fractional, or not a number.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_i64_accepts_negative_values() {
        let params = json!({"freq_y": -4});
        assert_eq!(param_i64(&params, "freq_y", 2), -4);
    }

    #[test]
    fn param_i64_returns_default_for_fraction() {
        let params = json!({"freq_x": 2.5});
        assert_eq!(param_i64(&params, "freq_x", 3), 3);
    }

    #[test]
    fn param_usize_extracts_existing_integer() {
        let params = json!({"particles": 800});
        assert_eq!(param_usize(&params, "particles", 0), 800);
    }

    #[test]
    fn param_usize_returns_default_for_negative_or_fraction() {
        let params = json!({"a": -1, "b": 2.5, "c": "many"});
        assert_eq!(param_usize(&params, "a", 5), 5);
        assert_eq!(param_usize(&params, "b", 6), 6);
        assert_eq!(param_usize(&params, "c", 7), 7);
    }

    #[test]
    fn missing_key_or_non_object_returns_default() {
        assert_eq!(param_i64(&json!({}), "freq_x", 3), 3);
        assert_eq!(param_usize(&json!("not an object"), "particles", 800), 800);
    }
}
