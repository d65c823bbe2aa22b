//! Serialize `f64` quantities the way a JSON client expects to see them:
//! whole values as integers (`18000`, not `18000.0`), fractional values as
//! floats, non-finite values as `null`.

use serde::Serializer;

/// Largest integer every JSON consumer can represent exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    struct Sample {
        #[serde(serialize_with = "super::serialize")]
        value: f64,
    }

    fn render(value: f64) -> String {
        serde_json::to_string(&Sample { value }).unwrap()
    }

    #[test]
    fn test_whole_values_render_as_integers() {
        assert_eq!(render(18000.0), r#"{"value":18000}"#);
        assert_eq!(render(-3.0), r#"{"value":-3}"#);
        assert_eq!(
            serde_json::to_value(Sample { value: 233.0 }).unwrap(),
            json!({ "value": 233 })
        );
    }

    #[test]
    fn test_fractional_and_non_finite_values() {
        assert_eq!(render(7.8), r#"{"value":7.8}"#);
        assert_eq!(render(44.42), r#"{"value":44.42}"#);
        assert_eq!(render(f64::NAN), r#"{"value":null}"#);
    }
}
