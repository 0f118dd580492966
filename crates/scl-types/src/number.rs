//! Serde helpers for JSON numbers.
//!
//! Quantities and coordinates are `f64` in memory, but whole values are
//! written without a fractional part (`5`, not `5.0`). Every node must emit
//! the same bytes for the same number or canonical hashes diverge.

use serde::{Deserialize, Deserializer, Serializer};

/// 2^63: first magnitude outside `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
/// 2^64: first value outside `u64`.
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() != 0.0 {
        return serializer.serialize_f64(*value);
    }
    if value.abs() < I64_BOUND {
        serializer.serialize_i64(*value as i64)
    } else if *value > 0.0 && *value < U64_BOUND {
        serializer.serialize_u64(*value as u64)
    } else {
        serializer.serialize_f64(*value)
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Wrapper(#[serde(with = "super")] f64);

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(serde_json::to_string(&Wrapper(5.0)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Wrapper(-12.0)).unwrap(), "-12");
    }

    #[test]
    fn fractional_numbers_are_kept() {
        assert_eq!(serde_json::to_string(&Wrapper(2.5)).unwrap(), "2.5");
    }

    #[test]
    fn integers_parse_back_as_floats() {
        let parsed: Wrapper = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, Wrapper(7.0));
    }

    #[test]
    fn large_whole_numbers_keep_their_digits() {
        assert_eq!(
            serde_json::to_string(&Wrapper(1e17)).unwrap(),
            "100000000000000000"
        );
        assert_eq!(
            serde_json::to_string(&Wrapper(9_007_199_254_740_994.0)).unwrap(),
            "9007199254740994"
        );
        assert_eq!(
            serde_json::to_string(&Wrapper(-1e18)).unwrap(),
            "-1000000000000000000"
        );
        assert_eq!(
            serde_json::to_string(&Wrapper(1e19)).unwrap(),
            "10000000000000000000"
        );
    }

    #[test]
    fn large_whole_numbers_survive_the_value_tree() {
        let value = serde_json::to_value(Wrapper(1e19)).unwrap();
        assert_eq!(value, serde_json::json!(10_000_000_000_000_000_000u64));
    }

    #[test]
    fn non_finite_values_are_not_integers() {
        // serde_json writes non-finite floats as null.
        assert_eq!(serde_json::to_string(&Wrapper(f64::INFINITY)).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Wrapper(f64::NAN)).unwrap(), "null");
    }
}
