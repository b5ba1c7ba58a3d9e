mod common;

use std::str::FromStr;

use env_utils::coerce::{self, Coercion};
use env_utils::{BigDecimal, EnvError, InMemoryEnv, get_decimal, get_float, get_int, lookup};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,15}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Absent + optional: the default comes back as-is and the coercion never runs.
    #[test]
    fn absent_optional_returns_default(
        key in key_strategy(),
        default in proptest::option::of(any::<i64>()),
    ) {
        let env = InMemoryEnv::new();
        let poisoned = Coercion::new("poisoned", |_: &str| -> Result<i64, &'static str> {
            Err("coercion ran for a missing variable")
        });
        prop_assert_eq!(lookup(&env, &key, default, poisoned, false).unwrap(), default);
    }

    // Absent + required: always RequiredSettingMissing, whatever the coercion.
    #[test]
    fn absent_required_is_missing(key in key_strategy()) {
        let env = InMemoryEnv::new();
        let err = lookup(&env, &key, None, coerce::integer(), true).unwrap_err();
        prop_assert!(err.is_missing());
        prop_assert_eq!(err.key(), key.as_str());
    }

    // Present: the result is exactly coerce(value), or a coercion error naming key and value.
    #[test]
    fn present_value_matches_coercion(key in key_strategy(), value in ".{0,24}") {
        let env = InMemoryEnv::new().with(key.clone(), value.clone());
        match (lookup(&env, &key, None, coerce::integer(), false), coerce::to_int(&value)) {
            (Ok(found), Ok(expected)) => prop_assert_eq!(found, Some(expected)),
            (Err(EnvError::Coercion { key: k, value: v, coercion, .. }), Err(_)) => {
                prop_assert_eq!(k, key);
                prop_assert_eq!(v, value);
                prop_assert_eq!(coercion, "int");
            }
            (found, expected) => prop_assert!(
                false,
                "lookup {:?} disagrees with coercion {:?}",
                found,
                expected
            ),
        }
    }

    // Required + default is rejected whether or not the variable exists.
    #[test]
    fn required_with_default_is_rejected(
        key in key_strategy(),
        present in any::<bool>(),
        default in any::<i64>(),
    ) {
        let mut env = InMemoryEnv::new();
        if present {
            env.set(key.clone(), "1");
        }
        let err = lookup(&env, &key, Some(default), coerce::integer(), true).unwrap_err();
        let is_usage_error = matches!(err, EnvError::DefaultWithRequired { .. });
        prop_assert!(is_usage_error);
    }

    #[test]
    fn int_roundtrip(n in any::<i64>()) {
        let env = common::foo(&n.to_string());
        prop_assert_eq!(get_int(&env, "foo", None, true).unwrap(), Some(n));
    }

    #[test]
    fn float_roundtrip(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let env = common::foo(&x.to_string());
        prop_assert_eq!(get_float(&env, "foo", None, true).unwrap(), Some(x));
    }

    #[test]
    fn decimal_roundtrip(
        int_part in any::<u64>(),
        frac in "[0-9]{1,30}",
        negative in any::<bool>(),
    ) {
        let text = format!("{}{}.{}", if negative { "-" } else { "" }, int_part, frac);
        let expected = BigDecimal::from_str(&text).unwrap();
        let env = common::foo(&text);
        prop_assert_eq!(get_decimal(&env, "foo", None, true).unwrap(), Some(expected));
    }

    #[test]
    fn bool_coercion_is_total(value in ".*") {
        let expected = ["true", "1", "y"].iter().any(|t| value.eq_ignore_ascii_case(t));
        prop_assert_eq!(coerce::to_bool(&value), expected);
    }
}
