//! Typed environment lookups.
//!
//! [`lookup`] is the single entry point; the `get_*` functions fix the
//! coercion to one of the standard conversions in [`crate::coerce`].
//!
//! Resolution rules:
//!
//! | Variable | `required` | Result |
//! |----------|-----------|--------|
//! | present | any | `Ok(Some(coerce(raw)))` or [`EnvError::Coercion`] |
//! | absent | `false` | `Ok(default)`, never coerced |
//! | absent | `true` | [`EnvError::RequiredSettingMissing`] |
//!
//! Asking for a required variable while also passing a default is rejected
//! with [`EnvError::DefaultWithRequired`] before the store is read.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use std::env::VarError;
use tracing::{debug, trace};

use crate::coerce::{self, Coerce};
use crate::datetime::EnvDateTime;
use crate::error::{CoercionFailure, EnvError, NotUnicode};
use crate::source::Sourced;
use crate::store::ReadEnv;

/// Look up `key` in `env` and coerce it.
///
/// `default` is returned verbatim when the variable is absent and not
/// required; it is trusted to already be of the target type.
///
/// ```
/// use env_utils::{InMemoryEnv, coerce, lookup};
///
/// let env = InMemoryEnv::new().with("WORKERS", "4");
/// let workers = lookup(&env, "WORKERS", Some(1), coerce::integer(), false).unwrap();
/// assert_eq!(workers, Some(4));
///
/// let threads = lookup(&env, "THREADS", Some(1), coerce::integer(), false).unwrap();
/// assert_eq!(threads, Some(1));
/// ```
pub fn lookup<E, C>(
    env: &E,
    key: &str,
    default: Option<C::Output>,
    coerce: C,
    required: bool,
) -> Result<Option<C::Output>, EnvError>
where
    E: ReadEnv + ?Sized,
    C: Coerce,
{
    lookup_sourced(env, key, default, coerce, required).map(Sourced::into_inner)
}

/// Like [`lookup`], but reports whether the value came from the
/// environment or the default.
pub fn lookup_sourced<E, C>(
    env: &E,
    key: &str,
    default: Option<C::Output>,
    coerce: C,
    required: bool,
) -> Result<Sourced<Option<C::Output>>, EnvError>
where
    E: ReadEnv + ?Sized,
    C: Coerce,
{
    if required && default.is_some() {
        return Err(EnvError::DefaultWithRequired {
            key: key.to_string(),
        });
    }

    let raw = match env.var(key) {
        Ok(raw) => raw,
        Err(VarError::NotPresent) if required => {
            debug!(key, "required env var is missing");
            return Err(EnvError::RequiredSettingMissing {
                key: key.to_string(),
            });
        }
        Err(VarError::NotPresent) => {
            trace!(key, has_default = default.is_some(), "env var not set, using default");
            return Ok(Sourced::default_value(default));
        }
        Err(VarError::NotUnicode(os)) => {
            debug!(key, coercion = coerce.name(), "env var is not valid unicode");
            return Err(EnvError::Coercion {
                key: key.to_string(),
                value: os.to_string_lossy().into_owned(),
                coercion: coerce.name().to_string(),
                source: CoercionFailure::new(NotUnicode),
            });
        }
    };

    match coerce.coerce(&raw) {
        Ok(value) => {
            trace!(key, coercion = coerce.name(), "env var coerced");
            Ok(Sourced::from_env(Some(value), key))
        }
        Err(source) => {
            debug!(key, coercion = coerce.name(), "env var coercion failed");
            Err(EnvError::Coercion {
                key: key.to_string(),
                value: raw,
                coercion: coerce.name().to_string(),
                source,
            })
        }
    }
}

/// Raw string value.
pub fn get_env<E: ReadEnv + ?Sized>(
    env: &E,
    key: &str,
    default: Option<String>,
    required: bool,
) -> Result<Option<String>, EnvError> {
    lookup(env, key, default, coerce::identity(), required)
}

/// Boolean: `true`, `1` or `y` (any case) are true, anything else false.
pub fn get_bool<E: ReadEnv + ?Sized>(
    env: &E,
    key: &str,
    default: Option<bool>,
    required: bool,
) -> Result<Option<bool>, EnvError> {
    lookup(env, key, default, coerce::boolean(), required)
}

pub fn get_int<E: ReadEnv + ?Sized>(
    env: &E,
    key: &str,
    default: Option<i64>,
    required: bool,
) -> Result<Option<i64>, EnvError> {
    lookup(env, key, default, coerce::integer(), required)
}

pub fn get_float<E: ReadEnv + ?Sized>(
    env: &E,
    key: &str,
    default: Option<f64>,
    required: bool,
) -> Result<Option<f64>, EnvError> {
    lookup(env, key, default, coerce::float(), required)
}

pub fn get_decimal<E: ReadEnv + ?Sized>(
    env: &E,
    key: &str,
    default: Option<BigDecimal>,
    required: bool,
) -> Result<Option<BigDecimal>, EnvError> {
    lookup(env, key, default, coerce::decimal(), required)
}

/// Split on `separator` ([`coerce::DEFAULT_SEPARATOR`] is a single space).
pub fn get_list<E: ReadEnv + ?Sized>(
    env: &E,
    key: &str,
    default: Option<Vec<String>>,
    required: bool,
    separator: &str,
) -> Result<Option<Vec<String>>, EnvError> {
    lookup(env, key, default, coerce::list(separator), required)
}

/// Any JSON document. Objects are the common case but scalars and arrays
/// are accepted too.
pub fn get_dict<E: ReadEnv + ?Sized>(
    env: &E,
    key: &str,
    default: Option<serde_json::Value>,
    required: bool,
) -> Result<Option<serde_json::Value>, EnvError> {
    lookup(env, key, default, coerce::dict(), required)
}

/// JSON deserialized straight into `T`.
pub fn get_json<T, E>(
    env: &E,
    key: &str,
    default: Option<T>,
    required: bool,
) -> Result<Option<T>, EnvError>
where
    T: DeserializeOwned,
    E: ReadEnv + ?Sized,
{
    lookup(env, key, default, coerce::json::<T>(), required)
}

pub fn get_date<E: ReadEnv + ?Sized>(
    env: &E,
    key: &str,
    default: Option<NaiveDate>,
    required: bool,
) -> Result<Option<NaiveDate>, EnvError> {
    lookup(env, key, default, coerce::date(), required)
}

pub fn get_datetime<E: ReadEnv + ?Sized>(
    env: &E,
    key: &str,
    default: Option<EnvDateTime>,
    required: bool,
) -> Result<Option<EnvDateTime>, EnvError> {
    lookup(env, key, default, coerce::datetime(), required)
}
