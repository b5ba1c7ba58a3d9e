//! Typed access to environment variables.
//!
//! Every environment value is a string. This crate reads a variable from a
//! [`ReadEnv`] store, coerces it into a typed value, and reports failures as
//! [`EnvError`]:
//!
//! - absent and optional: the caller's default is returned untouched
//! - absent and required: [`EnvError::RequiredSettingMissing`]
//! - present but unconvertible: [`EnvError::Coercion`], keeping the cause
//!
//! # Quick Start
//!
//! | Type | Function | Coercion |
//! |------|----------|----------|
//! | `String` | [`get_env`] | [`coerce::identity`] |
//! | `bool` | [`get_bool`] | [`coerce::boolean`] |
//! | `i64` | [`get_int`] | [`coerce::integer`] |
//! | `f64` | [`get_float`] | [`coerce::float`] |
//! | `BigDecimal` | [`get_decimal`] | [`coerce::decimal`] |
//! | `Vec<String>` | [`get_list`] | [`coerce::list`] |
//! | `serde_json::Value` | [`get_dict`] | [`coerce::dict`] |
//! | `T: DeserializeOwned` | [`get_json`] | [`coerce::json`] |
//! | `NaiveDate` | [`get_date`] | [`coerce::date`] |
//! | [`EnvDateTime`] | [`get_datetime`] | [`coerce::datetime`] |
//!
//! ```
//! use env_utils::{InMemoryEnv, get_int, get_list};
//!
//! let env = InMemoryEnv::new()
//!     .with("PORT", "8080")
//!     .with("HOSTS", "a.example b.example");
//!
//! assert_eq!(get_int(&env, "PORT", None, true)?, Some(8080));
//! assert_eq!(get_int(&env, "WORKERS", Some(4), false)?, Some(4));
//! assert_eq!(get_list(&env, "HOSTS", None, true, " ")?.map(|h| h.len()), Some(2));
//! # Ok::<(), env_utils::EnvError>(())
//! ```
//!
//! Use [`system`] for the process environment and [`EnvReader`] to apply a
//! key prefix.

pub mod coerce;
pub mod datetime;
pub mod error;
pub mod lookup;
pub mod reader;
pub mod source;
pub mod store;
pub mod system;

pub use coerce::{Coerce, Coercion};
pub use datetime::EnvDateTime;
pub use error::{CoercionFailure, DateParseError, EnvError, NotUnicode};
pub use lookup::{
    get_bool, get_date, get_datetime, get_decimal, get_dict, get_env, get_float, get_int,
    get_json, get_list, lookup, lookup_sourced,
};
pub use reader::EnvReader;
pub use source::{ConfigSource, Sourced};
pub use store::{InMemoryEnv, ReadEnv, SystemEnv};

pub use bigdecimal::BigDecimal;

#[cfg(test)]
pub(crate) fn env_test_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
