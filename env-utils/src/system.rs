//! Shorthands that read the process environment.
//!
//! Each function is the matching [`crate::lookup`] wrapper with
//! [`SystemEnv`] as the store.
//!
//! ```no_run
//! use env_utils::system;
//!
//! let port = system::get_int("PORT", Some(8080), false)?;
//! let secret = system::get_env("SECRET_KEY", None, true)?;
//! # Ok::<(), env_utils::EnvError>(())
//! ```

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::coerce::Coerce;
use crate::datetime::EnvDateTime;
use crate::error::EnvError;
use crate::lookup as typed;
use crate::store::SystemEnv;

pub fn lookup<C: Coerce>(
    key: &str,
    default: Option<C::Output>,
    coerce: C,
    required: bool,
) -> Result<Option<C::Output>, EnvError> {
    typed::lookup(&SystemEnv, key, default, coerce, required)
}

pub fn get_env(
    key: &str,
    default: Option<String>,
    required: bool,
) -> Result<Option<String>, EnvError> {
    typed::get_env(&SystemEnv, key, default, required)
}

pub fn get_bool(
    key: &str,
    default: Option<bool>,
    required: bool,
) -> Result<Option<bool>, EnvError> {
    typed::get_bool(&SystemEnv, key, default, required)
}

pub fn get_int(key: &str, default: Option<i64>, required: bool) -> Result<Option<i64>, EnvError> {
    typed::get_int(&SystemEnv, key, default, required)
}

pub fn get_float(key: &str, default: Option<f64>, required: bool) -> Result<Option<f64>, EnvError> {
    typed::get_float(&SystemEnv, key, default, required)
}

pub fn get_decimal(
    key: &str,
    default: Option<BigDecimal>,
    required: bool,
) -> Result<Option<BigDecimal>, EnvError> {
    typed::get_decimal(&SystemEnv, key, default, required)
}

pub fn get_list(
    key: &str,
    default: Option<Vec<String>>,
    required: bool,
    separator: &str,
) -> Result<Option<Vec<String>>, EnvError> {
    typed::get_list(&SystemEnv, key, default, required, separator)
}

pub fn get_dict(
    key: &str,
    default: Option<serde_json::Value>,
    required: bool,
) -> Result<Option<serde_json::Value>, EnvError> {
    typed::get_dict(&SystemEnv, key, default, required)
}

pub fn get_json<T: DeserializeOwned>(
    key: &str,
    default: Option<T>,
    required: bool,
) -> Result<Option<T>, EnvError> {
    typed::get_json(&SystemEnv, key, default, required)
}

pub fn get_date(
    key: &str,
    default: Option<NaiveDate>,
    required: bool,
) -> Result<Option<NaiveDate>, EnvError> {
    typed::get_date(&SystemEnv, key, default, required)
}

pub fn get_datetime(
    key: &str,
    default: Option<EnvDateTime>,
    required: bool,
) -> Result<Option<EnvDateTime>, EnvError> {
    typed::get_datetime(&SystemEnv, key, default, required)
}
