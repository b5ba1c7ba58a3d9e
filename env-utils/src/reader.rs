//! Prefix-aware reader over any [`ReadEnv`] store.
//!
//! Bundles a store with an optional key prefix so application code can ask
//! for `PORT` and read `MYAPP_PORT`. Errors always carry the full key.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use std::borrow::Cow;

use crate::coerce::{self, Coerce};
use crate::datetime::EnvDateTime;
use crate::error::EnvError;
use crate::lookup;
use crate::source::Sourced;
use crate::store::{ReadEnv, SystemEnv};

/// Typed reader bound to a store and an optional prefix.
#[derive(Debug, Clone)]
pub struct EnvReader<E = SystemEnv> {
    env: E,
    prefix: String,
}

impl EnvReader<SystemEnv> {
    /// Reader over the process environment with no prefix.
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl Default for EnvReader<SystemEnv> {
    fn default() -> Self {
        Self::system()
    }
}

impl<E: ReadEnv> EnvReader<E> {
    pub fn new(env: E) -> Self {
        Self {
            env,
            prefix: String::new(),
        }
    }

    /// Prepend `prefix` to every name looked up.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Full variable name for `name`.
    pub fn var_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if self.prefix.is_empty() {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(format!("{}{}", self.prefix, name))
        }
    }

    /// [`lookup::lookup`] against the prefixed name.
    pub fn get<C: Coerce>(
        &self,
        name: &str,
        default: Option<C::Output>,
        coerce: C,
        required: bool,
    ) -> Result<Option<C::Output>, EnvError> {
        lookup::lookup(&self.env, &self.var_name(name), default, coerce, required)
    }

    /// [`lookup::lookup_sourced`] against the prefixed name.
    pub fn get_sourced<C: Coerce>(
        &self,
        name: &str,
        default: Option<C::Output>,
        coerce: C,
        required: bool,
    ) -> Result<Sourced<Option<C::Output>>, EnvError> {
        lookup::lookup_sourced(&self.env, &self.var_name(name), default, coerce, required)
    }

    pub fn get_string(
        &self,
        name: &str,
        default: Option<String>,
        required: bool,
    ) -> Result<Option<String>, EnvError> {
        self.get(name, default, coerce::identity(), required)
    }

    pub fn get_bool(
        &self,
        name: &str,
        default: Option<bool>,
        required: bool,
    ) -> Result<Option<bool>, EnvError> {
        self.get(name, default, coerce::boolean(), required)
    }

    pub fn get_int(
        &self,
        name: &str,
        default: Option<i64>,
        required: bool,
    ) -> Result<Option<i64>, EnvError> {
        self.get(name, default, coerce::integer(), required)
    }

    pub fn get_float(
        &self,
        name: &str,
        default: Option<f64>,
        required: bool,
    ) -> Result<Option<f64>, EnvError> {
        self.get(name, default, coerce::float(), required)
    }

    pub fn get_decimal(
        &self,
        name: &str,
        default: Option<BigDecimal>,
        required: bool,
    ) -> Result<Option<BigDecimal>, EnvError> {
        self.get(name, default, coerce::decimal(), required)
    }

    pub fn get_list(
        &self,
        name: &str,
        default: Option<Vec<String>>,
        required: bool,
        separator: &str,
    ) -> Result<Option<Vec<String>>, EnvError> {
        self.get(name, default, coerce::list(separator), required)
    }

    pub fn get_dict(
        &self,
        name: &str,
        default: Option<serde_json::Value>,
        required: bool,
    ) -> Result<Option<serde_json::Value>, EnvError> {
        self.get(name, default, coerce::dict(), required)
    }

    pub fn get_json<T: DeserializeOwned>(
        &self,
        name: &str,
        default: Option<T>,
        required: bool,
    ) -> Result<Option<T>, EnvError> {
        self.get(name, default, coerce::json::<T>(), required)
    }

    pub fn get_date(
        &self,
        name: &str,
        default: Option<NaiveDate>,
        required: bool,
    ) -> Result<Option<NaiveDate>, EnvError> {
        self.get(name, default, coerce::date(), required)
    }

    pub fn get_datetime(
        &self,
        name: &str,
        default: Option<EnvDateTime>,
        required: bool,
    ) -> Result<Option<EnvDateTime>, EnvError> {
        self.get(name, default, coerce::datetime(), required)
    }
}
