//! Coercion functions from raw environment strings to typed values.
//!
//! The plain functions (`to_bool`, `to_int`, ...) are usable on their own.
//! Lookups take anything implementing [`Coerce`], which pairs a conversion
//! with the name reported in [`EnvError::Coercion`](crate::EnvError).

use bigdecimal::{BigDecimal, ParseBigDecimalError};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use std::error::Error as StdError;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use crate::datetime::{self, EnvDateTime};
use crate::error::{CoercionFailure, DateParseError};

/// Default separator for list coercion.
pub const DEFAULT_SEPARATOR: &str = " ";

/// A named conversion from a raw string.
pub trait Coerce {
    type Output;

    /// Name reported when the conversion fails.
    fn name(&self) -> &str;

    fn coerce(&self, raw: &str) -> Result<Self::Output, CoercionFailure>;
}

impl<C: Coerce + ?Sized> Coerce for &C {
    type Output = C::Output;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn coerce(&self, raw: &str) -> Result<Self::Output, CoercionFailure> {
        (**self).coerce(raw)
    }
}

/// A closure paired with a name.
///
/// ```
/// use env_utils::coerce::{Coerce, Coercion};
///
/// let port = Coercion::new("port", |raw: &str| raw.parse::<u16>());
/// assert_eq!(port.coerce("8080").unwrap(), 8080);
/// assert!(port.coerce("http").is_err());
/// ```
#[derive(Clone)]
pub struct Coercion<F> {
    name: String,
    func: F,
}

impl<F> Coercion<F> {
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> std::fmt::Debug for Coercion<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coercion").field("name", &self.name).finish()
    }
}

impl<F, T, E> Coerce for Coercion<F>
where
    F: Fn(&str) -> Result<T, E>,
    E: Into<Box<dyn StdError + Send + Sync + 'static>>,
{
    type Output = T;

    fn name(&self) -> &str {
        &self.name
    }

    fn coerce(&self, raw: &str) -> Result<T, CoercionFailure> {
        (self.func)(raw).map_err(CoercionFailure::new)
    }
}

type Conversion<T, E> = fn(&str) -> Result<T, E>;

/// Returns the raw string unchanged.
pub fn identity() -> Coercion<Conversion<String, Infallible>> {
    Coercion::new("identity", raw_string as Conversion<String, Infallible>)
}

pub fn boolean() -> Coercion<Conversion<bool, Infallible>> {
    Coercion::new("bool", infallible_bool as Conversion<bool, Infallible>)
}

pub fn integer() -> Coercion<Conversion<i64, ParseIntError>> {
    Coercion::new("int", to_int as Conversion<i64, ParseIntError>)
}

pub fn float() -> Coercion<Conversion<f64, ParseFloatError>> {
    Coercion::new("float", to_float as Conversion<f64, ParseFloatError>)
}

pub fn decimal() -> Coercion<Conversion<BigDecimal, ParseBigDecimalError>> {
    Coercion::new(
        "decimal",
        to_decimal as Conversion<BigDecimal, ParseBigDecimalError>,
    )
}

pub fn dict() -> Coercion<Conversion<serde_json::Value, serde_json::Error>> {
    Coercion::new(
        "dict",
        to_dict as Conversion<serde_json::Value, serde_json::Error>,
    )
}

pub fn date() -> Coercion<Conversion<NaiveDate, DateParseError>> {
    Coercion::new("date", to_date as Conversion<NaiveDate, DateParseError>)
}

pub fn datetime() -> Coercion<Conversion<EnvDateTime, DateParseError>> {
    Coercion::new(
        "datetime",
        to_datetime as Conversion<EnvDateTime, DateParseError>,
    )
}

/// Split on `separator`.
pub fn list(separator: &str) -> Coercion<impl Fn(&str) -> Result<Vec<String>, Infallible> + '_> {
    Coercion::new("list", move |raw: &str| {
        Ok::<_, Infallible>(to_list(raw, separator))
    })
}

/// Deserialize JSON into `T`.
pub fn json<T: DeserializeOwned>() -> Coercion<Conversion<T, serde_json::Error>> {
    Coercion::new(
        std::any::type_name::<T>(),
        from_json::<T> as Conversion<T, serde_json::Error>,
    )
}

/// Any [`FromStr`] type, named after the type.
pub fn parsed<T>() -> Coercion<Conversion<T, T::Err>>
where
    T: FromStr,
    T::Err: Into<Box<dyn StdError + Send + Sync + 'static>>,
{
    Coercion::new(
        std::any::type_name::<T>(),
        parse_trimmed::<T> as Conversion<T, T::Err>,
    )
}

fn raw_string(raw: &str) -> Result<String, Infallible> {
    Ok(raw.to_string())
}

fn infallible_bool(raw: &str) -> Result<bool, Infallible> {
    Ok(to_bool(raw))
}

fn from_json<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(raw)
}

fn parse_trimmed<T: FromStr>(raw: &str) -> Result<T, T::Err> {
    raw.trim().parse()
}

/// True for `true`, `1` or `y` in any case; false otherwise.
pub fn to_bool(raw: &str) -> bool {
    ["true", "1", "y"]
        .iter()
        .any(|truthy| raw.eq_ignore_ascii_case(truthy))
}

pub fn to_int(raw: &str) -> Result<i64, ParseIntError> {
    raw.trim().parse()
}

pub fn to_float(raw: &str) -> Result<f64, ParseFloatError> {
    raw.trim().parse()
}

/// Exact decimal, keeping every digit of the input.
pub fn to_decimal(raw: &str) -> Result<BigDecimal, ParseBigDecimalError> {
    BigDecimal::from_str(raw.trim())
}

/// Ordered substrings between each `separator`.
///
/// Empty segments are kept, so `"a,,b"` yields three items. An empty
/// separator splits into single characters.
pub fn to_list(raw: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return raw.chars().map(String::from).collect();
    }
    raw.split(separator).map(str::to_string).collect()
}

/// Any JSON document: an object, or a bare scalar or array.
pub fn to_dict(raw: &str) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::from_str(raw)
}

pub fn to_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    datetime::parse_date(raw)
}

pub fn to_datetime(raw: &str) -> Result<EnvDateTime, DateParseError> {
    datetime::parse_datetime(raw)
}
