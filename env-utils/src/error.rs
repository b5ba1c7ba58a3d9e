//! Error types for environment lookups.

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Errors returned by lookups.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The variable is absent and was declared required.
    #[error("Required env var '{key}' is missing.")]
    RequiredSettingMissing { key: String },

    /// The variable is present but its value could not be coerced.
    #[error("Unable to coerce '{key}={value}' using {coercion}.")]
    Coercion {
        key: String,
        value: String,
        coercion: String,
        #[source]
        source: CoercionFailure,
    },

    /// Caller asked for a required variable and also supplied a default.
    #[error("Env var '{key}' cannot be both required and have a default value.")]
    DefaultWithRequired { key: String },
}

impl EnvError {
    /// The variable name the error refers to.
    pub fn key(&self) -> &str {
        match self {
            Self::RequiredSettingMissing { key }
            | Self::Coercion { key, .. }
            | Self::DefaultWithRequired { key } => key,
        }
    }

    /// Whether this is a missing required setting.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::RequiredSettingMissing { .. })
    }

    /// Whether this is a coercion failure.
    pub fn is_coercion(&self) -> bool {
        matches!(self, Self::Coercion { .. })
    }
}

/// The original failure raised by a coercion function.
pub struct CoercionFailure(Box<dyn StdError + Send + Sync + 'static>);

impl CoercionFailure {
    /// Wrap any error as a coercion failure.
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self(err.into())
    }

    /// Borrow the wrapped error.
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }

    /// Attempt to downcast the wrapped error to a concrete type.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }

    /// Unwrap into the boxed error.
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.0
    }
}

impl fmt::Debug for CoercionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for CoercionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Transparent: displays as the wrapped error and continues its chain.
impl StdError for CoercionFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

/// Failure to parse a date or date-time string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unable to parse '{input}' as a {expected}")]
pub struct DateParseError {
    pub input: String,
    pub expected: &'static str,
}

/// A raw value that is not valid Unicode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("environment value is not valid unicode")]
pub struct NotUnicode;
