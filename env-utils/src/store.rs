//! Environment stores.
//!
//! Every lookup reads through [`ReadEnv`] so callers can swap the real
//! process environment for a map in tests or when embedding.
//!
//! | Store | Backing | `Send + Sync` |
//! |-------|---------|---------------|
//! | [`SystemEnv`] | `std::env` | Yes |
//! | [`InMemoryEnv`] | `HashMap` | Yes |
//! | `HashMap<String, String>` / `BTreeMap<String, String>` | itself | Yes |

use std::collections::{BTreeMap, HashMap};
use std::env::VarError;

/// Read-only view of a string-keyed environment.
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site
/// if you share a store across threads.
pub trait ReadEnv {
    /// Fetch the raw value for `key`.
    ///
    /// Returns [`VarError::NotPresent`] when the key is absent and
    /// [`VarError::NotUnicode`] when the stored value is not valid UTF-8.
    fn var(&self, key: &str) -> Result<String, VarError>;
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

/// Zero-sized type, delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        std::env::var(key)
    }
}

/// Map-backed store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryEnv {
    vars: HashMap<String, String>,
}

impl InMemoryEnv {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Remove a variable, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    /// Number of stored variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True when no variables are stored.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.vars.get(key).cloned().ok_or(VarError::NotPresent)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ReadEnv for HashMap<String, String> {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.get(key).cloned().ok_or(VarError::NotPresent)
    }
}

impl ReadEnv for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.get(key).cloned().ok_or(VarError::NotPresent)
    }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use crate::env_test_lock;

    #[test]
    fn test_system_env_delegation() {
        let _guard = env_test_lock();
        let std_result = std::env::var("PATH");
        let provider_result = SystemEnv.var("PATH");
        assert_eq!(std_result.is_ok(), provider_result.is_ok());
    }

    #[test]
    fn test_system_env_sees_process_changes() {
        let _guard = env_test_lock();
        let key = "ENV_UTILS_STORE_TEST_SYSTEM";

        // SAFETY: serialized via env_test_lock
        unsafe { std::env::set_var(key, "hello") };
        assert_eq!(SystemEnv.var(key).as_deref(), Ok("hello"));

        // SAFETY: serialized via env_test_lock
        unsafe { std::env::remove_var(key) };
        assert_eq!(SystemEnv.var(key), Err(VarError::NotPresent));
    }

    #[test]
    fn test_in_memory_env_set_and_remove() {
        let mut env = InMemoryEnv::new().with("FOO", "bar");
        assert_eq!(env.var("FOO").as_deref(), Ok("bar"));
        assert_eq!(env.len(), 1);

        env.set("FOO", "baz");
        assert_eq!(env.var("FOO").as_deref(), Ok("baz"));

        assert_eq!(env.remove("FOO").as_deref(), Some("baz"));
        assert_eq!(env.var("FOO"), Err(VarError::NotPresent));
        assert!(env.is_empty());
    }

    #[test]
    fn test_in_memory_env_from_iter() {
        let env: InMemoryEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.var("A").as_deref(), Ok("1"));
        assert_eq!(env.var("B").as_deref(), Ok("2"));
        assert_eq!(env.var("C"), Err(VarError::NotPresent));
    }

    #[test]
    fn test_maps_are_stores() {
        let mut hash = HashMap::new();
        hash.insert("KEY".to_string(), "value".to_string());
        assert_eq!(hash.var("KEY").as_deref(), Ok("value"));

        let mut tree = BTreeMap::new();
        tree.insert("KEY".to_string(), "value".to_string());
        assert_eq!(tree.var("KEY").as_deref(), Ok("value"));
        assert_eq!(tree.var("OTHER"), Err(VarError::NotPresent));
    }

    #[test]
    fn test_generic_function_with_reference() {
        fn get_value_or_default<E: ReadEnv>(env: E, key: &str, default: &str) -> String {
            env.var(key).unwrap_or_else(|_| default.to_string())
        }

        let env = InMemoryEnv::new().with("SET", "yes");
        assert_eq!(get_value_or_default(&env, "SET", "no"), "yes");
        assert_eq!(get_value_or_default(&env, "NONEXISTENT_VAR_12345", "default"), "default");
    }
}
