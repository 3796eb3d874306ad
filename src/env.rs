//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`], which reads the process environment.
//! Tests use [`Env::mock()`] backed by a `HashMap`, so config overrides can be
//! exercised without touching the real environment.

use std::collections::HashMap;
use std::str::FromStr;

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up a variable. Empty and whitespace-only values count as unset.
    pub fn get(&self, name: &str) -> Option<String> {
        let value = match &self.overrides {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }?;
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Look up and parse a variable.
    ///
    /// Unparseable values are logged and treated as unset.
    pub fn parse<T: FromStr>(&self, name: &str) -> Option<T> {
        let raw = self.get(name)?;
        match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(var = name, value = %raw, "ignoring invalid environment value");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_env_reads_cargo_manifest_dir() {
        let env = Env::real();
        assert!(env.get("CARGO_MANIFEST_DIR").is_some());
    }

    #[test]
    fn mock_env_returns_trimmed_values() {
        let env = Env::mock([("FOO", " bar "), ("BAZ", "qux")]);
        assert_eq!(env.get("FOO").as_deref(), Some("bar"));
        assert_eq!(env.get("BAZ").as_deref(), Some("qux"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let env = Env::mock([("EMPTY", ""), ("SPACES", "   ")]);
        assert!(env.get("EMPTY").is_none());
        assert!(env.get("SPACES").is_none());
        assert!(env.get("ABSENT").is_none());
    }

    #[test]
    fn parse_accepts_valid_and_drops_invalid() {
        let env = Env::mock([("GOOD", "42"), ("BAD", "forty-two")]);
        assert_eq!(env.parse::<u64>("GOOD"), Some(42));
        assert_eq!(env.parse::<u64>("BAD"), None);
        assert_eq!(env.parse::<u64>("ABSENT"), None);
    }
}
