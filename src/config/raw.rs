//! Flat key -> value mapping produced by both parsers.

use indexmap::IndexMap;

use super::schema::ConfigKey;

/// Values read from one source, keyed by recognized key.
///
/// Keys can only be [`ConfigKey`]s, so anything outside the schema has
/// already been rejected by the parser that built this. Assigning a key
/// twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    values: IndexMap<ConfigKey, String>,
}

impl RawConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: ConfigKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: ConfigKey) -> bool {
        self.values.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConfigKey, &str)> {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Merge `other` over `self`: every key set in `other` replaces the value
    /// here, keys only set here are kept.
    pub fn merge(mut self, other: &RawConfig) -> RawConfig {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
        self
    }
}

impl<V: Into<String>> FromIterator<(ConfigKey, V)> for RawConfig {
    fn from_iter<I: IntoIterator<Item = (ConfigKey, V)>>(iter: I) -> Self {
        let mut raw = RawConfig::new();
        for (key, value) in iter {
            raw.insert(key, value);
        }
        raw
    }
}
