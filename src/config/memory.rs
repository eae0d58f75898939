//! In-memory configuration source

use std::collections::HashMap;

use super::ConfigSource;

/// HashMap-backed source, mainly for tests and embedded defaults.
///
/// Sectioned entries are stored under `Section:Name` keys.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    entries: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flat entry.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Add a sectioned entry.
    pub fn with_in(self, section: &str, name: &str, value: impl Into<String>) -> Self {
        self.with(format!("{}:{}", section, name), value)
    }
}

impl ConfigSource for MemorySource {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn get_in(&self, section: &str, name: &str) -> Option<String> {
        self.entries.get(&format!("{}:{}", section, name)).cloned()
    }
}
