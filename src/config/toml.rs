//! TOML-backed configuration source

use std::str::FromStr;

use toml::{Table, Value};
use tracing::debug;

use crate::error::ConfigError;

use super::ConfigSource;

/// Configuration source backed by a parsed TOML document.
///
/// Flat keys address top-level values; sectioned lookups address values
/// inside a `[Section]` table. Non-string scalars (ports, flags) are
/// rendered with their TOML display form so they still resolve as
/// strings.
#[derive(Debug, Clone)]
pub struct TomlSource {
    table: Table,
}

impl TomlSource {
    pub fn from_table(table: Table) -> Self {
        Self { table }
    }

    fn render(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl FromStr for TomlSource {
    type Err = ConfigError;

    fn from_str(document: &str) -> Result<Self, Self::Err> {
        let table: Table = document.parse()?;
        debug!(keys = table.len(), "Parsed TOML configuration");
        Ok(Self { table })
    }
}

impl ConfigSource for TomlSource {
    fn get(&self, key: &str) -> Option<String> {
        self.table.get(key).map(Self::render)
    }

    fn get_in(&self, section: &str, name: &str) -> Option<String> {
        self.table
            .get(section)
            .and_then(Value::as_table)
            .and_then(|t| t.get(name))
            .map(Self::render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"
DatabaseProvider = "Postgres"
Port = 5432

[ConnectionStrings]
Postgres = "Host=db;Database=app"
"#;

    #[test]
    fn test_flat_and_sectioned_lookup() {
        let source: TomlSource = DOCUMENT.parse().unwrap();

        assert_eq!(source.get("DatabaseProvider").as_deref(), Some("Postgres"));
        assert_eq!(source.get("Port").as_deref(), Some("5432"));
        assert_eq!(
            source.get_in("ConnectionStrings", "Postgres").as_deref(),
            Some("Host=db;Database=app")
        );
        assert_eq!(source.get_in("ConnectionStrings", "MySQL"), None);
        assert_eq!(source.get_in("NoSuchSection", "Postgres"), None);
    }

    #[test]
    fn test_invalid_document_is_a_parse_error() {
        let result = "not = [valid".parse::<TomlSource>();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
