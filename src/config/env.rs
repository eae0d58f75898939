//! Environment-variable configuration source

use super::ConfigSource;

/// Reads configuration from process environment variables.
///
/// Sectioned values are flattened with a double underscore, so the
/// connection string for `Postgres` is read from
/// `ConnectionStrings__Postgres`. An optional prefix is prepended to
/// every variable name, letting several services share one environment.
#[derive(Debug, Default, Clone)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn read(&self, name: &str) -> Option<String> {
        std::env::var(format!("{}{}", self.prefix, name)).ok()
    }
}

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        self.read(key)
    }

    fn get_in(&self, section: &str, name: &str) -> Option<String> {
        self.read(&format!("{}__{}", section, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_flat_and_sectioned_vars() {
        std::env::set_var("BK_TEST_DatabaseProvider", "Postgres");
        std::env::set_var("BK_TEST_ConnectionStrings__Postgres", "Host=db");

        let source = EnvSource::with_prefix("BK_TEST_");
        assert_eq!(source.get("DatabaseProvider").as_deref(), Some("Postgres"));
        assert_eq!(
            source.get_in("ConnectionStrings", "Postgres").as_deref(),
            Some("Host=db")
        );
        assert_eq!(source.get("NotSet"), None);
    }
}
