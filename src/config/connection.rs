//! Database connection string resolution
//!
//! Keeps repository code away from raw configuration keys: the resolver
//! picks the active database provider and returns its connection string.

use std::sync::Arc;

use tracing::debug;

use crate::error::ConfigError;

use super::ConfigSource;

/// Flat key naming the active database provider.
pub const PROVIDER_KEY: &str = "DatabaseProvider";

/// Provider assumed when the configuration does not name one.
pub const DEFAULT_PROVIDER: &str = "SqlServer";

/// Section holding one connection string per provider.
pub const CONNECTION_STRINGS_SECTION: &str = "ConnectionStrings";

/// Resolves the active database connection string from configuration.
///
/// The provider name is only ever used as a lookup key — any non-blank
/// value is accepted, so adding a new backend is a configuration change,
/// not a code change.
pub struct ConnectionStringResolver {
    source: Arc<dyn ConfigSource>,
}

impl ConnectionStringResolver {
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self { source }
    }

    /// The configured provider name, trimmed, falling back to
    /// [`DEFAULT_PROVIDER`] when the key is absent or blank.
    pub fn current_provider(&self) -> String {
        match self.source.get(PROVIDER_KEY) {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => {
                debug!(
                    provider = DEFAULT_PROVIDER,
                    "No database provider configured, using default"
                );
                DEFAULT_PROVIDER.to_string()
            }
        }
    }

    /// Connection string for the current provider, exactly as configured
    /// (no trimming).
    ///
    /// Fails when the connection strings section has no non-blank entry
    /// for the provider; the error names the full composite key.
    pub fn resolve(&self) -> Result<String, ConfigError> {
        let provider = self.current_provider();
        match self.source.get_in(CONNECTION_STRINGS_SECTION, &provider) {
            Some(value) if !value.trim().is_empty() => {
                debug!(%provider, "Resolved connection string");
                Ok(value)
            }
            _ => Err(ConfigError::MissingKey {
                key: format!("{}:{}", CONNECTION_STRINGS_SECTION, provider),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemorySource;

    fn resolver(source: MemorySource) -> ConnectionStringResolver {
        ConnectionStringResolver::new(Arc::new(source))
    }

    #[test]
    fn test_provider_defaults_to_sql_server() {
        assert_eq!(resolver(MemorySource::new()).current_provider(), "SqlServer");
    }

    #[test]
    fn test_blank_provider_falls_back_to_default() {
        let source = MemorySource::new().with(PROVIDER_KEY, "   ");
        assert_eq!(resolver(source).current_provider(), DEFAULT_PROVIDER);
    }

    #[test]
    fn test_configured_provider_is_trimmed() {
        let source = MemorySource::new().with(PROVIDER_KEY, "  Postgres  ");
        assert_eq!(resolver(source).current_provider(), "Postgres");
    }

    #[test]
    fn test_resolve_returns_value_untouched() {
        let source = MemorySource::new()
            .with(PROVIDER_KEY, "Postgres")
            .with_in(CONNECTION_STRINGS_SECTION, "Postgres", " Host=db;Port=5432 ");
        assert_eq!(resolver(source).resolve().unwrap(), " Host=db;Port=5432 ");
    }

    #[test]
    fn test_missing_connection_string_names_the_key() {
        let source = MemorySource::new().with(PROVIDER_KEY, "Postgres");
        let err = resolver(source).resolve().unwrap_err();
        assert!(err.to_string().contains("ConnectionStrings:Postgres"));
    }

    #[test]
    fn test_blank_connection_string_counts_as_missing() {
        let source = MemorySource::new()
            .with_in(CONNECTION_STRINGS_SECTION, DEFAULT_PROVIDER, "   ");
        let err = resolver(source).resolve().unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey { .. }));
        assert!(err.to_string().contains("ConnectionStrings:SqlServer"));
    }
}
