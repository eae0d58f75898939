//! Layered configuration access
//!
//! A [`ConfigSource`] is a read-only key/value view over whatever store
//! the deployment uses: the process environment, a TOML file, or an
//! in-memory map for tests. On top of it sits the
//! [`ConnectionStringResolver`], which turns configuration into a
//! ready-to-use database connection string.

mod connection;
mod env;
mod memory;
mod toml;

pub use connection::{
    ConnectionStringResolver, CONNECTION_STRINGS_SECTION, DEFAULT_PROVIDER, PROVIDER_KEY,
};
pub use env::EnvSource;
pub use memory::MemorySource;
pub use self::toml::TomlSource;

/// Read-only key/value configuration source.
///
/// Values are plain strings; interpretation is up to the caller. A key
/// that is present but blank is still returned as-is — policy around
/// blank values belongs to consumers like the resolver.
pub trait ConfigSource: Send + Sync {
    /// Look up a flat top-level key.
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a value inside a named section.
    fn get_in(&self, section: &str, name: &str) -> Option<String>;
}
