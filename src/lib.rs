//! # Backend Support
//!
//! Shared support utilities for the API backend:
//!
//! - **config**: layered configuration access and database connection
//!   string resolution
//! - **crypto**: bcrypt password hashing with a work-factor policy
//!
//! Both components are leaf utilities. They own no state beyond what is
//! handed to them at construction and are consumed by the repository and
//! credential layers, which live elsewhere.

pub mod config;
pub mod crypto;
pub mod error;

pub use config::{ConfigSource, ConnectionStringResolver, EnvSource, MemorySource, TomlSource};
pub use crypto::password::{
    hash_password, hash_password_default, needs_rehash, needs_rehash_default, verify_password,
};
pub use error::{ConfigError, PasswordError};
