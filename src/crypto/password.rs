//! Password hashing utilities
//!
//! Thin wrapper around bcrypt: validates inputs, pins the work-factor
//! policy and decides when a stored hash is due for regeneration. The
//! hash itself is a self-describing 60-character record
//! (`$2<minor>$<cost>$<salt+digest>`), so verification needs no state
//! beyond the record.

use bcrypt::{hash, verify};

use crate::error::PasswordError;

pub use bcrypt::DEFAULT_COST;

/// Lowest cost factor bcrypt accepts.
pub const MIN_COST: u32 = 4;

/// Highest cost factor bcrypt accepts. Each step doubles the work, so
/// anything near the top of the range takes hours per hash.
pub const MAX_COST: u32 = 31;

/// Hash a password at the given cost factor.
///
/// bcrypt generates a fresh random salt internally on every call, so
/// hashing the same password twice yields two different records.
pub fn hash_password(password: &str, cost: u32) -> Result<String, PasswordError> {
    if password.trim().is_empty() {
        return Err(PasswordError::EmptyInput);
    }
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return Err(PasswordError::CostOutOfRange { cost });
    }
    hash(password, cost).map_err(|source| PasswordError::HashFailed { cost, source })
}

/// Hash a password at [`DEFAULT_COST`].
pub fn hash_password_default(password: &str) -> Result<String, PasswordError> {
    hash_password(password, DEFAULT_COST)
}

/// Verify a password against a stored hash record.
///
/// Errors only on blank inputs. A malformed record reads the same as a
/// wrong password: callers must not be able to tell the two apart.
pub fn verify_password(password: &str, existing_hash: &str) -> Result<bool, PasswordError> {
    if password.trim().is_empty() || existing_hash.trim().is_empty() {
        return Err(PasswordError::EmptyInput);
    }
    Ok(verify(password, existing_hash).unwrap_or(false))
}

/// Whether a stored hash should be regenerated at `desired_cost`.
///
/// True when the record is blank, when its embedded cost is strictly
/// below `desired_cost`, or when the cost cannot be read at all.
/// Unreadable records are due for regeneration rather than an error:
/// refusing to answer would block a security upgrade.
pub fn needs_rehash(existing_hash: &str, desired_cost: u32) -> bool {
    if existing_hash.trim().is_empty() {
        return true;
    }
    match embedded_cost(existing_hash) {
        Some(cost) => cost < desired_cost,
        None => true,
    }
}

/// [`needs_rehash`] against [`DEFAULT_COST`].
pub fn needs_rehash_default(existing_hash: &str) -> bool {
    needs_rehash(existing_hash, DEFAULT_COST)
}

/// Cost factor embedded in a bcrypt record, if the record is shaped
/// like one: `$` at offsets 0 and 3, two-digit cost at offsets 4..6.
fn embedded_cost(existing_hash: &str) -> Option<u32> {
    let bytes = existing_hash.as_bytes();
    if bytes.first() != Some(&b'$') || bytes.get(3) != Some(&b'$') {
        return None;
    }
    existing_hash.get(4..6)?.parse().ok()
}
