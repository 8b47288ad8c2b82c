// Rust guideline compliant 2026-10-12

//! Hash-based record id generation and validation.

use crate::{Error, Result};
use sha2::{Digest, Sha256};

/// Number of hex characters after the prefix separator.
pub const ID_HEX_LEN: usize = 16;

/// Generates a record id from the table, insertion sequence, a timestamp and a nonce.
///
/// # Arguments
///
/// * `prefix` - Table id prefix (e.g. `lst`)
/// * `table` - Table name
/// * `seq` - Insertion sequence number within the table
/// * `timestamp_nanos` - Wall clock nanoseconds at insertion
/// * `nonce` - Collision counter, bumped by the store on a clash
///
/// # Returns
///
/// An id of the form `<prefix>_<16 hex chars>`.
pub fn generate_record_id(
    prefix: &str,
    table: &str,
    seq: u64,
    timestamp_nanos: i64,
    nonce: u32,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(table.as_bytes());
    hasher.update(seq.to_le_bytes());
    hasher.update(timestamp_nanos.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hash = hasher.finalize();
    let hex = format!("{:x}", hash);
    format!("{}_{}", prefix, &hex[..ID_HEX_LEN])
}

/// Validates that an id has the expected prefix and hex suffix.
///
/// # Errors
///
/// Returns an error if the prefix does not match or the suffix is not
/// exactly [`ID_HEX_LEN`] lowercase hex characters.
pub fn validate_id_format(id: &str, prefix: &str) -> Result<()> {
    let suffix = id
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('_'))
        .ok_or_else(|| Error::InvalidRecord(format!("Id {id} does not start with {prefix}_")))?;

    if suffix.len() != ID_HEX_LEN
        || !suffix
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    {
        return Err(Error::InvalidRecord(format!(
            "Id {id} must end in {ID_HEX_LEN} lowercase hex characters"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_is_valid() {
        let id = generate_record_id("lst", "listings", 7, 1_700_000_000_000_000_000, 0);
        assert!(validate_id_format(&id, "lst").is_ok(), "{id}");
    }

    #[test]
    fn test_nonce_changes_id() {
        let a = generate_record_id("lst", "listings", 1, 42, 0);
        let b = generate_record_id("lst", "listings", 1, 42, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_wrong_prefix_rejected() {
        let id = generate_record_id("usr", "users", 1, 42, 0);
        assert!(validate_id_format(&id, "lst").is_err());
    }
}
