//! Storage keys and the value encodings stored under them.

use std::collections::BTreeSet;

use sense_core::model::SectionId;
use tracing::debug;

use crate::repository::StorageError;

/// Session flag: the hub boot sequence already ran. Value is `"true"`.
pub const SYSTEM_ACTIVE: &str = "isekai_system_active";

/// Durable JSON array of visited section paths.
pub const VISITED_SELVES: &str = "visited_selves";

/// Durable decimal count of visited sections, kept alongside the set.
pub const UNLOCK_COUNTER: &str = "hasUnlocked";

pub const FLAG_TRUE: &str = "true";

/// Encode a visited set as a JSON array of paths.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_visited(visited: &BTreeSet<SectionId>) -> Result<String, StorageError> {
    serde_json::to_string(visited).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Decode a stored visited set.
///
/// Entries that are not valid section paths are dropped; a value that is not
/// a JSON array of strings is an error.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed values.
pub fn decode_visited(raw: &str) -> Result<BTreeSet<SectionId>, StorageError> {
    let entries: Vec<String> =
        serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))?;
    Ok(entries
        .into_iter()
        .filter_map(|entry| match SectionId::new(entry.as_str()) {
            Ok(id) => Some(id),
            Err(_) => {
                debug!(%entry, "dropping invalid visited entry");
                None
            }
        })
        .collect())
}

#[must_use]
pub fn encode_counter(count: usize) -> String {
    count.to_string()
}

/// # Errors
///
/// Returns `StorageError::Serialization` if `raw` is not a decimal count.
pub fn decode_counter(raw: &str) -> Result<usize, StorageError> {
    raw.trim()
        .parse()
        .map_err(|_| StorageError::Serialization(format!("invalid counter: {raw}")))
}
