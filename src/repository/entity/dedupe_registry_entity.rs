use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Persisted dedupe registry: key -> RFC 3339 timestamp
///
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DedupeRegistryEntity {
    pub entries: BTreeMap<String, String>,
}
