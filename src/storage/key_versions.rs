use super::Error;
use std::time::SystemTime;

///
/// Observable state of a stored value, changes whenever the value is written
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyVersion {
    pub modified: SystemTime,
    pub len: u64,
}

#[cfg_attr(test, mockall::automock)]
pub trait KeyVersions: Send + Sync {
    ///
    /// Reads current version of the key.
    ///
    /// ### Returns
    /// None when nothing is stored under the key
    ///
    fn version(&self, key: &str) -> Result<Option<KeyVersion>, Error>;
}
